use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Home,
    Viewer,
}

#[derive(Component)]
pub struct FpsText;

/// Everything spawned for the viewer screen, despawned when it closes.
#[derive(Component)]
pub struct ViewerEntity;

/// Per-frame ordering of viewer input and camera work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSystems {
    /// Raw touch and mouse sampling. Runs in every state.
    Pointer,
    Recognize,
    Gesture,
    Tap,
    Zoom,
    Camera,
}

// Leave the loading screen once the config is resolved
pub fn transition_to_home(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.config_loaded {
        if loading_progress.config_fell_back {
            info!("→ Transitioning to Home state (default config)");
        } else {
            info!("→ Transitioning to Home state");
        }
        next_state.set(AppState::Home);
    }
}
