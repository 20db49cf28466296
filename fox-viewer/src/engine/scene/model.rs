use bevy::prelude::*;
use constants::model::{EMPHASIS_SCALE, EMPHASIS_SMOOTHING};

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::core::app_state::ViewerEntity;
use crate::engine::input::tap_gesture::TapGestureEvent;

/// Carries the configured model scale and offset.
#[derive(Component)]
pub struct ModelRoot;

/// Scale spring between the model root and the glTF scene, toggled by taps.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ModelEmphasis {
    pub current: f32,
    pub target: f32,
}

impl Default for ModelEmphasis {
    fn default() -> Self {
        Self {
            current: 1.0,
            target: 1.0,
        }
    }
}

impl ModelEmphasis {
    pub fn toggle(&mut self) {
        self.target = if self.target > 1.0 { 1.0 } else { EMPHASIS_SCALE };
    }

    pub fn step(&mut self, factor: f32) -> f32 {
        self.current += (self.target - self.current) * factor;
        self.current
    }
}

/// Spawn the model root and its emphasis group. The glTF scene attaches to the group later.
pub fn spawn_model_root(commands: &mut Commands, config: &ViewerConfig) {
    commands
        .spawn((
            ModelRoot,
            ViewerEntity,
            Name::new("ModelRoot"),
            config.model_transform(),
            Visibility::default(),
        ))
        .with_children(|root| {
            root.spawn((
                ModelEmphasis::default(),
                Name::new("EmphasisGroup"),
                Transform::IDENTITY,
                Visibility::default(),
            ));
        });
}

pub fn toggle_emphasis_on_tap(
    mut taps: EventReader<TapGestureEvent>,
    mut emphasis_query: Query<&mut ModelEmphasis>,
) {
    for _ in taps.read() {
        for mut emphasis in &mut emphasis_query {
            emphasis.toggle();
            debug!("Model emphasis target: {}", emphasis.target);
        }
    }
}

pub fn animate_emphasis(mut emphasis_query: Query<(&mut ModelEmphasis, &mut Transform)>) {
    for (mut emphasis, mut transform) in &mut emphasis_query {
        if emphasis.current == emphasis.target {
            continue;
        }
        let mut scale = emphasis.step(EMPHASIS_SMOOTHING);
        if (emphasis.target - scale).abs() < 1e-3 {
            emphasis.current = emphasis.target;
            scale = emphasis.target;
        }
        transform.scale = Vec3::splat(scale);
    }
}
