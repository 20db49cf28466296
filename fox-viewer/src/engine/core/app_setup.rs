use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::CLEAR_COLOUR;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::orbit_camera::{
    ZoomAction, apply_pan_gestures, apply_zoom_actions, update_orbit_camera,
};
use crate::engine::core::app_state::{AppState, ViewerEntity, ViewerSystems, transition_to_home};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::pan_gesture::{PanGestureEvent, recognize_pan_gestures};
use crate::engine::input::pointer::{
    PointerEvent, clear_pending_pointer_events, collect_pointer_events,
};
use crate::engine::input::tap_gesture::{TapGestureEvent, recognize_tap_gestures};
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::model_loader::attach_model_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::reset_ambient_light;
use crate::engine::scene::model::{animate_emphasis, toggle_emphasis_on_tap};
use crate::screens::despawn_screen;
use crate::screens::home::{HomeScreen, fox_button_interaction, setup_home_screen};
use crate::screens::loading::{LoadingScreen, setup_loading_screen};
use crate::screens::navigation::{
    NavigateEvent, NavigationGestures, NavigationHistory, disable_navigation_gestures,
    handle_navigation, recognize_edge_swipe, restore_navigation_gestures,
};
use crate::screens::viewer::{setup_viewer, teardown_viewer};
use crate::ui::header::header_back_button_interaction;
use crate::ui::zoom_controls::zoom_button_interaction;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::{
    debug_camera::debug_orbit_state, fps_tracking::fps_text_update_system,
};
#[cfg(not(target_arch = "wasm32"))]
use crate::screens::navigation::navigate_back_on_escape;
#[cfg(not(target_arch = "wasm32"))]
use crate::ui::zoom_controls::zoom_keyboard_shortcuts;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerConfig as a loadable asset type from *.viewer.json files.
        .add_plugins(JsonAssetPlugin::<ViewerConfig>::new(&["viewer.json"]))
        .insert_resource(ClearColor(CLEAR_COLOUR));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<NavigationHistory>()
        .init_resource::<NavigationGestures>()
        .add_event::<PointerEvent>()
        .add_event::<PanGestureEvent>()
        .add_event::<TapGestureEvent>()
        .add_event::<ZoomAction>()
        .add_event::<NavigateEvent>();

    app.add_systems(Startup, start_loading).add_systems(
        Update,
        (load_config_system, transition_to_home)
            .chain()
            .run_if(in_state(AppState::Loading)),
    );

    #[cfg(target_arch = "wasm32")]
    {
        use crate::engine::core::window_config::configure_web_canvas;
        app.add_systems(Startup, configure_web_canvas);
    }

    // Screen lifecycle
    app.add_systems(OnEnter(AppState::Loading), setup_loading_screen)
        .add_systems(OnExit(AppState::Loading), despawn_screen::<LoadingScreen>)
        .add_systems(OnEnter(AppState::Home), setup_home_screen)
        .add_systems(OnExit(AppState::Home), despawn_screen::<HomeScreen>);

    configure_viewer_lifecycle(&mut app);
    configure_viewer_systems(&mut app);

    // Navigation runs after every source of navigate events
    app.add_systems(
        Update,
        (
            recognize_edge_swipe
                .after(ViewerSystems::Pointer)
                .run_if(resource_exists::<ViewerConfig>),
            fox_button_interaction.run_if(in_state(AppState::Home)),
            header_back_button_interaction,
            handle_navigation,
        )
            .chain(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            navigate_back_on_escape
                .before(handle_navigation)
                .run_if(in_state(AppState::Viewer)),
        )
        .add_systems(
            Update,
            (fps_text_update_system, debug_orbit_state).run_if(in_state(AppState::Viewer)),
        );
    }

    app
}

/// Mount and unmount of the viewer screen.
pub fn configure_viewer_lifecycle(app: &mut App) {
    app.add_systems(
        OnEnter(AppState::Viewer),
        (
            setup_viewer,
            clear_pending_pointer_events,
            disable_navigation_gestures,
        ),
    )
    .add_systems(
        OnExit(AppState::Viewer),
        (
            teardown_viewer,
            despawn_screen::<ViewerEntity>,
            reset_ambient_light,
            restore_navigation_gestures,
        ),
    );
}

/// Pointer collection, then recognizers, then the gesture mapper, the tap consumer,
/// zoom actions and finally the camera smoother.
fn configure_viewer_systems(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ViewerSystems::Pointer,
            ViewerSystems::Recognize,
            ViewerSystems::Gesture,
            ViewerSystems::Tap,
            ViewerSystems::Zoom,
            ViewerSystems::Camera,
        )
            .chain(),
    );
    for set in [
        ViewerSystems::Recognize,
        ViewerSystems::Gesture,
        ViewerSystems::Tap,
        ViewerSystems::Zoom,
        ViewerSystems::Camera,
    ] {
        app.configure_sets(Update, set.run_if(in_state(AppState::Viewer)));
    }

    app.add_systems(
        Update,
        (
            collect_pointer_events.in_set(ViewerSystems::Pointer),
            (recognize_pan_gestures, recognize_tap_gestures).in_set(ViewerSystems::Recognize),
            apply_pan_gestures.in_set(ViewerSystems::Gesture),
            toggle_emphasis_on_tap.in_set(ViewerSystems::Tap),
            (zoom_button_interaction, apply_zoom_actions)
                .chain()
                .in_set(ViewerSystems::Zoom),
            (update_orbit_camera, animate_emphasis, attach_model_when_ready)
                .in_set(ViewerSystems::Camera),
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            zoom_keyboard_shortcuts
                .in_set(ViewerSystems::Zoom)
                .before(apply_zoom_actions),
        );
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    // Renderer crates are noisy at info level
    let log_config = LogPlugin {
        filter: "wgpu=error,naga=warn,fox_viewer=debug".into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
