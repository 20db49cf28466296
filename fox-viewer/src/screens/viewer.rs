use bevy::prelude::*;

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::orbit::OrbitController;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::app_state::ViewerEntity;
use crate::engine::input::pan_gesture::PanRecognizer;
use crate::engine::input::tap_gesture::TapRecognizer;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::model::spawn_model_root;
use crate::engine::scene::placeholder::spawn_placeholder;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::spawn_fps_text;
use crate::ui::header::spawn_header;
use crate::ui::zoom_controls::spawn_zoom_controls;

/// Mount the viewer: controller and recognizers, camera, scene and overlays.
pub fn setup_viewer(
    mut commands: Commands,
    config: Res<ViewerConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let controller = OrbitController::new(&config.camera);
    let camera_position = controller.camera_position();

    commands.insert_resource(controller);
    commands.insert_resource(PanRecognizer::new(config.gesture));
    commands.insert_resource(TapRecognizer::new(config.gesture));

    commands.spawn((
        ViewerEntity,
        OrbitCamera,
        Camera3d::default(),
        Transform::from_translation(camera_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_lighting(&mut commands);
    spawn_placeholder(&mut commands, &mut meshes, &mut materials);
    spawn_model_root(&mut commands, &config);

    spawn_header(&mut commands, "Fox", true, ViewerEntity);
    spawn_zoom_controls(&mut commands);
    #[cfg(not(target_arch = "wasm32"))]
    if config.show_fps {
        spawn_fps_text(&mut commands);
    }

    info!("Viewer mounted - radius {:.1}", config.camera.initial_radius);
}

pub fn teardown_viewer(mut commands: Commands) {
    commands.remove_resource::<OrbitController>();
    commands.remove_resource::<PanRecognizer>();
    commands.remove_resource::<TapRecognizer>();

    info!("Viewer unmounted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::query::QueryFilter;
    use bevy::state::app::StatesPlugin;

    use crate::engine::core::app_setup::configure_viewer_lifecycle;
    use crate::engine::core::app_state::AppState;
    use crate::engine::input::pan_gesture::{PanGestureEvent, recognize_pan_gestures};
    use crate::engine::input::pointer::{PointerEvent, PointerPhase};
    use crate::engine::input::tap_gesture::{TapGestureEvent, recognize_tap_gestures};
    use crate::engine::scene::model::{ModelEmphasis, toggle_emphasis_on_tap};
    use crate::screens::navigation::NavigationGestures;
    use crate::ui::zoom_controls::ZoomButton;

    fn lifecycle_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<NavigationGestures>()
            .insert_resource(ViewerConfig::default())
            .add_event::<PointerEvent>()
            .add_event::<PanGestureEvent>()
            .add_event::<TapGestureEvent>()
            .add_systems(
                Update,
                (
                    recognize_pan_gestures,
                    recognize_tap_gestures,
                    toggle_emphasis_on_tap,
                )
                    .chain()
                    .run_if(in_state(AppState::Viewer)),
            );
        configure_viewer_lifecycle(&mut app);
        app
    }

    fn go_to(app: &mut App, state: AppState) {
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(state);
        app.update();
    }

    fn count<F: QueryFilter>(app: &mut App) -> usize {
        let mut query = app.world_mut().query_filtered::<Entity, F>();
        query.iter(app.world()).count()
    }

    fn pointer(phase: PointerPhase, timestamp: f32) -> PointerEvent {
        PointerEvent {
            id: 0,
            phase,
            position: Vec2::new(200.0, 300.0),
            timestamp,
        }
    }

    fn emphasis_target(app: &mut App) -> f32 {
        let mut query = app.world_mut().query::<&ModelEmphasis>();
        query.single(app.world()).unwrap().target
    }

    #[test]
    fn viewer_mounts_fresh_and_unmounts_cleanly() {
        let mut app = lifecycle_app();
        let camera = ViewerConfig::default().camera;

        go_to(&mut app, AppState::Viewer);
        {
            let controller = app.world().resource::<OrbitController>();
            assert_eq!(controller.rotation.theta, camera.initial_theta);
            assert_eq!(controller.zoom.target_radius, camera.initial_radius);
        }
        assert!(app.world().contains_resource::<PanRecognizer>());
        assert!(app.world().contains_resource::<TapRecognizer>());
        assert!(count::<With<ViewerEntity>>(&mut app) > 0);
        assert_eq!(count::<With<ZoomButton>>(&mut app), 2);
        assert!(!app.world().resource::<NavigationGestures>().enabled());

        {
            let mut controller = app.world_mut().resource_mut::<OrbitController>();
            controller.rotation.theta += 1.2;
            controller.zoom_in();
        }

        go_to(&mut app, AppState::Home);
        assert!(!app.world().contains_resource::<OrbitController>());
        assert!(!app.world().contains_resource::<PanRecognizer>());
        assert!(!app.world().contains_resource::<TapRecognizer>());
        assert_eq!(count::<With<ViewerEntity>>(&mut app), 0);
        assert_eq!(count::<With<ZoomButton>>(&mut app), 0);
        assert_eq!(count::<With<ModelEmphasis>>(&mut app), 0);
        assert!(app.world().resource::<NavigationGestures>().enabled());

        go_to(&mut app, AppState::Viewer);
        let controller = app.world().resource::<OrbitController>();
        assert_eq!(controller.rotation.theta, camera.initial_theta);
        assert_eq!(controller.zoom.target_radius, camera.initial_radius);
    }

    #[test]
    fn press_that_opened_the_viewer_is_not_replayed() {
        let mut app = lifecycle_app();
        go_to(&mut app, AppState::Home);

        // The "Fox" button press is forwarded in the same frame that requests the viewer.
        app.world_mut()
            .send_event(pointer(PointerPhase::Pressed, 1.0));
        go_to(&mut app, AppState::Viewer);

        app.world_mut()
            .send_event(pointer(PointerPhase::Released, 1.1));
        app.update();

        assert!(app.world().resource::<Events<TapGestureEvent>>().is_empty());
        assert!(app.world().resource::<Events<PanGestureEvent>>().is_empty());
        assert_eq!(emphasis_target(&mut app), 1.0);

        // A real tap inside the viewer still lands.
        app.world_mut()
            .send_event(pointer(PointerPhase::Pressed, 2.0));
        app.update();
        app.world_mut()
            .send_event(pointer(PointerPhase::Released, 2.1));
        app.update();
        assert_eq!(emphasis_target(&mut app), 1.5);
    }
}
