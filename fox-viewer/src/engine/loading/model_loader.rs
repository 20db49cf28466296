use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::viewer_config::{AnimationSelection, ViewerConfig};
use crate::engine::scene::model::ModelEmphasis;
use crate::engine::scene::placeholder::Placeholder;
use crate::engine::systems::debug_model::{log_gltf_contents, log_scene_graph_when_ready};

/// The glTF handle requested as soon as the config resolves.
#[derive(Resource)]
pub struct ModelAssets {
    pub gltf: Handle<Gltf>,
    failure_reported: bool,
}

impl ModelAssets {
    pub fn new(gltf: Handle<Gltf>) -> Self {
        Self {
            gltf,
            failure_reported: false,
        }
    }
}

/// Graph and node to auto-play once the scene instance is ready.
#[derive(Component, Clone)]
pub struct ModelAnimation {
    pub graph: Handle<AnimationGraph>,
    pub index: AnimationNodeIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipChoice {
    Selected(usize),
    /// Requested clip is missing; the first clip plays instead.
    Fallback,
    NoClips,
}

pub fn select_clip_index(
    selection: &AnimationSelection,
    clip_count: usize,
    index_of_name: impl Fn(&str) -> Option<usize>,
) -> ClipChoice {
    if clip_count == 0 {
        return ClipChoice::NoClips;
    }

    let requested = match selection {
        AnimationSelection::Index(index) => Some(*index),
        AnimationSelection::Name(name) => index_of_name(name),
    };

    match requested {
        Some(index) if index < clip_count => ClipChoice::Selected(index),
        _ => ClipChoice::Fallback,
    }
}

fn load_failure(asset_server: &AssetServer, handle: &Handle<Gltf>) -> Option<String> {
    if let LoadState::Failed(err) = asset_server.load_state(handle) {
        return Some(err.to_string());
    }
    if let RecursiveDependencyLoadState::Failed(err) =
        asset_server.recursive_dependency_load_state(handle)
    {
        return Some(err.to_string());
    }
    None
}

/// Swap the placeholder for the glTF scene once it and its dependencies are loaded.
pub fn attach_model_when_ready(
    mut commands: Commands,
    mut model_assets: ResMut<ModelAssets>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    config: Res<ViewerConfig>,
    placeholders: Query<Entity, With<Placeholder>>,
    emphasis_groups: Query<Entity, With<ModelEmphasis>>,
) {
    if placeholders.is_empty() || model_assets.failure_reported {
        return;
    }
    let Ok(group) = emphasis_groups.single() else {
        return;
    };

    if let Some(err) = load_failure(&asset_server, &model_assets.gltf) {
        error!("Failed to load model {}: {}", config.model_path, err);
        model_assets.failure_reported = true;
        return;
    }
    if !asset_server.is_loaded_with_dependencies(&model_assets.gltf) {
        return;
    }
    let Some(gltf) = gltfs.get(&model_assets.gltf) else {
        return;
    };

    let Some(scene) = gltf
        .default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
    else {
        error!("Model {} has no scenes to display", config.model_path);
        model_assets.failure_reported = true;
        return;
    };

    if config.debug_model_info {
        log_gltf_contents(gltf);
    }

    for entity in &placeholders {
        commands.entity(entity).despawn();
    }

    let mut model = commands.spawn((Name::new("ModelScene"), SceneRoot(scene), ChildOf(group)));

    let choice = select_clip_index(&config.animation, gltf.animations.len(), |name| {
        let handle = gltf.named_animations.get(name)?;
        gltf.animations.iter().position(|clip| clip == handle)
    });
    let clip = match choice {
        ClipChoice::Selected(index) => Some(index),
        ClipChoice::Fallback => {
            warn!(
                "Animation {:?} not found in {} - playing the first clip",
                config.animation, config.model_path
            );
            Some(0)
        }
        ClipChoice::NoClips => {
            info!("Model {} has no animations", config.model_path);
            None
        }
    };

    if let Some(clip_handle) = clip.and_then(|index| gltf.animations.get(index)) {
        let (graph, index) = AnimationGraph::from_clip(clip_handle.clone());
        model.insert(ModelAnimation {
            graph: graphs.add(graph),
            index,
        });
        model.observe(play_animation_when_ready);
    }
    if config.debug_model_info {
        model.observe(log_scene_graph_when_ready);
    }

    info!("✓ Model attached: {}", config.model_path);
}

/// Start the selected clip on every animation player inside the spawned scene.
pub fn play_animation_when_ready(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    children: Query<&Children>,
    animations: Query<&ModelAnimation>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let root = trigger.target();
    let Ok(animation) = animations.get(root) else {
        return;
    };

    for entity in children.iter_descendants(root) {
        if let Ok(mut player) = players.get_mut(entity) {
            player.play(animation.index).repeat();
            commands
                .entity(entity)
                .insert(AnimationGraphHandle(animation.graph.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fox_names(name: &str) -> Option<usize> {
        ["Survey", "Walk", "Run"].iter().position(|n| *n == name)
    }

    #[test]
    fn default_selection_plays_the_second_clip() {
        let choice = select_clip_index(&AnimationSelection::default(), 3, fox_names);
        assert_eq!(choice, ClipChoice::Selected(1));
    }

    #[test]
    fn selects_by_name() {
        let choice = select_clip_index(&AnimationSelection::Name("Run".into()), 3, fox_names);
        assert_eq!(choice, ClipChoice::Selected(2));
    }

    #[test]
    fn missing_clip_falls_back() {
        let by_name = select_clip_index(&AnimationSelection::Name("Jump".into()), 3, fox_names);
        assert_eq!(by_name, ClipChoice::Fallback);

        let by_index = select_clip_index(&AnimationSelection::Index(1), 1, fox_names);
        assert_eq!(by_index, ClipChoice::Fallback);
    }

    #[test]
    fn model_without_clips_plays_nothing() {
        let choice = select_clip_index(&AnimationSelection::Index(0), 0, |_| None);
        assert_eq!(choice, ClipChoice::NoClips);
    }
}
