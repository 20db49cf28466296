use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

fn sorted_names<'a>(names: impl Iterator<Item = &'a Box<str>>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.map(|name| name.as_ref()).collect();
    names.sort_unstable();
    names
}

/// Print node, material and clip names from a loaded glTF.
pub fn log_gltf_contents(gltf: &Gltf) {
    info!("=== MODEL CONTENTS ===");
    info!(
        "Scenes: {} (default: {})",
        gltf.scenes.len(),
        gltf.default_scene.is_some()
    );
    info!("Nodes: {:?}", sorted_names(gltf.named_nodes.keys()));
    info!("Materials: {:?}", sorted_names(gltf.named_materials.keys()));

    let clips = sorted_names(gltf.named_animations.keys());
    info!("Animations ({}): {:?}", gltf.animations.len(), clips);
}

/// Print the spawned scene hierarchy once the instance is ready.
pub fn log_scene_graph_when_ready(
    trigger: Trigger<SceneInstanceReady>,
    children: Query<&Children>,
    names: Query<&Name>,
    players: Query<(), With<AnimationPlayer>>,
) {
    info!("=== SCENE GRAPH ===");
    log_entity(trigger.target(), 0, &children, &names, &players);
}

fn log_entity(
    entity: Entity,
    depth: usize,
    children: &Query<&Children>,
    names: &Query<&Name>,
    players: &Query<(), With<AnimationPlayer>>,
) {
    let name = names.get(entity).map(|n| n.as_str()).unwrap_or("<unnamed>");
    let marker = if players.contains(entity) {
        " [AnimationPlayer]"
    } else {
        ""
    };
    info!("{}{} {}{}", "  ".repeat(depth), entity, name, marker);

    if let Ok(kids) = children.get(entity) {
        for &child in &**kids {
            log_entity(child, depth + 1, children, names, players);
        }
    }
}
