use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::model::CONFIG_PATH;

use super::model_loader::ModelAssets;
use super::progress::LoadingProgress;
use crate::engine::assets::viewer_config::{ConfigError, ViewerConfig};

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ViewerConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading viewer config from: {}", CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(CONFIG_PATH));
}

/// Resolve the config once it loads (or fails), then request the model.
pub fn load_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<ViewerConfig>>,
) {
    if loading_progress.config_loaded {
        return;
    }
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let resolved = if let Some(config) = configs.get(handle) {
        Ok(config.clone())
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        Err(ConfigError::LoadFailed(err.to_string()))
    } else {
        return;
    };

    let config = match resolved.and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => {
            info!("✓ Viewer config loaded");
            config
        }
        Err(err @ ConfigError::LoadFailed(_)) => {
            warn!("{} - falling back to default viewer config", err);
            loading_progress.config_fell_back = true;
            ViewerConfig::default()
        }
        Err(err) => {
            error!("Invalid viewer config: {} - falling back to defaults", err);
            loading_progress.config_fell_back = true;
            ViewerConfig::default()
        }
    };

    info!("Preloading model: {}", config.model_path);
    commands.insert_resource(ModelAssets::new(asset_server.load(&config.model_path)));
    commands.insert_resource(config);
    loading_progress.config_loaded = true;
}
