use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_loaded: bool,
    pub config_fell_back: bool,
}
