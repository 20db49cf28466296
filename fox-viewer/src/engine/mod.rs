pub mod assets;
pub mod camera;
pub mod core;
pub mod input;
pub mod loading;
pub mod scene;
pub mod systems;
