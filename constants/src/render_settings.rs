use bevy::color::Color;
use bevy::math::Vec3;

pub const CLEAR_COLOUR: Color = Color::srgb(0.93, 0.93, 0.95);

/// Ambient fill, about 0.8 of the key light
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 800.0;
pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 4_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 5.0);

pub const PLACEHOLDER_COLOUR: Color = Color::srgb(1.0, 0.55, 0.0);

pub const ZOOM_BUTTON_SIZE: f32 = 50.0;
pub const ZOOM_BUTTON_MARGIN: f32 = 5.0;
pub const ZOOM_CONTROLS_RIGHT: f32 = 20.0;
pub const ZOOM_CONTROLS_TOP: f32 = 100.0;
pub const ZOOM_BUTTON_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
pub const ZOOM_BUTTON_HOVERED: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
pub const ZOOM_BUTTON_PRESSED: Color = Color::srgba(0.0, 0.0, 0.0, 0.9);
pub const ZOOM_GLYPH_SIZE: f32 = 24.0;

pub const NAV_BUTTON_BACKGROUND: Color = Color::srgb(1.0, 0.39, 0.28);
pub const NAV_BUTTON_PRESSED: Color = Color::srgb(0.85, 0.30, 0.21);
pub const HEADER_BACKGROUND: Color = Color::srgb(0.98, 0.98, 0.98);
pub const HEADER_TEXT: Color = Color::srgb(0.1, 0.1, 0.12);
pub const HEADER_HEIGHT: f32 = 56.0;
