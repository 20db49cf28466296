use bevy::prelude::*;
use constants::render_settings::HEADER_TEXT;

#[derive(Component)]
pub struct LoadingScreen;

pub fn setup_loading_screen(mut commands: Commands) {
    commands.spawn((LoadingScreen, Camera2d));
    commands
        .spawn((
            LoadingScreen,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(HEADER_TEXT),
            ));
        });
}
