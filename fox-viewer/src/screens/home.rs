use bevy::prelude::*;
use constants::render_settings::{NAV_BUTTON_BACKGROUND, NAV_BUTTON_PRESSED};

use super::navigation::NavigateEvent;
use crate::engine::core::app_state::AppState;
use crate::ui::header::spawn_header;

#[derive(Component)]
pub struct HomeScreen;

#[derive(Component)]
pub struct FoxButton;

pub fn setup_home_screen(mut commands: Commands) {
    commands.spawn((HomeScreen, Camera2d));
    spawn_header(&mut commands, "Home", false, HomeScreen);

    commands
        .spawn((
            HomeScreen,
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
            parent
                .spawn((
                    FoxButton,
                    Button,
                    Name::new("FoxButton"),
                    BackgroundColor(NAV_BUTTON_BACKGROUND),
                    BorderRadius::all(Val::Px(8.0)),
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Fox"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

pub fn fox_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<FoxButton>)>,
    mut navigate: EventWriter<NavigateEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(NAV_BUTTON_PRESSED);
                navigate.write(NavigateEvent::To(AppState::Viewer));
            }
            Interaction::Hovered | Interaction::None => {
                *bg = BackgroundColor(NAV_BUTTON_BACKGROUND);
            }
        }
    }
}
