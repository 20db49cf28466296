use bevy::prelude::*;
use constants::render_settings::{
    HEADER_BACKGROUND, HEADER_HEIGHT, HEADER_TEXT, NAV_BUTTON_BACKGROUND, NAV_BUTTON_PRESSED,
};

use crate::engine::input::pointer::OverlayButton;
use crate::screens::navigation::NavigateEvent;

#[derive(Component)]
pub struct HeaderBackButton;

/// Top bar with a title and, when `with_back` is set, a back button.
pub fn spawn_header(commands: &mut Commands, title: &str, with_back: bool, screen: impl Bundle) {
    commands
        .spawn((
            screen,
            Name::new("Header"),
            BackgroundColor(HEADER_BACKGROUND),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(HEADER_HEIGHT),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                padding: UiRect::horizontal(Val::Px(12.0)),
                column_gap: Val::Px(12.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|header| {
            if with_back {
                header
                    .spawn((
                        HeaderBackButton,
                        OverlayButton,
                        Button,
                        Name::new("BackButton"),
                        BackgroundColor(NAV_BUTTON_BACKGROUND),
                        BorderRadius::all(Val::Px(6.0)),
                        Node {
                            height: Val::Px(36.0),
                            padding: UiRect::horizontal(Val::Px(12.0)),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("< Back"),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }

            header.spawn((
                Text::new(title),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(HEADER_TEXT),
            ));
        });
}

pub fn header_back_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<HeaderBackButton>),
    >,
    mut navigate: EventWriter<NavigateEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(NAV_BUTTON_PRESSED);
                navigate.write(NavigateEvent::Back);
            }
            Interaction::Hovered | Interaction::None => {
                *bg = BackgroundColor(NAV_BUTTON_BACKGROUND);
            }
        }
    }
}
