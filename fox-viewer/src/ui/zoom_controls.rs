use bevy::prelude::*;
use constants::render_settings::{
    ZOOM_BUTTON_BACKGROUND, ZOOM_BUTTON_HOVERED, ZOOM_BUTTON_MARGIN, ZOOM_BUTTON_PRESSED,
    ZOOM_BUTTON_SIZE, ZOOM_CONTROLS_RIGHT, ZOOM_CONTROLS_TOP, ZOOM_GLYPH_SIZE,
};

use crate::engine::camera::orbit_camera::ZoomAction;
use crate::engine::core::app_state::ViewerEntity;
use crate::engine::input::pointer::OverlayButton;

#[derive(Component)]
pub struct ZoomButton(pub ZoomAction);

/// Round "+" and "−" buttons pinned to the top right of the viewer.
pub fn spawn_zoom_controls(commands: &mut Commands) {
    commands
        .spawn((
            ViewerEntity,
            Name::new("ZoomControls"),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(ZOOM_CONTROLS_RIGHT),
                top: Val::Px(ZOOM_CONTROLS_TOP),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|controls| {
            for (action, glyph) in [(ZoomAction::In, "+"), (ZoomAction::Out, "−")] {
                controls
                    .spawn((
                        ZoomButton(action),
                        OverlayButton,
                        Button,
                        Name::new(format!("Zoom{:?}Button", action)),
                        BackgroundColor(ZOOM_BUTTON_BACKGROUND),
                        BorderRadius::MAX,
                        Node {
                            width: Val::Px(ZOOM_BUTTON_SIZE),
                            height: Val::Px(ZOOM_BUTTON_SIZE),
                            margin: UiRect::vertical(Val::Px(ZOOM_BUTTON_MARGIN)),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new(glyph),
                            TextFont {
                                font_size: ZOOM_GLYPH_SIZE,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
        });
}

pub fn zoom_button_interaction(
    mut q: Query<(&Interaction, &ZoomButton, &mut BackgroundColor), Changed<Interaction>>,
    mut zoom_actions: EventWriter<ZoomAction>,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                *bg = BackgroundColor(ZOOM_BUTTON_PRESSED);
                zoom_actions.write(button.0);
            }
            Interaction::Hovered => *bg = BackgroundColor(ZOOM_BUTTON_HOVERED),
            Interaction::None => *bg = BackgroundColor(ZOOM_BUTTON_BACKGROUND),
        }
    }
}

// Native keyboard shortcuts; the web build relies on the overlay buttons
#[cfg(not(target_arch = "wasm32"))]
pub fn zoom_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut zoom_actions: EventWriter<ZoomAction>,
) {
    if keyboard.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        zoom_actions.write(ZoomAction::In);
    }
    if keyboard.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        zoom_actions.write(ZoomAction::Out);
    }
}
