use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: "Fox Viewer".into(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Fox Viewer".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Stop the browser from scrolling or selecting text while a gesture is in progress.
#[cfg(target_arch = "wasm32")]
pub fn configure_web_canvas() {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("No document available for canvas configuration");
        return;
    };
    let Some(canvas) = document
        .query_selector("#bevy")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        warn!("Canvas #bevy not found - touch-action left at browser default");
        return;
    };

    let style = canvas.style();
    for (property, value) in [
        ("touch-action", "none"),
        ("user-select", "none"),
        ("-webkit-user-select", "none"),
    ] {
        if let Err(e) = style.set_property(property, value) {
            warn!("Failed to set canvas {}: {:?}", property, e);
        }
    }
}
