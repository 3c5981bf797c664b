//! Recorded drawing sessions: a canvas size plus an ordered action list.
//!
//! ```json
//! { "width": 400, "height": 300, "actions": [
//!     { "op": "color", "value": "#FF6B6B" },
//!     { "op": "down", "x": 10, "y": 10 },
//!     { "op": "move", "x": 90, "y": 40 },
//!     { "op": "up", "x": 90, "y": 40 },
//!     { "op": "key", "key": "s", "ctrl": true }
//! ] }
//! ```

use serde::Deserialize;
use serenart_core::Color;
use serenart_editor::{DrawingSurface, EventResponse, InputEvent, ShortcutAction, ShortcutMap};

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel,
    Color { value: Color },
    Width { value: f32 },
    Brush,
    Eraser,
    ColorPicker,
    Shape,
    Undo,
    Redo,
    Clear,
    Resize { width: u32, height: u32 },
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
}

impl Session {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Apply one action. Returns the host shortcut it triggered, if any.
pub fn apply(canvas: &mut DrawingSurface, action: &Action) -> Option<ShortcutAction> {
    let response = match action {
        Action::Down { x, y } => canvas.handle_event(&InputEvent::down(*x, *y)),
        Action::Move { x, y } => canvas.handle_event(&InputEvent::moved(*x, *y)),
        Action::Up { x, y } => canvas.handle_event(&InputEvent::up(*x, *y)),
        Action::Cancel => canvas.handle_event(&InputEvent::PointerCancel),
        Action::Color { value } => {
            canvas.set_brush_color(*value);
            EventResponse::Ignored
        }
        Action::Width { value } => {
            canvas.set_brush_width(*value);
            EventResponse::Ignored
        }
        Action::Brush => {
            canvas.select_brush_tool();
            EventResponse::Ignored
        }
        Action::Eraser => {
            canvas.select_eraser_tool();
            EventResponse::Ignored
        }
        Action::ColorPicker => {
            canvas.select_color_picker();
            EventResponse::Ignored
        }
        Action::Shape => {
            canvas.select_shape_tool();
            EventResponse::Ignored
        }
        Action::Undo => canvas.apply_shortcut(ShortcutAction::Undo),
        Action::Redo => canvas.apply_shortcut(ShortcutAction::Redo),
        Action::Clear => canvas.apply_shortcut(ShortcutAction::ClearAll),
        Action::Resize { width, height } => {
            canvas.resize(*width, *height);
            EventResponse::Redraw
        }
        Action::Key {
            key,
            ctrl,
            shift,
            alt,
            meta,
        } => {
            if ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta).is_none() {
                log::warn!("unbound key {key:?}");
            }
            canvas.handle_event(&InputEvent::Key {
                key: key.clone(),
                ctrl: *ctrl,
                shift: *shift,
                alt: *alt,
                meta: *meta,
            })
        }
    };

    match response {
        EventResponse::Host(host) => Some(host),
        _ => None,
    }
}
