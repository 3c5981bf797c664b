//! Input abstraction layer.
//!
//! Normalizes touch, mouse, and stylus events into a unified `InputEvent`
//! enum consumed by the drawing surface. Coordinates are surface-local.

/// A normalized input event from any pointing device or keyboard.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (touch start, mouse down, pencil contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while pressed.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// The platform aborted the gesture (palm rejection, window lost focus).
    PointerCancel,

    /// Keyboard shortcut.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// A key press with no modifiers.
    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// A key press with Ctrl held.
    pub fn ctrl_key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl: true,
            shift: false,
            alt: false,
            meta: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_matching_variants() {
        assert_eq!(InputEvent::down(1.0, 2.0), InputEvent::PointerDown { x: 1.0, y: 2.0 });
        assert_eq!(InputEvent::moved(3.0, 4.0), InputEvent::PointerMove { x: 3.0, y: 4.0 });
        assert_eq!(InputEvent::up(5.0, 6.0), InputEvent::PointerUp { x: 5.0, y: 6.0 });
        assert_eq!(
            InputEvent::ctrl_key("z"),
            InputEvent::Key {
                key: "z".to_string(),
                ctrl: true,
                shift: false,
                alt: false,
                meta: false,
            }
        );
    }
}
