//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! ⌘ on macOS and Ctrl elsewhere play the same role.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    ToolBrush,
    ToolEraser,
    ToolColorPicker,
    ToolShapes,

    // ── Pen ──
    GrowBrush,
    ShrinkBrush,
    /// Abandon the stroke in progress.
    CancelStroke,

    // ── Edit ──
    Undo,
    Redo,
    ClearAll,

    // ── Host ──
    Save,
    ShowHelp,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the platform key name (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "s" | "S" => Some(ShortcutAction::Save),
                "Delete" | "Backspace" => Some(ShortcutAction::ClearAll),
                _ => None,
            };
        }

        if shift {
            return match key {
                "?" => Some(ShortcutAction::ShowHelp),
                _ => None,
            };
        }

        // ── Single keys (no modifiers) ──
        match key {
            "b" | "B" => Some(ShortcutAction::ToolBrush),
            "e" | "E" => Some(ShortcutAction::ToolEraser),
            "c" | "C" => Some(ShortcutAction::ToolColorPicker),
            "s" | "S" => Some(ShortcutAction::ToolShapes),
            "]" => Some(ShortcutAction::GrowBrush),
            "[" => Some(ShortcutAction::ShrinkBrush),
            "Escape" => Some(ShortcutAction::CancelStroke),
            "?" => Some(ShortcutAction::ShowHelp),
            _ => None,
        }
    }

    /// Human-readable binding list for the instructions dialog.
    pub fn help_text() -> &'static str {
        "B  brush\n\
         E  eraser\n\
         C  colors\n\
         S  shapes\n\
         [ / ]  smaller / larger brush\n\
         Esc  cancel stroke\n\
         Ctrl+Z  undo\n\
         Ctrl+Shift+Z / Ctrl+Y  redo\n\
         Ctrl+Delete  clear canvas\n\
         Ctrl+S  save"
    }
}
