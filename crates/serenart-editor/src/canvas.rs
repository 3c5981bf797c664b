//! The drawing surface: pointer gestures in, committed strokes out.
//!
//! Gesture state machine:
//!
//! | State | Event | Next | Effect |
//! |-------|-------|------|--------|
//! | Idle | down | Stroking | begin path with current pen paint |
//! | Stroking | move | Stroking | extend path, redraw overlay |
//! | Stroking | up | Idle | commit to history, paint onto raster |
//! | Stroking | cancel | Idle | discard the path |
//!
//! Any other event/state pair is ignored. Undo, redo and clear never touch
//! raster pixels directly; they rebuild the raster by replaying history.

use crate::input::InputEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{PenState, ToolKind, ToolMode};
use serenart_core::{CanvasConfig, CanvasError, Color, Point, StrokeBuilder, StrokeHistory};
use serenart_render::{CompositingSurface, Pixmap};

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Nothing visible changed.
    Ignored,
    /// Repaint from `render_frame`.
    Redraw,
    /// A host-level shortcut (save, help) the surface does not handle itself.
    Host(ShortcutAction),
}

impl EventResponse {
    pub fn needs_redraw(self) -> bool {
        self == EventResponse::Redraw
    }

    fn redraw_if(changed: bool) -> Self {
        if changed {
            EventResponse::Redraw
        } else {
            EventResponse::Ignored
        }
    }
}

#[derive(Debug, Clone)]
enum Gesture {
    Idle,
    Stroking(StrokeBuilder),
}

/// Freehand drawing canvas with undo/redo.
///
/// Owns the compositing raster exclusively. Single-threaded; every call
/// runs to completion on the event thread.
pub struct DrawingSurface {
    config: CanvasConfig,
    history: StrokeHistory,
    surface: CompositingSurface,
    pen: PenState,
    gesture: Gesture,
}

impl DrawingSurface {
    /// Open an unsized canvas. Call `resize` once layout is known.
    pub fn new(config: CanvasConfig) -> Self {
        let pen = PenState::new(&config);
        Self {
            config,
            history: StrokeHistory::new(),
            surface: CompositingSurface::new(),
            pen,
            gesture: Gesture::Idle,
        }
    }

    pub fn with_size(config: CanvasConfig, width: u32, height: u32) -> Self {
        let mut canvas = Self::new(config);
        canvas.resize(width, height);
        canvas
    }

    /// Reallocate the raster for a new layout and replay history onto it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.surface.replay(self.history.committed());
    }

    // ─── Input ──────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerDown { x, y } => EventResponse::redraw_if(self.pointer_down(*x, *y)),
            InputEvent::PointerMove { x, y } => EventResponse::redraw_if(self.pointer_move(*x, *y)),
            InputEvent::PointerUp { x, y } => EventResponse::redraw_if(self.pointer_up(*x, *y)),
            InputEvent::PointerCancel => EventResponse::redraw_if(self.pointer_cancel()),
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                Some(action) => self.apply_shortcut(action),
                None => EventResponse::Ignored,
            },
        }
    }

    /// Start a stroke at (x, y). Ignored while a stroke is already in progress.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        log::trace!("pointer down ({x}, {y})");
        if let Gesture::Stroking(_) = self.gesture {
            log::warn!("pointer down while stroking; ignored");
            return false;
        }
        let at = Point::new(f64::from(x), f64::from(y));
        self.gesture = Gesture::Stroking(StrokeBuilder::begin(at, self.pen.paint()));
        true
    }

    /// Extend the stroke in progress. Ignored while idle.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        log::trace!("pointer move ({x}, {y})");
        match &mut self.gesture {
            Gesture::Stroking(builder) => {
                builder.line_to(Point::new(f64::from(x), f64::from(y)));
                true
            }
            Gesture::Idle => false,
        }
    }

    /// Finish the stroke in progress: commit it and paint it onto the raster.
    ///
    /// The release position itself is not appended; the path ends at the
    /// last move.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        log::trace!("pointer up ({x}, {y})");
        let Gesture::Stroking(builder) = std::mem::replace(&mut self.gesture, Gesture::Idle) else {
            log::warn!("pointer up while idle; ignored");
            return false;
        };
        let stroke = builder.finish();
        self.surface.paint_stroke(&stroke);
        self.history.commit(stroke);
        true
    }

    /// Abandon the stroke in progress without committing it.
    pub fn pointer_cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Stroking(builder) => {
                log::debug!("gesture cancelled; discarding {} points", builder.path().len());
                true
            }
            Gesture::Idle => false,
        }
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.gesture, Gesture::Stroking(_))
    }

    // ─── Pen & tools ────────────────────────────────────────────────────

    /// Set the brush color and switch to the brush.
    pub fn set_brush_color(&mut self, color: Color) {
        self.pen.set_brush_color(color);
    }

    /// Set the brush/eraser width; returns the clamped width applied.
    pub fn set_brush_width(&mut self, width: f32) -> f32 {
        self.pen.set_width(width)
    }

    pub fn select_tool(&mut self, kind: ToolKind) {
        self.pen.select(kind);
    }

    pub fn select_brush_tool(&mut self) {
        self.select_tool(ToolKind::Brush);
    }

    /// Future strokes paint the canvas background with the eraser flag set.
    pub fn select_eraser_tool(&mut self) {
        self.select_tool(ToolKind::Eraser);
    }

    pub fn select_color_picker(&mut self) {
        self.select_tool(ToolKind::ColorPicker);
    }

    pub fn select_shape_tool(&mut self) {
        self.select_tool(ToolKind::ShapeTool);
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.pen.mode()
    }

    pub fn brush_color(&self) -> Color {
        self.pen.brush_color()
    }

    pub fn brush_width(&self) -> f32 {
        self.pen.width()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    // ─── History ────────────────────────────────────────────────────────

    /// Undo the newest stroke and replay. Returns `false` on an empty history.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            return false;
        }
        self.surface.replay(self.history.committed());
        true
    }

    /// Redo the most recently undone stroke and replay.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.surface.replay(self.history.committed());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget every stroke and any loaded image; the raster becomes blank.
    pub fn clear_all(&mut self) {
        log::debug!("clear all ({} strokes)", self.history.len());
        self.history.clear();
        self.gesture = Gesture::Idle;
        self.surface.clear_base_image();
        self.surface.replay(&[]);
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    // ─── Output ─────────────────────────────────────────────────────────

    /// Install an existing image under the strokes.
    pub fn load_image(&mut self, image: Pixmap) {
        self.surface.load_base_image(image);
        self.surface.replay(self.history.committed());
    }

    /// The live raster: committed strokes over a transparent background.
    pub fn raster(&self) -> Option<&Pixmap> {
        self.surface.raster()
    }

    /// The frame to show: raster plus the in-progress stroke, if any.
    pub fn render_frame(&self) -> Option<Pixmap> {
        match &self.gesture {
            Gesture::Stroking(builder) => self.surface.frame_with_overlay(builder.path(), builder.paint()),
            Gesture::Idle => self.surface.raster().cloned(),
        }
    }

    /// Flatten the committed strokes onto the canvas background.
    /// The result is an owned snapshot, unaffected by later edits.
    ///
    /// # Errors
    /// Returns `CanvasError::NotSized` before the surface has been sized.
    pub fn export_image(&self) -> Result<Pixmap, CanvasError> {
        self.surface
            .export_flattened(self.config.background, self.history.committed())
            .inspect_err(|_| log::warn!("export requested on an unsized surface"))
    }

    // ─── Shortcuts ──────────────────────────────────────────────────────

    /// Run a shortcut action. Host actions are handed back untouched.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> EventResponse {
        match action {
            ShortcutAction::ToolBrush => self.select_brush_tool(),
            ShortcutAction::ToolEraser => self.select_eraser_tool(),
            ShortcutAction::ToolColorPicker => self.select_color_picker(),
            ShortcutAction::ToolShapes => self.select_shape_tool(),
            ShortcutAction::GrowBrush => {
                self.set_brush_width(self.brush_width() + self.config.brush_step);
            }
            ShortcutAction::ShrinkBrush => {
                self.set_brush_width(self.brush_width() - self.config.brush_step);
            }
            ShortcutAction::CancelStroke => return EventResponse::redraw_if(self.pointer_cancel()),
            ShortcutAction::Undo => return EventResponse::redraw_if(self.undo()),
            ShortcutAction::Redo => return EventResponse::redraw_if(self.redo()),
            ShortcutAction::ClearAll => {
                self.clear_all();
                return EventResponse::Redraw;
            }
            ShortcutAction::Save | ShortcutAction::ShowHelp => return EventResponse::Host(action),
        }
        EventResponse::Ignored
    }
}
