//! Tool modes for the drawing canvas.
//!
//! `ToolKind` is the plain selection; `ToolMode` is the tagged snapshot
//! (with the pen attributes each tool carries) handed to the presentation
//! layer. `PenState` owns what the next stroke will be painted with.
//!
//! | Tool | New strokes | Side panel |
//! |------|-------------|------------|
//! | **Brush** | brush color, current width | brush size |
//! | **Eraser** | background color, current width, eraser flag | brush size |
//! | **ColorPicker** | unchanged from the last pen tool | palette |
//! | **ShapeTool** | unchanged from the last pen tool | shape chooser |

use serenart_core::config::clamp_width;
use serenart_core::{CanvasConfig, Color, PaintStyle};

/// The selected tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    ColorPicker,
    ShapeTool,
}

impl ToolKind {
    /// Brush and Eraser attach their own paint to new strokes.
    pub fn is_pen(self) -> bool {
        matches!(self, ToolKind::Brush | ToolKind::Eraser)
    }
}

/// Tool selection together with the attributes it applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolMode {
    Brush { color: Color, width: f32 },
    Eraser { width: f32 },
    ColorPicker,
    ShapeTool,
}

impl ToolMode {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolMode::Brush { .. } => ToolKind::Brush,
            ToolMode::Eraser { .. } => ToolKind::Eraser,
            ToolMode::ColorPicker => ToolKind::ColorPicker,
            ToolMode::ShapeTool => ToolKind::ShapeTool,
        }
    }
}

/// Pen attributes and tool selection. Process-local, never persisted.
#[derive(Debug, Clone)]
pub struct PenState {
    active: ToolKind,
    /// Last of Brush/Eraser to be selected; decides paint while a
    /// non-pen tool is active.
    pen: ToolKind,
    brush_color: Color,
    width: f32,
    background: Color,
    min_width: f32,
}

impl PenState {
    /// Pen on canvas-open: Brush with the configured color and width.
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            active: ToolKind::Brush,
            pen: ToolKind::Brush,
            brush_color: config.brush_color,
            width: config.clamp_width(config.brush_width),
            background: config.background,
            min_width: config.min_brush_width,
        }
    }

    pub fn select(&mut self, kind: ToolKind) {
        if kind != self.active {
            log::debug!("tool {:?} -> {:?}", self.active, kind);
        }
        self.active = kind;
        if kind.is_pen() {
            self.pen = kind;
        }
    }

    /// Picking a color always returns to the brush.
    pub fn set_brush_color(&mut self, color: Color) {
        self.brush_color = color;
        self.select(ToolKind::Brush);
    }

    /// Set the shared brush/eraser width, clamped to the floor.
    /// Returns the width actually applied.
    pub fn set_width(&mut self, width: f32) -> f32 {
        self.width = clamp_width(width, self.min_width);
        self.width
    }

    pub fn active(&self) -> ToolKind {
        self.active
    }

    pub fn brush_color(&self) -> Color {
        self.brush_color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Attributes for the next stroke.
    pub fn paint(&self) -> PaintStyle {
        match self.pen {
            ToolKind::Eraser => PaintStyle::eraser(self.background, self.width),
            _ => PaintStyle::brush(self.brush_color, self.width),
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self.active {
            ToolKind::Brush => ToolMode::Brush {
                color: self.brush_color,
                width: self.width,
            },
            ToolKind::Eraser => ToolMode::Eraser { width: self.width },
            ToolKind::ColorPicker => ToolMode::ColorPicker,
            ToolKind::ShapeTool => ToolMode::ShapeTool,
        }
    }
}
