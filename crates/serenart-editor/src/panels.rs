//! Presentation-side panel dispatch.
//!
//! The one place where tool modes are mapped to side-panel visibility.
//! The drawing engine never reads panel state.

use crate::tools::ToolMode;

/// Which side panels the canvas screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    pub brush_size: bool,
    pub color_palette: bool,
    pub shape_chooser: bool,
}

pub fn panels_for(mode: &ToolMode) -> PanelVisibility {
    match mode {
        ToolMode::Brush { .. } | ToolMode::Eraser { .. } => PanelVisibility {
            brush_size: true,
            ..Default::default()
        },
        ToolMode::ColorPicker => PanelVisibility {
            color_palette: true,
            ..Default::default()
        },
        ToolMode::ShapeTool => PanelVisibility {
            shape_chooser: true,
            ..Default::default()
        },
    }
}

/// Shapes listed by the shape chooser. Selection is informational only;
/// shape drawing is not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Line];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Line => "Line",
        }
    }
}
