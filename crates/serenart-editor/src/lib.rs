pub mod canvas;
pub mod input;
pub mod panels;
pub mod shortcuts;
pub mod store;
pub mod tools;

pub use canvas::{DrawingSurface, EventResponse};
pub use input::InputEvent;
pub use panels::{PanelVisibility, ShapeKind, panels_for};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use store::{DrawingStore, SaveHandle, StoreError};
pub use tools::{PenState, ToolKind, ToolMode};
