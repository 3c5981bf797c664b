pub mod config;
pub mod error;
pub mod history;
pub mod id;
pub mod model;
pub mod palette;

pub use config::CanvasConfig;
pub use error::CanvasError;
pub use history::StrokeHistory;
pub use id::StrokeId;
pub use model::*;

// Re-export kurbo geometry so downstream crates share one point type
pub use kurbo::Point;
