//! models module
pub mod model_definition;

/// Re-exports
pub use model_definition::{
  CanvasSize, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, GraphPoint, LineGraphData, MoraString,
  PitchLevel, PitchPattern,
};
