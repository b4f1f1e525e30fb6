//! Line-graph derivation
//!
//! Lays a pitch pattern out on a canvas: one point per mora, centred in
//! equal-width columns, at one of two fixed heights. Drop markers are
//! recomputed from the levels rather than copied from `drop_position`, so
//! Odaka (whose fall happens on the particle) yields no marker.

use crate::errors::{AccentError, AccentResult};
use crate::models::{CanvasSize, GraphPoint, LineGraphData, MoraString, PitchLevel, PitchPattern};

/// Vertical position of high mora, as a fraction of the canvas height.
const HIGH_Y_RATIO: f32 = 0.25;

/// Vertical position of low mora, as a fraction of the canvas height.
const LOW_Y_RATIO: f32 = 0.75;

/// Builds line-graph data for `pattern` on `canvas`.
///
/// Drop markers are 1-indexed: marker `d` means pitch falls between mora `d`
/// and mora `d + 1`.
pub fn to_line_graph(pattern: &PitchPattern, canvas: CanvasSize) -> LineGraphData {
  let mora_count = pattern.levels.len();
  let column = canvas.width() as f32 / mora_count.max(1) as f32;
  let height = canvas.height() as f32;

  let points = pattern
    .levels
    .iter()
    .enumerate()
    .map(|(i, &level)| GraphPoint {
      x: (i as f32 + 0.5) * column,
      y: level_y(level, height),
      level,
      label: None,
    })
    .collect();

  LineGraphData {
    points,
    drop_markers: drop_markers(&pattern.levels),
    canvas,
  }
}

/// Builds line-graph data with each point labelled by its mora.
///
/// # Errors
/// [`AccentError::MoraCountMismatch`] when `mora` and the pattern differ in length.
pub fn to_labeled_line_graph(
  pattern: &PitchPattern,
  mora: &MoraString,
  canvas: CanvasSize,
) -> AccentResult<LineGraphData> {
  if mora.len() != pattern.levels.len() {
    return Err(AccentError::MoraCountMismatch {
      pattern: pattern.levels.len(),
      mora: mora.len(),
    });
  }

  let mut graph = to_line_graph(pattern, canvas);
  for (point, label) in graph.points.iter_mut().zip(mora) {
    point.label = Some(label.clone());
  }
  Ok(graph)
}

/// 1-indexed mora `d` such that mora `d` is high and mora `d + 1` is low.
pub fn drop_markers(levels: &[PitchLevel]) -> Vec<usize> {
  levels
    .windows(2)
    .enumerate()
    .filter(|(_, pair)| pair[0].is_high() && !pair[1].is_high())
    .map(|(i, _)| i + 1)
    .collect()
}

fn level_y(level: PitchLevel, height: f32) -> f32 {
  match level {
    PitchLevel::High => height * HIGH_Y_RATIO,
    PitchLevel::Low => height * LOW_Y_RATIO,
  }
}
