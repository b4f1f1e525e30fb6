//! Data Model Definition
use serde::{Deserialize, Serialize};

use crate::accent::AccentClass;
use crate::errors::AccentError;

/// Default canvas width of the pitch line graph (pixels).
pub const DEFAULT_CANVAS_WIDTH: u32 = 280;

/// Default canvas height of the pitch line graph (pixels).
pub const DEFAULT_CANVAS_HEIGHT: u32 = 80;

/// Mora-segmented reading.
///
/// Each element is one mora made of one or more grapheme clusters
/// (`キャ`, `コー`, `ッ`, ...). Concatenating all elements in order reproduces
/// the segmented reading exactly, and no element is empty.
///
/// Serialized as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoraString(Vec<String>);

impl MoraString {
  /// Wraps mora produced by the segmenter (already known to be non-empty).
  pub(crate) fn from_segments(segments: Vec<String>) -> Self {
    debug_assert!(segments.iter().all(|m| !m.is_empty()));
    Self(segments)
  }

  /// Number of mora.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns `true` if there is no mora (empty reading).
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterates over the mora in order.
  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.0.iter()
  }

  /// Mora as a slice.
  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  /// Joins the mora back into the reading they were cut from.
  pub fn concat(&self) -> String {
    self.0.concat()
  }

  /// Consumes self and returns the inner vector.
  pub fn into_vec(self) -> Vec<String> {
    self.0
  }
}

impl TryFrom<Vec<String>> for MoraString {
  type Error = AccentError;

  fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
    if let Some(index) = value.iter().position(|m| m.is_empty()) {
      return Err(AccentError::EmptyMora { index });
    }
    Ok(Self(value))
  }
}

impl From<MoraString> for Vec<String> {
  fn from(value: MoraString) -> Self {
    value.0
  }
}

impl<'a> IntoIterator for &'a MoraString {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl std::ops::Index<usize> for MoraString {
  type Output = str;

  fn index(&self, index: usize) -> &Self::Output {
    &self.0[index]
  }
}

/// Relative pitch of one mora.
///
/// Serialized as `0` (low) / `1` (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PitchLevel {
  /// 低 (0)
  Low,
  /// 高 (1)
  High,
}

impl PitchLevel {
  /// Returns the binary representation (0 = low, 1 = high).
  pub fn as_bit(self) -> u8 {
    match self {
      PitchLevel::Low => 0,
      PitchLevel::High => 1,
    }
  }

  /// Returns `true` for [`PitchLevel::High`].
  pub fn is_high(self) -> bool {
    self == PitchLevel::High
  }
}

impl TryFrom<u8> for PitchLevel {
  type Error = AccentError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(PitchLevel::Low),
      1 => Ok(PitchLevel::High),
      value => Err(AccentError::InvalidPitchLevel { value }),
    }
  }
}

impl From<PitchLevel> for u8 {
  fn from(level: PitchLevel) -> Self {
    level.as_bit()
  }
}

/// Pitch pattern of one word under one accent class.
///
/// - `levels.len()` equals the mora count.
/// - `drop_position` is the 1-indexed mora after which pitch falls.
///   It is `None` only for Heiban. For Odaka it equals the mora count:
///   the fall happens on the following particle, not inside the word.
///
/// Patterns built by [`generate`](crate::accent::generate) always satisfy these rules.
/// Patterns coming from outside (admin input etc.) can be checked with
/// [`validate_pattern`](crate::accent::validate_pattern).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchPattern {
  /// Accent class
  pub accent_class: AccentClass,

  /// One pitch level per mora
  pub levels: Vec<PitchLevel>,

  /// 1-indexed mora after which pitch falls (`None` for Heiban)
  pub drop_position: Option<usize>,
}

impl PitchPattern {
  /// Number of mora covered by this pattern.
  pub fn mora_count(&self) -> usize {
    self.levels.len()
  }

  /// Levels as `0`/`1` bits.
  pub fn levels_as_bits(&self) -> Vec<u8> {
    self.levels.iter().map(|level| level.as_bit()).collect()
  }

  /// Pitch of a grammatical particle (e.g. が) following the word.
  ///
  /// Heiban keeps the particle high. Every other class has fallen by then,
  /// which is the only audible difference between Heiban and Odaka.
  pub fn particle_level(&self) -> PitchLevel {
    match self.drop_position {
      None => PitchLevel::High,
      Some(_) => PitchLevel::Low,
    }
  }

  /// Levels followed by the particle level (`mora_count + 1` entries).
  pub fn levels_with_particle(&self) -> Vec<PitchLevel> {
    let mut levels = Vec::with_capacity(self.levels.len() + 1);
    levels.extend_from_slice(&self.levels);
    levels.push(self.particle_level());
    levels
  }
}

/// Size of the canvas a line graph is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCanvasSize")]
pub struct CanvasSize {
  width: u32,
  height: u32,
}

/// Unvalidated form used while deserializing [`CanvasSize`].
#[derive(Deserialize)]
struct RawCanvasSize {
  width: u32,
  height: u32,
}

impl CanvasSize {
  /// Creates a canvas size. Both dimensions must be at least 1.
  pub fn new(width: u32, height: u32) -> Result<Self, AccentError> {
    if width == 0 || height == 0 {
      return Err(AccentError::InvalidCanvas { width, height });
    }
    Ok(Self { width, height })
  }

  /// Width in pixels.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  pub fn height(&self) -> u32 {
    self.height
  }
}

impl Default for CanvasSize {
  fn default() -> Self {
    Self {
      width: DEFAULT_CANVAS_WIDTH,
      height: DEFAULT_CANVAS_HEIGHT,
    }
  }
}

impl TryFrom<RawCanvasSize> for CanvasSize {
  type Error = AccentError;

  fn try_from(raw: RawCanvasSize) -> Result<Self, Self::Error> {
    CanvasSize::new(raw.width, raw.height)
  }
}

/// One plotted mora of a line graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
  /// Horizontal position (centre of the mora's column)
  pub x: f32,
  /// Vertical position (one of two fixed levels; grows downward)
  pub y: f32,
  /// Pitch level this point represents
  pub level: PitchLevel,
  /// Mora text, when the graph was built with mora labels
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
}

/// Renderable line-graph data for a pitch pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphData {
  /// One point per mora, left to right
  pub points: Vec<GraphPoint>,

  /// 1-indexed mora after which a `high → low` transition occurs inside the word
  pub drop_markers: Vec<usize>,

  /// Canvas the points were laid out on
  pub canvas: CanvasSize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
