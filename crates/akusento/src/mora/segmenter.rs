//! Mora segmenter
//!
//! Splits a kana reading into mora with a single left-to-right pass over
//! extended grapheme clusters. Rules, first match wins:
//!
//! 1. small kana (not ッ) with a preceding mora → joins the previous mora
//! 2. ッ → its own mora
//! 3. long-vowel mark → joins the previous mora (standalone if there is none)
//! 4. next cluster is small kana → current + next form one mora
//! 5. anything else → its own mora
//!
//! Non-kana clusters fall through to rule 5 and come out as standalone mora.

use serde::Deserialize;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::kana::{KanaClass, classify};
use crate::models::MoraString;

/// How the small tsu (ッ) is grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeminateMode {
  /// ッ is its own mora (`ガ|ッ|コ|ウ`).
  #[default]
  Standalone,
  /// ッ joins the previous mora for display (`ガッ|コ|ウ`).
  ///
  /// A leading ッ is still emitted on its own.
  AttachToPrevious,
}

/// Options for [`segment_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SegmenterOptions {
  /// Grouping of ッ
  #[serde(default)]
  pub geminate: GeminateMode,
}

/// Segments a reading into mora.
///
/// Total and pure: empty input gives an empty [`MoraString`], non-kana input
/// is passed through one cluster per mora. Hiragana is not converted; call
/// [`normalize`](super::normalize) first if needed.
///
/// # Examples
/// ```
/// use akusento::mora::segment;
/// let mora = segment("キャベツ");
/// assert_eq!(mora.as_slice(), ["キャ", "ベ", "ツ"]);
/// ```
pub fn segment(reading: &str) -> MoraString {
  segment_with(reading, &SegmenterOptions::default())
}

/// Segments a reading into mora with explicit options.
pub fn segment_with(reading: &str, options: &SegmenterOptions) -> MoraString {
  let clusters: Vec<&str> = reading.graphemes(true).collect();
  let mut mora: Vec<String> = Vec::with_capacity(clusters.len());

  let mut cursor = 0;
  while cursor < clusters.len() {
    let current = clusters[cursor];

    match classify(current) {
      KanaClass::SmallKana if !mora.is_empty() => append_to_last(&mut mora, current),
      KanaClass::Geminate => match options.geminate {
        GeminateMode::AttachToPrevious if !mora.is_empty() => append_to_last(&mut mora, current),
        _ => mora.push(current.to_string()),
      },
      KanaClass::LongVowel => {
        if mora.is_empty() {
          mora.push(current.to_string());
        } else {
          append_to_last(&mut mora, current);
        }
      }
      _ => {
        let next = clusters.get(cursor + 1).copied();
        match next {
          Some(next) if classify(next) == KanaClass::SmallKana => {
            mora.push(format!("{current}{next}"));
            cursor += 1;
          }
          _ => mora.push(current.to_string()),
        }
      }
    }

    cursor += 1;
  }

  debug!(
    reading = %reading,
    clusters = clusters.len(),
    mora = mora.len(),
    "Mora segmentation completed"
  );

  MoraString::from_segments(mora)
}

/// Number of mora in `reading`.
///
/// Defined as `segment(reading).len()`.
pub fn count_mora(reading: &str) -> usize {
  segment(reading).len()
}

/// Appends a cluster to the last emitted mora. The caller guarantees one exists.
fn append_to_last(mora: &mut [String], cluster: &str) {
  if let Some(last) = mora.last_mut() {
    last.push_str(cluster);
  }
}
