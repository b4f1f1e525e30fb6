//! Accent pattern generator
//!
//! Builds the pitch sequence and drop position for a mora count and an
//! accent class, and runs the coarse inverse (drop position → class).
//!
//! All positions are 1-indexed mora numbers: a drop position `d` means
//! pitch falls after mora `d`.

use tracing::{debug, warn};

use super::accent_class::AccentClass;
use crate::errors::{AccentError, AccentResult};
use crate::models::{PitchLevel, PitchPattern};

/// Offset added to `ceil(mora_count / 2)` to get the default Nakadaka drop.
///
/// See [`default_nakadaka_drop`].
pub const NAKADAKA_PLATEAU_OFFSET: usize = 1;

/// Default drop position of Nakadaka when none is given.
///
/// - `mora_count >= 3`: `ceil(mora_count / 2) + NAKADAKA_PLATEAU_OFFSET`,
///   capped at `mora_count - 1` so the fall stays inside the word
///   (3 → 2, 4 → 3, 5 → 4, 6 → 4, 7 → 5).
/// - `mora_count == 2`: `2`. The pattern `[0, 1]` cannot be told apart from
///   Odaka at two mora.
/// - `mora_count <= 1`: `1`. Nakadaka collapses to Atamadaka's pattern.
pub const fn default_nakadaka_drop(mora_count: usize) -> usize {
  match mora_count {
    0 | 1 => 1,
    2 => 2,
    n => {
      let drop = n.div_ceil(2) + NAKADAKA_PLATEAU_OFFSET;
      if drop < n { drop } else { n - 1 }
    }
  }
}

/// Generates the pitch pattern of `accent_class` for a word of `mora_count` mora.
///
/// `drop_position` may pin the fall explicitly:
///
/// | class     | accepted `drop_position`         |
/// |-----------|----------------------------------|
/// | Atamadaka | `1`                              |
/// | Heiban    | none (any value is a conflict)   |
/// | Nakadaka  | `2 <= d < mora_count`            |
/// | Odaka     | `mora_count`                     |
///
/// # Errors
/// - [`AccentError::InvalidMoraCount`] when `mora_count == 0`
/// - [`AccentError::DropPositionOutOfRange`] when `drop_position` is outside the range above
/// - [`AccentError::ConflictingParameter`] when a drop is given for Heiban
///
/// # Examples
/// ```
/// use akusento::accent::{AccentClass, generate};
/// let pattern = generate(3, AccentClass::Atamadaka, None).unwrap();
/// assert_eq!(pattern.levels_as_bits(), vec![1, 0, 0]);
/// assert_eq!(pattern.drop_position, Some(1));
/// ```
pub fn generate(
  mora_count: usize,
  accent_class: AccentClass,
  drop_position: Option<usize>,
) -> AccentResult<PitchPattern> {
  if mora_count == 0 {
    return Err(AccentError::InvalidMoraCount { mora_count });
  }

  let pattern = match accent_class {
    AccentClass::Atamadaka => {
      if let Some(drop) = drop_position {
        check_drop_range(accent_class, drop, mora_count, 1, 1)?;
      }
      PitchPattern {
        accent_class,
        levels: high_span(mora_count, 0, 1),
        drop_position: Some(1),
      }
    }
    AccentClass::Heiban => {
      if let Some(drop) = drop_position {
        return Err(AccentError::ConflictingParameter {
          accent_class,
          drop_position: drop,
        });
      }
      PitchPattern {
        accent_class,
        levels: rising(mora_count),
        drop_position: None,
      }
    }
    AccentClass::Nakadaka => {
      let drop = match drop_position {
        Some(drop) => {
          check_drop_range(accent_class, drop, mora_count, 2, mora_count.saturating_sub(1))?;
          drop
        }
        None => default_nakadaka_drop(mora_count),
      };
      let levels = if mora_count == 1 {
        high_span(mora_count, 0, 1)
      } else {
        high_span(mora_count, 1, drop)
      };
      PitchPattern {
        accent_class,
        levels,
        drop_position: Some(drop),
      }
    }
    AccentClass::Odaka => {
      if let Some(drop) = drop_position {
        check_drop_range(accent_class, drop, mora_count, mora_count, mora_count)?;
      }
      PitchPattern {
        accent_class,
        levels: rising(mora_count),
        drop_position: Some(mora_count),
      }
    }
  };

  debug!(
    mora_count,
    accent_class = %accent_class,
    levels = ?pattern.levels_as_bits(),
    drop_position = ?pattern.drop_position,
    "Pitch pattern generated"
  );

  Ok(pattern)
}

/// Generates one pattern per accent class, in [`AccentClass::ALL`] order.
///
/// # Errors
/// [`AccentError::InvalidMoraCount`] when `mora_count == 0`.
pub fn generate_all(mora_count: usize) -> AccentResult<Vec<PitchPattern>> {
  AccentClass::ALL.iter().map(|&class| generate(mora_count, class, None)).collect()
}

/// Reconstructs the accent class family from a drop position.
///
/// - `None` → Heiban
/// - `1` → Atamadaka (including the 1-mora word)
/// - `mora_count` (≥ 2) → Odaka
/// - `2..mora_count` → Nakadaka
///
/// # Errors
/// - [`AccentError::InvalidMoraCount`] when `mora_count == 0`
/// - [`AccentError::InvalidDropPosition`] when the drop is `0` or beyond the word
pub fn classify_drop(mora_count: usize, drop_position: Option<usize>) -> AccentResult<AccentClass> {
  if mora_count == 0 {
    return Err(AccentError::InvalidMoraCount { mora_count });
  }

  match drop_position {
    None => Ok(AccentClass::Heiban),
    Some(1) => Ok(AccentClass::Atamadaka),
    Some(drop) if drop == mora_count => Ok(AccentClass::Odaka),
    Some(drop) if (2..mora_count).contains(&drop) => Ok(AccentClass::Nakadaka),
    Some(drop) => Err(AccentError::InvalidDropPosition {
      drop_position: drop,
      mora_count,
    }),
  }
}

/// Checks that an externally supplied pattern is the canonical one for its
/// class, mora count and drop position.
///
/// # Errors
/// - any error [`generate`] reports for the pattern's parameters
/// - [`AccentError::MissingDropPosition`] when a non-Heiban pattern has no drop
/// - [`AccentError::PatternMismatch`] when the levels differ from the canonical ones
pub fn validate_pattern(pattern: &PitchPattern) -> AccentResult<()> {
  let mora_count = pattern.mora_count();
  let canonical = generate(mora_count, pattern.accent_class, None)?;

  let expected = if pattern.drop_position == canonical.drop_position {
    canonical
  } else {
    match pattern.drop_position {
      Some(drop) => generate(mora_count, pattern.accent_class, Some(drop))?,
      None => {
        return Err(AccentError::MissingDropPosition {
          accent_class: pattern.accent_class,
        });
      }
    }
  };

  if expected.levels != pattern.levels {
    warn!(
      accent_class = %pattern.accent_class,
      expected = ?expected.levels_as_bits(),
      actual = ?pattern.levels_as_bits(),
      "Pitch pattern does not match its accent class"
    );
    return Err(AccentError::PatternMismatch {
      accent_class: pattern.accent_class,
      expected: expected.levels,
      actual: pattern.levels.clone(),
    });
  }

  Ok(())
}

/// Rejects a drop outside `min..=max` for the given class.
fn check_drop_range(
  accent_class: AccentClass,
  drop_position: usize,
  mora_count: usize,
  min: usize,
  max: usize,
) -> AccentResult<()> {
  if (min..=max).contains(&drop_position) {
    Ok(())
  } else {
    Err(AccentError::DropPositionOutOfRange {
      accent_class,
      drop_position,
      mora_count,
      min,
      max,
    })
  }
}

/// Low first mora, high afterwards (a single mora is high).
fn rising(mora_count: usize) -> Vec<PitchLevel> {
  if mora_count == 1 {
    high_span(mora_count, 0, 1)
  } else {
    high_span(mora_count, 1, mora_count)
  }
}

/// `mora_count` levels, high on 0-based indices `start..end`, low elsewhere.
fn high_span(mora_count: usize, start: usize, end: usize) -> Vec<PitchLevel> {
  (0..mora_count)
    .map(|i| if (start..end).contains(&i) { PitchLevel::High } else { PitchLevel::Low })
    .collect()
}
