// crates/akusento/src/accent/accent_class.rs

//! アクセント型（頭高型・平板型・中高型・尾高型）の定義

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AccentError;

/// The four canonical Japanese pitch-accent classes.
///
/// Declaration order is the display order used by vote options
/// (Atamadaka, Heiban, Nakadaka, Odaka); see [`AccentClass::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentClass {
  /// 頭高型: mora 1 high, rest low
  Atamadaka,
  /// 平板型: mora 1 low, rest high, no drop
  Heiban,
  /// 中高型: high plateau from mora 2 that falls before the last mora
  Nakadaka,
  /// 尾高型: mora 2 onward high, fall on the following particle
  Odaka,
}

impl AccentClass {
  /// All classes in display order.
  pub const ALL: [AccentClass; 4] = [
    AccentClass::Atamadaka,
    AccentClass::Heiban,
    AccentClass::Nakadaka,
    AccentClass::Odaka,
  ];

  /// Returns the stable code.
  ///
  /// # Examples
  /// - `AccentClass::Atamadaka` → `"atamadaka"`
  /// - `AccentClass::Odaka` → `"odaka"`
  pub fn code(&self) -> &'static str {
    match self {
      AccentClass::Atamadaka => "atamadaka",
      AccentClass::Heiban => "heiban",
      AccentClass::Nakadaka => "nakadaka",
      AccentClass::Odaka => "odaka",
    }
  }

  /// Returns the Japanese display name.
  pub fn display_name(&self) -> &'static str {
    match self {
      AccentClass::Atamadaka => "頭高型",
      AccentClass::Heiban => "平板型",
      AccentClass::Nakadaka => "中高型",
      AccentClass::Odaka => "尾高型",
    }
  }

  /// Returns a human-readable description of the pitch rule.
  pub fn description(&self) -> &'static str {
    match self {
      AccentClass::Atamadaka => "1拍目が高く、2拍目以降は低い",
      AccentClass::Heiban => "1拍目が低く、2拍目以降は高いまま下がらない（助詞も高い）",
      AccentClass::Nakadaka => "1拍目が低く、2拍目から高くなり、語の途中で下がる",
      AccentClass::Odaka => "1拍目が低く、2拍目以降は高く、続く助詞で下がる",
    }
  }

  /// Parses a class code.
  ///
  /// Only the four lowercase codes are accepted, byte for byte, matching the
  /// serde representation. Anything else is [`AccentError::UnknownAccentClass`].
  pub fn from_code(code: &str) -> Result<Self, AccentError> {
    match code {
      "atamadaka" => Ok(AccentClass::Atamadaka),
      "heiban" => Ok(AccentClass::Heiban),
      "nakadaka" => Ok(AccentClass::Nakadaka),
      "odaka" => Ok(AccentClass::Odaka),
      _ => Err(AccentError::UnknownAccentClass {
        code: code.to_string(),
      }),
    }
  }
}

impl FromStr for AccentClass {
  type Err = AccentError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    AccentClass::from_code(s)
  }
}

impl std::fmt::Display for AccentClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}
