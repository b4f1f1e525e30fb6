// crates/akusento/src/config.rs

use std::sync::Arc;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::errors::ConfigError;
use crate::models::{CanvasSize, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::mora::{GeminateMode, SegmenterOptions};

/// Top-level configuration for akusento.
///
/// Every section is optional; omitted sections take their defaults.
///
/// ```json
/// {
///   "segmenter": { "normalize": true, "geminate": "standalone" },
///   "graph": { "canvas_width": 280, "canvas_height": 80 },
///   "logging": { "level": "info" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AkusentoConfig {
  /// [segmenter] section
  #[serde(default)]
  pub segmenter: SegmenterConfig,
  /// [graph] section
  #[serde(default)]
  pub graph: GraphConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [segmenter] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
  /// Convert hiragana to katakana before segmenting (default `true`)
  #[serde(default = "default_normalize")]
  pub normalize: bool,
  /// Grouping of the small tsu: "standalone" | "attach-to-previous"
  #[serde(default)]
  pub geminate: GeminateMode,
}

/// Readings are normalized by default
fn default_normalize() -> bool {
  true
}

impl Default for SegmenterConfig {
  fn default() -> Self {
    Self {
      normalize: default_normalize(),
      geminate: GeminateMode::default(),
    }
  }
}

/// [graph] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
  /// Canvas width in pixels (default 280)
  #[serde(default = "default_canvas_width")]
  pub canvas_width: u32,
  /// Canvas height in pixels (default 80)
  #[serde(default = "default_canvas_height")]
  pub canvas_height: u32,
}

fn default_canvas_width() -> u32 {
  DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> u32 {
  DEFAULT_CANVAS_HEIGHT
}

impl Default for GraphConfig {
  fn default() -> Self {
    Self {
      canvas_width: DEFAULT_CANVAS_WIDTH,
      canvas_height: DEFAULT_CANVAS_HEIGHT,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the level as a filter directive.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl LoggingConfig {
  /// Builds an `EnvFilter` for `tracing_subscriber`.
  ///
  /// `RUST_LOG` takes precedence when set; otherwise the configured level is used.
  pub fn env_filter(&self) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
  }
}

// ===== Accessor Methods =====

impl AkusentoConfig {
  /// Parses a JSON configuration document.
  ///
  /// The result is not validated; call [`validate`](Self::validate) afterwards
  /// (or let `AkusentoService::new` do it).
  ///
  /// # Errors
  /// `ConfigError::Parse` when the document is not valid configuration JSON.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse {
      source: Arc::new(e),
    })
  }

  /// Returns the segmenter options derived from the [segmenter] section.
  pub fn segmenter_options(&self) -> SegmenterOptions {
    SegmenterOptions {
      geminate: self.segmenter.geminate,
    }
  }

  /// Returns whether readings are normalized before segmentation.
  pub fn normalize_readings(&self) -> bool {
    self.segmenter.normalize
  }

  /// Returns the configured canvas size.
  ///
  /// # Errors
  /// The same errors as [`validate`](Self::validate) reports for the [graph] section.
  pub fn canvas_size(&self) -> Result<CanvasSize, ConfigError> {
    let GraphConfig {
      canvas_width,
      canvas_height,
    } = self.graph;

    CanvasSize::new(canvas_width, canvas_height).map_err(|_| {
      // width is reported before height
      if canvas_width < 1 {
        ConfigError::InvalidCanvasWidth {
          actual: canvas_width,
        }
      } else {
        ConfigError::InvalidCanvasHeight {
          actual: canvas_height,
        }
      }
    })
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `graph.canvas_width` >= 1
  /// - `graph.canvas_height` >= 1
  ///
  /// # Errors
  /// Returns the first failing `ConfigError`, in the order above.
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.canvas_size().map(|_| ())
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
