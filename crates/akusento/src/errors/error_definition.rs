//! エラー定義

use std::sync::Arc;
use thiserror::Error;

use crate::accent::AccentClass;
use crate::models::PitchLevel;

/// 設定（AkusentoConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// graph.canvas_width < 1
  #[error("graph.canvas_width は 1 以上である必要があります: actual={actual}")]
  InvalidCanvasWidth {
    /// 実際に指定された値
    actual: u32,
  },

  /// graph.canvas_height < 1
  #[error("graph.canvas_height は 1 以上である必要があります: actual={actual}")]
  InvalidCanvasHeight {
    /// 実際に指定された値
    actual: u32,
  },

  /// 設定 JSON のデシリアライズ失敗
  #[error("設定の読み込みに失敗しました: {source}")]
  Parse {
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// アクセント生成エラーの種類
///
/// 呼び出し側（管理画面のバリデーション表示など）が分岐に使う粗い分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentErrorKind {
  /// モーラ数や下がり目の位置などの入力値が不正
  InvalidInput,
  /// 4 種以外のアクセント型コード
  UnknownAccentClass,
  /// 平板型に下がり目が指定された
  ConflictingParameter,
}

impl AccentErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::UnknownAccentClass => "unknown_accent_class",
      Self::ConflictingParameter => "conflicting_parameter",
    }
  }
}

/// モーラ分割・アクセント生成関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccentError {
  /// モーラ数が 0
  #[error("モーラ数は 1 以上である必要があります: mora_count={mora_count}")]
  InvalidMoraCount {
    /// 指定されたモーラ数
    mora_count: usize,
  },

  /// 下がり目の位置がアクセント型の許容範囲外
  #[error(
    "{accent_class} の下がり目は {min}〜{max} の範囲で指定してください: \
     drop_position={drop_position}, mora_count={mora_count}"
  )]
  DropPositionOutOfRange {
    /// 対象のアクセント型
    accent_class: AccentClass,
    /// 指定された下がり目
    drop_position: usize,
    /// モーラ数
    mora_count: usize,
    /// 許容される最小値
    min: usize,
    /// 許容される最大値
    max: usize,
  },

  /// 下がり目の位置が範囲外（アクセント型の判定時）
  #[error("下がり目の位置が不正です: drop_position={drop_position}, mora_count={mora_count}")]
  InvalidDropPosition {
    /// 指定された下がり目
    drop_position: usize,
    /// モーラ数
    mora_count: usize,
  },

  /// 平板型以外で下がり目が指定されていない
  #[error("{accent_class} には下がり目の指定が必要です")]
  MissingDropPosition {
    /// 対象のアクセント型
    accent_class: AccentClass,
  },

  /// 入力されたピッチ列が標準形と一致しない
  #[error("{accent_class} のピッチ列が不正です: expected={expected:?}, actual={actual:?}")]
  PatternMismatch {
    /// 対象のアクセント型
    accent_class: AccentClass,
    /// 標準形のピッチ列
    expected: Vec<PitchLevel>,
    /// 入力されたピッチ列
    actual: Vec<PitchLevel>,
  },

  /// ピッチ列とモーラ列の長さが一致しない
  #[error("ピッチ列とモーラ列の長さが一致しません: pattern={pattern}, mora={mora}")]
  MoraCountMismatch {
    /// ピッチ列の長さ
    pattern: usize,
    /// モーラ列の長さ
    mora: usize,
  },

  /// 描画領域のサイズが不正
  #[error("描画領域のサイズが不正です: width={width}, height={height}")]
  InvalidCanvas {
    /// 幅
    width: u32,
    /// 高さ
    height: u32,
  },

  /// 空のモーラ要素
  #[error("空のモーラは許可されていません: index={index}")]
  EmptyMora {
    /// 空だった要素の位置（0 始まり）
    index: usize,
  },

  /// 0/1 以外のピッチ値
  #[error("ピッチは 0（低）か 1（高）で指定してください: value={value}")]
  InvalidPitchLevel {
    /// 指定された値
    value: u8,
  },

  /// 読みが空（モーラが 1 つもない）
  #[error("読みが空です")]
  EmptyReading,

  /// 未知のアクセント型コード
  #[error("未知のアクセント型です: {code}")]
  UnknownAccentClass {
    /// 指定されたコード
    code: String,
  },

  /// 平板型に下がり目が指定された
  #[error("{accent_class} には下がり目を指定できません: drop_position={drop_position}")]
  ConflictingParameter {
    /// 対象のアクセント型
    accent_class: AccentClass,
    /// 指定された下がり目
    drop_position: usize,
  },
}

impl AccentError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> AccentErrorKind {
    match self {
      Self::InvalidMoraCount { .. }
      | Self::DropPositionOutOfRange { .. }
      | Self::InvalidDropPosition { .. }
      | Self::MissingDropPosition { .. }
      | Self::PatternMismatch { .. }
      | Self::MoraCountMismatch { .. }
      | Self::InvalidCanvas { .. }
      | Self::EmptyMora { .. }
      | Self::InvalidPitchLevel { .. }
      | Self::EmptyReading => AccentErrorKind::InvalidInput,
      Self::UnknownAccentClass { .. } => AccentErrorKind::UnknownAccentClass,
      Self::ConflictingParameter { .. } => AccentErrorKind::ConflictingParameter,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `AkusentoResult<T>` = `Result<T, AkusentoError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AkusentoError {
  /// モーラ分割・アクセント生成関連エラー
  #[error(transparent)]
  Accent(#[from] AccentError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl AkusentoError {
  /// アクセント関連エラーであれば、その種類を返す
  #[must_use]
  pub fn accent_kind(&self) -> Option<AccentErrorKind> {
    match self {
      Self::Accent(err) => Some(err.kind()),
      Self::Config(_) => None,
    }
  }
}

/// akusento クレートの標準 Result 型エイリアス
pub type AkusentoResult<T> = Result<T, AkusentoError>;

/// アクセントエンジン内部で使う Result 型エイリアス
pub type AccentResult<T> = Result<T, AccentError>;
