// crates/akusento/src/service.rs

//! AkusentoService: akusento クレートの統合ファサード。
//!
//! - 読みの正規化（ひらがな → カタカナ、設定で切替）
//! - モーラ分割
//! - 4 種のアクセント型のピッチパターン生成
//! - 折れ線グラフ用データの導出
//!
//! 投票選択肢の構築や管理画面の単語編集などの呼び出し側は、
//! この構造体だけを意識すればよい。

use serde::Serialize;
use tracing::debug;

use crate::accent::{AccentClass, generate, generate_all, to_labeled_line_graph};
use crate::config::AkusentoConfig;
use crate::errors::{AccentError, AkusentoResult};
use crate::models::{CanvasSize, LineGraphData, MoraString, PitchPattern};
use crate::mora::{SegmenterOptions, normalize, segment_with};

/// 1 つのアクセント型に対応する選択肢（パターン + 描画データ）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccentOption {
  /// アクセント型の表示名（頭高型など）
  pub display_name: &'static str,

  /// アクセント型の説明
  pub description: &'static str,

  /// ピッチパターン
  pub pattern: PitchPattern,

  /// モーラ付きの折れ線グラフデータ
  pub graph: LineGraphData,
}

/// 単語 1 つ分の解析結果。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordAnalysis {
  /// 分割に使った読み（正規化が有効なら正規化後）
  pub reading: String,

  /// モーラ列
  pub mora: MoraString,

  /// アクセント型ごとの選択肢（頭高型・平板型・中高型・尾高型の順）
  pub options: Vec<AccentOption>,
}

impl WordAnalysis {
  /// モーラ数
  pub fn mora_count(&self) -> usize {
    self.mora.len()
  }

  /// 指定したアクセント型の選択肢を返す。
  pub fn option(&self, accent_class: AccentClass) -> Option<&AccentOption> {
    self.options.iter().find(|o| o.pattern.accent_class == accent_class)
  }
}

/// akusento クレートの統合ファサード。
///
/// 不変の設定だけを保持するため `Clone + Send + Sync` であり、
/// 複数スレッドから同期なしで呼び出せる。
#[derive(Debug, Clone)]
pub struct AkusentoService {
  /// 検証済みの設定
  config: AkusentoConfig,

  /// 設定から導出した描画領域
  canvas: CanvasSize,

  /// 設定から導出したモーラ分割オプション
  segmenter_options: SegmenterOptions,
}

impl AkusentoService {
  /// 初期化（設定の検証 + 描画領域・分割オプションの導出）
  ///
  /// # エラー
  /// - 設定が不正（描画領域の幅・高さが 0 等）
  pub fn new(config: AkusentoConfig) -> AkusentoResult<Self> {
    // ConfigError は #[from] で AkusentoError に自動変換
    config.validate()?;

    let canvas = config.canvas_size()?;
    let segmenter_options = config.segmenter_options();

    Ok(Self {
      config,
      canvas,
      segmenter_options,
    })
  }

  /// 現在の設定を返す。
  pub fn config(&self) -> &AkusentoConfig {
    &self.config
  }

  /// 読みをモーラ分割し、4 種すべてのアクセント型の選択肢を生成する。
  ///
  /// # 処理フロー
  /// 1. 設定が有効なら読みを正規化
  /// 2. モーラ分割
  /// 3. `generate_all` でパターン生成
  /// 4. 各パターンからモーラ付きの折れ線グラフデータを導出
  ///
  /// # エラー
  /// - 読みが空（モーラ数 0）
  pub fn analyze(&self, reading: &str) -> AkusentoResult<WordAnalysis> {
    let (reading, mora) = self.segment_reading(reading);
    if mora.is_empty() {
      return Err(AccentError::EmptyReading.into());
    }

    let options = generate_all(mora.len())?
      .into_iter()
      .map(|pattern| self.option_for(pattern, &mora))
      .collect::<Result<Vec<_>, _>>()?;

    debug!(
      reading = %reading,
      mora_count = mora.len(),
      options = options.len(),
      "Word analysis completed"
    );

    Ok(WordAnalysis {
      reading,
      mora,
      options,
    })
  }

  /// アクセント型コードと任意の下がり目から 1 つの選択肢を生成する。
  ///
  /// 管理画面で単語のアクセントを編集する際に使う。
  ///
  /// # エラー
  /// - 読みが空
  /// - 未知のアクセント型コード（`UnknownAccentClass`）
  /// - 下がり目がアクセント型の許容範囲外（`InvalidInput`）
  /// - 平板型に下がり目を指定（`ConflictingParameter`）
  pub fn pattern_for_code(
    &self,
    reading: &str,
    accent_class_code: &str,
    drop_position: Option<usize>,
  ) -> AkusentoResult<AccentOption> {
    let accent_class = AccentClass::from_code(accent_class_code)?;

    let (_, mora) = self.segment_reading(reading);
    if mora.is_empty() {
      return Err(AccentError::EmptyReading.into());
    }

    let pattern = generate(mora.len(), accent_class, drop_position)?;
    Ok(self.option_for(pattern, &mora)?)
  }

  /// 設定に従って正規化とモーラ分割を行う。
  fn segment_reading(&self, reading: &str) -> (String, MoraString) {
    let reading = if self.config.normalize_readings() {
      normalize(reading)
    } else {
      reading.to_string()
    };
    let mora = segment_with(&reading, &self.segmenter_options);
    (reading, mora)
  }

  /// パターンに表示情報と描画データを添える。
  fn option_for(
    &self,
    pattern: PitchPattern,
    mora: &MoraString,
  ) -> Result<AccentOption, AccentError> {
    let graph = to_labeled_line_graph(&pattern, mora, self.canvas)?;
    Ok(AccentOption {
      display_name: pattern.accent_class.display_name(),
      description: pattern.accent_class.description(),
      pattern,
      graph,
    })
  }
}
