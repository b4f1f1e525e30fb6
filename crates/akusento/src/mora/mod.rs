//! mora モジュール
//!
//! かな文字の分類・正規化と、読みのモーラ分割を担当します。
pub mod kana;
pub mod segmenter;

/// 再エクスポート
pub use kana::{KanaClass, classify, normalize};
pub use segmenter::{GeminateMode, SegmenterOptions, count_mora, segment, segment_with};
