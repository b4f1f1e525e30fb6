//! accent モジュール
//!
//! アクセント型の定義、ピッチパターンの生成・逆引き・検証、
//! 折れ線グラフ用データの導出を担当します。

pub mod accent_class;
pub mod generator;
pub mod line_graph;

/// 主要な型・関数を再エクスポート
pub use accent_class::AccentClass;
pub use generator::{
  NAKADAKA_PLATEAU_OFFSET, classify_drop, default_nakadaka_drop, generate, generate_all,
  validate_pattern,
};
pub use line_graph::{drop_markers, to_labeled_line_graph, to_line_graph};
