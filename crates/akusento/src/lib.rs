//! akusento モーラ分割・ピッチアクセントライブラリー
//!
//! かなの読みをモーラに分割し、頭高型・平板型・中高型・尾高型の
//! ピッチパターンと折れ線グラフ用データを生成する

/// アクセントモジュール - AccentClass, パターン生成・逆引き・検証、折れ線グラフ導出
pub mod accent;

/// 設定モジュール - AkusentoConfig, LogLevel等の設定構造体を定義
pub mod config;

/// エラーモジュール - AkusentoError, AccentError等のエラー型を定義
pub mod errors;

/// データモデルモジュール - MoraString, PitchPattern, LineGraphData等のデータ構造を定義
pub mod models;

/// モーラモジュール - かなの分類・正規化とモーラ分割
pub mod mora;

/// サービスモジュール - AkusentoService等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use accent::{AccentClass, classify_drop, generate, generate_all, to_line_graph};
pub use config::AkusentoConfig;
pub use errors::{AccentError, AkusentoError, AkusentoResult};
pub use models::{CanvasSize, LineGraphData, MoraString, PitchLevel, PitchPattern};
pub use mora::{count_mora, normalize, segment};
pub use service::AkusentoService;
