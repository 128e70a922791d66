//! # Waymark 共有ユーティリティ
//!
//! ルート URL ビルダー本体に依存しない、ツール群で共通の基盤を提供する。
//!
//! ## 設計方針
//!
//! - ライブラリ（`waymark-route`, `waymark-routes`）はログ出力のみ行い、購読者は初期化しない
//! - 購読者の初期化はバイナリの起動時にこのクレートから一度だけ行う

pub mod observability;

pub use observability::{LogFormat, TracingConfig};
