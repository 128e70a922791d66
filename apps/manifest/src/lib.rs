//! # Waymark ルートマニフェスト
//!
//! ルートテーブルを JSON マニフェストとして書き出す開発用ツール。
//! フロントエンドのビルドや API ドキュメントがルート定義を参照するために使う。

pub mod config;
pub mod manifest;
