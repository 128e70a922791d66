//! # Waymark ルート URL ビルダー
//!
//! バックエンドのルートテーブルから生成されたルート定義（[`RouteTemplate`]）をもとに、
//! リクエスト URL・HTTP メソッド・フォーム定義を組み立てる。
//!
//! ## 設計方針
//!
//! - **純粋関数**: すべての操作は入力だけから決定され、I/O を一切行わない
//! - **型による分岐**: 引数の形（スカラー / 位置指定 / 名前付き）は [`PathArgs`]
//!   の列挙型で表現し、正規化は一度の `match` で行う
//! - **部分的な結果を返さない**: 置換に失敗した場合は [`RouteError`] を返し、
//!   記述子は構築しない
//!
//! ## モジュール構成
//!
//! - [`template`] - ルート定義とプレースホルダの解析
//! - [`args`] - パスパラメータの正規化と解決
//! - [`query`] - クエリ文字列の組み立て
//! - [`defaults`] - URL デフォルト値
//! - [`descriptor`] - 出力値（ルート記述子・フォーム記述子）
//! - [`method`] - HTTP メソッド
//! - [`error`] - エラー型
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), waymark_route::RouteError> {
//! use waymark_route::{HttpMethod, QueryOptions, RouteTemplate};
//!
//! const UPDATE: RouteTemplate =
//!     RouteTemplate::new("/api/proformas/{proforma}", &[HttpMethod::Put]);
//!
//! let form = UPDATE.to_form_descriptor(7, &QueryOptions::default())?;
//! assert_eq!(form.action, "/api/proformas/7?_method=PUT");
//! # Ok(())
//! # }
//! ```

pub mod args;
mod build;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod method;
pub mod query;
pub mod template;

pub use args::PathArgs;
pub use defaults::{
    GlobalUrlDefaults,
    NoDefaults,
    UrlDefaults,
    UrlDefaultsError,
    UrlDefaultsProvider,
    add_url_default,
    clear_url_defaults,
    set_url_defaults,
    url_defaults,
};
pub use descriptor::{FormDescriptor, RouteDescriptor};
pub use error::RouteError;
pub use method::{FormMethod, HttpMethod};
pub use query::QueryOptions;
pub use template::{Placeholder, RouteTemplate};
