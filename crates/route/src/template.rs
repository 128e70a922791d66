//! # ルート定義
//!
//! バックエンドのルートテーブルから生成される不変のルート定義。
//! コード生成時に `const` として宣言され、実行時に変更されることはない。
//!
//! ## プレースホルダ構文
//!
//! | 構文 | 意味 |
//! |------|------|
//! | `{proforma}` | 必須パラメータ。エンティティが渡された場合は `id` を使う |
//! | `{cliente:codigo}` | 必須パラメータ。エンティティが渡された場合は `codigo` を使う |
//! | `{tipo?}` | 省略可能パラメータ。未指定なら空文字列に置換する |

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{
    args::PathArgs,
    build,
    defaults::{GlobalUrlDefaults, UrlDefaultsProvider},
    descriptor::{FormDescriptor, RouteDescriptor},
    error::RouteError,
    method::HttpMethod,
    query::QueryOptions,
};

/// エンティティから値を取り出す際のデフォルトのフィールド名
pub const DEFAULT_BINDING_FIELD: &str = "id";

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)(?::([A-Za-z_][A-Za-z0-9_]*))?(\?)?\}")
        .expect("プレースホルダの正規表現が不正です")
});

/// パステンプレート中のプレースホルダ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder<'a> {
    /// テンプレート中のトークン全体（例: `{cliente:codigo}`）
    #[serde(skip)]
    pub token:         &'a str,
    /// パラメータ名
    pub name:          &'a str,
    /// エンティティから値を取り出すフィールド名
    pub binding_field: &'a str,
    /// 省略可能か
    pub optional:      bool,
}

/// ルート定義
///
/// パステンプレートと受け付ける HTTP メソッドの組。
/// 先頭のメソッドを主メソッドとして扱う。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), waymark_route::RouteError> {
/// use waymark_route::{HttpMethod, QueryOptions, RouteTemplate};
///
/// const SHOW: RouteTemplate = RouteTemplate::named(
///     "estados.show",
///     "/api/estados/{categoria}/{codigo}",
///     &[HttpMethod::Get, HttpMethod::Head],
/// );
///
/// let url = SHOW.url(["ENTREGA", "OK"], &QueryOptions::default())?;
/// assert_eq!(url, "/api/estados/ENTREGA/OK");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTemplate {
    name:    Option<&'static str>,
    path:    &'static str,
    methods: &'static [HttpMethod],
}

impl RouteTemplate {
    /// 名前なしのルート定義を作成する
    ///
    /// # パニック
    ///
    /// `methods` が空の場合はパニックする（`const` 文脈ではコンパイルエラー）。
    pub const fn new(path: &'static str, methods: &'static [HttpMethod]) -> Self {
        assert!(!methods.is_empty(), "ルートには 1 つ以上のメソッドが必要です");
        Self {
            name: None,
            path,
            methods,
        }
    }

    /// 名前付きのルート定義を作成する
    pub const fn named(
        name: &'static str,
        path: &'static str,
        methods: &'static [HttpMethod],
    ) -> Self {
        assert!(!methods.is_empty(), "ルートには 1 つ以上のメソッドが必要です");
        Self {
            name: Some(name),
            path,
            methods,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn methods(&self) -> &'static [HttpMethod] {
        self.methods
    }

    /// 主メソッド（宣言順で先頭のメソッド）
    pub fn primary_method(&self) -> HttpMethod {
        self.methods[0]
    }

    /// 指定したメソッドを受け付けるか
    pub fn supports(&self, method: HttpMethod) -> bool {
        self.methods.contains(&method)
    }

    /// プレースホルダを宣言順（パス上の左から右）に返す
    pub fn placeholders(&self) -> Vec<Placeholder<'static>> {
        PLACEHOLDER_PATTERN
            .captures_iter(self.path)
            .filter_map(|caps| {
                let token = caps.get(0)?.as_str();
                let name = caps.get(1)?.as_str();
                Some(Placeholder {
                    token,
                    name,
                    binding_field: caps.get(2).map_or(DEFAULT_BINDING_FIELD, |m| m.as_str()),
                    optional: caps.get(3).is_some(),
                })
            })
            .collect()
    }

    /// URL を組み立てる（プロセス全体の URL デフォルト値を適用）
    pub fn url(
        &self,
        args: impl Into<PathArgs>,
        options: &QueryOptions,
    ) -> Result<String, RouteError> {
        build::build(self, args.into(), options, &GlobalUrlDefaults)
    }

    /// 明示した URL デフォルト値で URL を組み立てる
    pub fn url_with_defaults(
        &self,
        args: impl Into<PathArgs>,
        options: &QueryOptions,
        defaults: &dyn UrlDefaultsProvider,
    ) -> Result<String, RouteError> {
        build::build(self, args.into(), options, defaults)
    }

    /// 指定したメソッドのルート記述子を返す
    ///
    /// ルートが宣言していないメソッドの場合は `RouteError::UnsupportedMethod` を返す。
    pub fn descriptor(
        &self,
        method: HttpMethod,
        args: impl Into<PathArgs>,
        options: &QueryOptions,
    ) -> Result<RouteDescriptor, RouteError> {
        self.ensure_supported(method)?;
        Ok(RouteDescriptor {
            url: self.url(args, options)?,
            method,
        })
    }

    /// 主メソッドのルート記述子を返す
    pub fn to_descriptor(
        &self,
        args: impl Into<PathArgs>,
        options: &QueryOptions,
    ) -> Result<RouteDescriptor, RouteError> {
        self.descriptor(self.primary_method(), args, options)
    }

    /// 指定したメソッドのフォーム記述子を返す
    ///
    /// GET / POST はそのまま、それ以外は `_method` を注入して
    /// GET（HEAD の場合）または POST で送信する形にする。
    pub fn form_descriptor(
        &self,
        method: HttpMethod,
        args: impl Into<PathArgs>,
        options: &QueryOptions,
    ) -> Result<FormDescriptor, RouteError> {
        self.ensure_supported(method)?;

        let action = if method.requires_override() {
            self.url(args, &options.with_method_override(method))?
        } else {
            self.url(args, options)?
        };

        Ok(FormDescriptor {
            action,
            method: method.form_method(),
        })
    }

    /// 主メソッドのフォーム記述子を返す
    pub fn to_form_descriptor(
        &self,
        args: impl Into<PathArgs>,
        options: &QueryOptions,
    ) -> Result<FormDescriptor, RouteError> {
        self.form_descriptor(self.primary_method(), args, options)
    }

    fn ensure_supported(&self, method: HttpMethod) -> Result<(), RouteError> {
        if self.supports(method) {
            return Ok(());
        }
        Err(RouteError::UnsupportedMethod {
            method,
            path: self.path,
        })
    }
}
