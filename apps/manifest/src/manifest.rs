//! # ルートマニフェスト
//!
//! ルート定義を、フォーム送信時のメソッドオーバーライドを含めた
//! JSON 向けの構造に変換する。

use serde::Serialize;
use serde_json::{Map, Value};
use waymark_route::{FormMethod, HttpMethod, Placeholder, RouteTemplate, UrlDefaults};

/// マニフェスト全体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteManifest {
    /// 生成時に登録されていた URL デフォルト値
    pub url_defaults: Map<String, Value>,
    pub routes:       Vec<RouteEntry>,
}

/// マニフェストの 1 ルート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub name:            Option<&'static str>,
    pub path:            &'static str,
    pub methods:         &'static [HttpMethod],
    pub placeholders:    Vec<Placeholder<'static>>,
    /// 主メソッドをフォームで送信する際の外側のメソッド
    pub form_method:     FormMethod,
    /// 主メソッドをフォームで送信する際に注入する `_method` の値
    pub method_override: Option<HttpMethod>,
}

impl From<&RouteTemplate> for RouteEntry {
    fn from(route: &RouteTemplate) -> Self {
        let primary = route.primary_method();
        Self {
            name:            route.name(),
            path:            route.path(),
            methods:         route.methods(),
            placeholders:    route.placeholders(),
            form_method:     primary.form_method(),
            method_override: primary.requires_override().then_some(primary),
        }
    }
}

impl RouteManifest {
    /// ルート定義の一覧からマニフェストを作成する
    pub fn build(routes: &[RouteTemplate], url_defaults: &UrlDefaults) -> Self {
        let manifest = Self {
            url_defaults: url_defaults.as_map().clone(),
            routes:       routes.iter().map(RouteEntry::from).collect(),
        };
        tracing::info!(routes = manifest.routes.len(), "ルートマニフェストを作成しました");
        manifest
    }
}
