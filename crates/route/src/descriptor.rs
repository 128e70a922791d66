//! # ルート記述子
//!
//! URL ビルダーの出力値。HTTP クライアントや HTML フォームがそのまま利用できる形にする。

use serde::Serialize;

use crate::method::{FormMethod, HttpMethod};

/// リクエスト先の URL とメソッド
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub url:    String,
    pub method: HttpMethod,
}

/// HTML フォームの `action` と `method`
///
/// 非ネイティブのメソッドは `action` のクエリに `_method` として埋め込まれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDescriptor {
    pub action: String,
    pub method: FormMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_descriptorをjsonにする() {
        let descriptor = RouteDescriptor {
            url:    "/api/proformas/42".to_string(),
            method: HttpMethod::Get,
        };

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            serde_json::json!({ "url": "/api/proformas/42", "method": "get" })
        );
    }

    #[test]
    fn test_form_descriptorをjsonにする() {
        let descriptor = FormDescriptor {
            action: "/api/proformas/7?_method=PUT".to_string(),
            method: FormMethod::Post,
        };

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            serde_json::json!({ "action": "/api/proformas/7?_method=PUT", "method": "post" })
        );
    }
}
