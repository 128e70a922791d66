//! # Waymark ルートテーブル
//!
//! バックエンドのルートテーブルから生成したルート定義。
//! コントローラーごとにモジュールを分け、各ルートを `const` の
//! [`RouteTemplate`] として公開する。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), waymark_route::RouteError> {
//! use waymark_route::QueryOptions;
//! use waymark_routes::proformas;
//!
//! let url = proformas::SHOW.url(42, &QueryOptions::default())?;
//! assert_eq!(url, "/api/proformas/42");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod clientes;
pub mod estados;
pub mod notificaciones;
pub mod proformas;

pub use waymark_route::{HttpMethod, QueryOptions, RouteError, RouteTemplate};

/// 全ルート（コントローラー順、各コントローラー内は宣言順）
static ALL: &[RouteTemplate] = &[
    auth::LOGIN,
    auth::LOGOUT,
    auth::ME,
    clientes::SHOW,
    clientes::DOCUMENTOS,
    estados::INDEX,
    estados::SHOW,
    notificaciones::INDEX,
    notificaciones::MARCAR_LEIDA,
    notificaciones::DESTROY,
    proformas::INDEX,
    proformas::STORE,
    proformas::SHOW,
    proformas::UPDATE,
    proformas::UPDATE_ESTADO,
    proformas::DESTROY,
    proformas::PDF,
];

/// 全ルートを返す
pub fn all() -> &'static [RouteTemplate] {
    ALL
}

/// ルート名からルート定義を探す
pub fn find(name: &str) -> Option<&'static RouteTemplate> {
    ALL.iter().find(|route| route.name() == Some(name))
}
