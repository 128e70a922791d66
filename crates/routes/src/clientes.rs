//! 顧客（`ClienteController`）
//!
//! 顧客は ID ではなく顧客コード（`codigo`）で参照する。

use waymark_route::{HttpMethod, RouteTemplate};

/// `GET|HEAD /api/clientes/{cliente:codigo}`
pub const SHOW: RouteTemplate = RouteTemplate::named(
    "clientes.show",
    "/api/clientes/{cliente:codigo}",
    &[HttpMethod::Get, HttpMethod::Head],
);

/// `GET|HEAD /api/clientes/{cliente:codigo}/documentos/{tipo?}`
///
/// `tipo` を省略すると全種別の書類を返す。
pub const DOCUMENTOS: RouteTemplate = RouteTemplate::named(
    "clientes.documentos",
    "/api/clientes/{cliente:codigo}/documentos/{tipo?}",
    &[HttpMethod::Get, HttpMethod::Head],
);
