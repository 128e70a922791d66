//! 状態マスタ（`EstadoController`）

use waymark_route::{HttpMethod, RouteTemplate};

/// `GET|HEAD /api/estados/{categoria}`
pub const INDEX: RouteTemplate = RouteTemplate::named(
    "estados.index",
    "/api/estados/{categoria}",
    &[HttpMethod::Get, HttpMethod::Head],
);

/// `GET|HEAD /api/estados/{categoria}/{codigo}`
pub const SHOW: RouteTemplate = RouteTemplate::named(
    "estados.show",
    "/api/estados/{categoria}/{codigo}",
    &[HttpMethod::Get, HttpMethod::Head],
);
