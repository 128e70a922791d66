//! 通知（`NotificationController`）

use waymark_route::{HttpMethod, RouteTemplate};

/// `GET|HEAD /api/notificaciones`
pub const INDEX: RouteTemplate = RouteTemplate::named(
    "notificaciones.index",
    "/api/notificaciones",
    &[HttpMethod::Get, HttpMethod::Head],
);

/// `PATCH /api/notificaciones/{notification}/leida`
pub const MARCAR_LEIDA: RouteTemplate = RouteTemplate::named(
    "notificaciones.marcar-leida",
    "/api/notificaciones/{notification}/leida",
    &[HttpMethod::Patch],
);

/// `DELETE /api/notificaciones/{notification}`
pub const DESTROY: RouteTemplate = RouteTemplate::named(
    "notificaciones.destroy",
    "/api/notificaciones/{notification}",
    &[HttpMethod::Delete],
);
