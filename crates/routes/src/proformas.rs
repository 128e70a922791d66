//! プロフォーマ請求書（`ProformaController`）

use waymark_route::{HttpMethod, RouteTemplate};

/// `GET|HEAD /api/proformas`
pub const INDEX: RouteTemplate = RouteTemplate::named(
    "proformas.index",
    "/api/proformas",
    &[HttpMethod::Get, HttpMethod::Head],
);

/// `POST /api/proformas`
pub const STORE: RouteTemplate =
    RouteTemplate::named("proformas.store", "/api/proformas", &[HttpMethod::Post]);

/// `GET|HEAD /api/proformas/{proforma}`
pub const SHOW: RouteTemplate = RouteTemplate::named(
    "proformas.show",
    "/api/proformas/{proforma}",
    &[HttpMethod::Get, HttpMethod::Head],
);

/// `PUT /api/proformas/{proforma}`
pub const UPDATE: RouteTemplate = RouteTemplate::named(
    "proformas.update",
    "/api/proformas/{proforma}",
    &[HttpMethod::Put],
);

/// `PATCH /api/proformas/{proforma}/estado`
pub const UPDATE_ESTADO: RouteTemplate = RouteTemplate::named(
    "proformas.update-estado",
    "/api/proformas/{proforma}/estado",
    &[HttpMethod::Patch],
);

/// `DELETE /api/proformas/{proforma}`
pub const DESTROY: RouteTemplate = RouteTemplate::named(
    "proformas.destroy",
    "/api/proformas/{proforma}",
    &[HttpMethod::Delete],
);

/// `GET|HEAD /api/proformas/{proforma}/pdf`
pub const PDF: RouteTemplate = RouteTemplate::named(
    "proformas.pdf",
    "/api/proformas/{proforma}/pdf",
    &[HttpMethod::Get, HttpMethod::Head],
);
