//! 認証（`AuthController`）

use waymark_route::{HttpMethod, RouteTemplate};

/// `POST /api/login`
pub const LOGIN: RouteTemplate =
    RouteTemplate::named("auth.login", "/api/login", &[HttpMethod::Post]);

/// `POST /api/logout`
pub const LOGOUT: RouteTemplate =
    RouteTemplate::named("auth.logout", "/api/logout", &[HttpMethod::Post]);

/// `GET|HEAD /api/user`
pub const ME: RouteTemplate =
    RouteTemplate::named("auth.me", "/api/user", &[HttpMethod::Get, HttpMethod::Head]);
