use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{
        HeaderMap, HeaderName, Method, Request,
        header::{ORIGIN, USER_AGENT},
    },
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path, client address, origin, user-agent and response status for each request.
/// Skips CORS preflight `OPTIONS` requests.
///
/// ### Usage:
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
///
/// The client address is only known when the server is started with
/// `into_make_service_with_connect_info`; otherwise it is logged as `unknown`.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());
    let origin = header_text(req.headers(), ORIGIN);
    let user_agent = header_text(req.headers(), USER_AGENT);

    let response = next.run(req).await;

    info!(
        method = ?method,
        path = %path,
        ip = %ip,
        origin = %origin,
        user_agent = %user_agent,
        status = response.status().as_u16(),
        "Handled request"
    );

    response
}

fn header_text(headers: &HeaderMap, name: HeaderName) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
