pub mod handlers;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Console request log: timestamp | duration | size | status | method | path
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;
        use chrono::Utc;

        use crate::shared::format::format_number;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();

        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                let duration = start.elapsed();
                // Malaysia time (UTC+8)
                let timestamp = Utc::now() + chrono::Duration::hours(8);
                println!(
                    "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                    timestamp.format("%H:%M:%S"),
                    duration.as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method,
                    uri.path()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        let size = bytes.len();
        let duration = start.elapsed();
        let timestamp = Utc::now() + chrono::Duration::hours(8);

        let color_code = if parts.status.as_u16() == 200 {
            "36"
        } else {
            "33"
        };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            timestamp.format("%H:%M:%S"),
            duration.as_millis(),
            format_number(size),
            parts.status.as_u16(),
            method,
            uri.path()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    let config = shared::config::load_config()?;
    shared::config::init_config(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // Shipping quote for the checkout flow
        .route("/api/shipping/quote", post(handlers::shipping::quote))
        // Postcode lookups for the address form
        .route(
            "/api/postcode/:postcode/state",
            get(handlers::postcode::get_state),
        )
        .route(
            "/api/postcode/:postcode/towns",
            get(handlers::postcode::get_towns),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let port = shared::config::get_config().server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
