use std::net::SocketAddr;

use error_stack::ResultExt;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use kernel::KernelError;

use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{BookingRouter, HealthRouter, HotelRouter, PaymentRouter, TicketRouter};

mod auth;
mod controller;
mod error;
mod handler;
mod route;

const SERVER_PORT: &str = "SERVER_PORT";
const DEFAULT_PORT: u16 = 8080;
const LOG_DIR: &str = "LOG_DIR";

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let log_dir = dotenvy::var(LOG_DIR).unwrap_or_else(|_| "./logs/".into());
    let appender = tracing_appender::rolling::daily(log_dir, "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::EnvFilter::new(
                dotenvy::var("RUST_LOG").unwrap_or_else(|_| {
                    "driver=debug,application=debug,server=debug,tower_http=debug,sqlx=warn".into()
                }),
            )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new().await?;

    let router = axum::Router::new()
        .route_health()
        .route_booking()
        .route_hotel()
        .route_ticket()
        .route_payment()
        .layer(CorsLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app.clone());

    let port = driver::env_or(SERVER_PORT, DEFAULT_PORT)?;
    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("Listening on {bind}");

    axum::serve(tcp, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    app.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down");
}
