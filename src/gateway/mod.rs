//! Gateway 应用层
//!
//! HTTP 服务器和请求处理

mod handlers;
mod middleware;
mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use axum::{middleware as axum_middleware, routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::providers::MyMemoryTranslator;

pub async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("error listening for server on {}", addr))?;
    let local_addr = listener.local_addr()?;

    let translator = Arc::new(MyMemoryTranslator::new(config.translate_url.as_str()));
    let state = AppState::new(local_addr, translator);
    let app = build_router(state);

    tracing::info!("Starting server on http://{}", local_addr);

    axum::serve(listener, app)
        .await
        .context("error serving HTTP")?;

    tracing::info!("server closed");
    Ok(())
}

/// `/hello` 和 `/translate` 精确匹配，其余路径全部落到根处理器；不限制方法
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", any(handlers::handle_hello))
        .route("/translate", any(handlers::handle_translate))
        .fallback(handlers::handle_root)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    middleware::request_logger,
                ))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
