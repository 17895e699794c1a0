//! Gateway 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::Instrument;

use crate::gateway::state::AppState;

/// 全局请求计数器，用于生成 request_id
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 请求日志中间件
///
/// 每个请求一个 span，带上监听地址，handler 内的日志都会落在这个 span 下
pub async fn request_logger(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let id = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let span = tracing::info_span!(
        "req",
        id,
        server = state.server_addr(),
        method = %request.method(),
        path = request.uri().path(),
    );

    async move {
        let start = Instant::now();
        let response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "done"
        );
        response
    }
    .instrument(span)
    .await
}
