//! 根路径处理器，同时兜底所有未注册的路径

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
};

use crate::gateway::state::AppState;

pub const ROOT_RESPONSE: &str = "This is my website!\n";

/// ANY /
///
/// 记录 `first` / `second` 查询参数和请求体后固定返回 200
pub async fn handle_root(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> &'static str {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let lookup = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let first = lookup("first");
    let second = lookup("second");

    let body = match body {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("could not read body: {}", e);
            Default::default()
        }
    };

    tracing::info!(
        server = state.server_addr(),
        has_first = first.is_some(),
        first = first.unwrap_or_default(),
        has_second = second.is_some(),
        second = second.unwrap_or_default(),
        body = %String::from_utf8_lossy(&body),
        "got / request"
    );

    ROOT_RESPONSE
}
