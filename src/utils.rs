use reqwest::Client;
use std::sync::OnceLock;

/// 获取共享的 HTTP 客户端（用于访问翻译服务等上游）
///
/// 不设置请求超时，沿用传输层默认行为
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

pub fn get_shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build configured HTTP client, using defaults: {}", e);
                Client::new()
            })
    })
}
