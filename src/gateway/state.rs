//! Gateway 应用状态

use std::net::SocketAddr;
use std::sync::Arc;

use crate::providers::Translator;

/// Gateway 应用状态
///
/// 监听器绑定完成后创建一次，之后只读；所有 handler 共享
#[derive(Clone)]
pub struct AppState {
    server_addr: Arc<str>,
    translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(server_addr: SocketAddr, translator: Arc<dyn Translator>) -> Self {
        Self {
            server_addr: server_addr.to_string().into(),
            translator,
        }
    }

    /// 监听器实际绑定的地址，用于日志
    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn translator(&self) -> Arc<dyn Translator> {
        Arc::clone(&self.translator)
    }
}
