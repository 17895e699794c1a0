//! Serve 命令 - 启动 HTTP 服务器

use anyhow::Result;

use crate::config::Config;
use crate::gateway;

/// 执行服务器启动命令
///
/// 绑定 `config.host:config.port`，注册 `/`、`/hello`、`/translate` 后一直运行，
/// 直到进程被终止或监听失败
pub async fn serve_command(config: Config) -> Result<()> {
    gateway::serve(config).await
}
