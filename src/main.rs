//! hello-relay - 问候与翻译中继服务
//!
//! 一个很小的 HTTP 服务，提供三个端点：
//!
//! - `/`: 记录查询参数和请求体，返回固定文本
//! - `/hello`: 校验 `{Name, Age, Hobby}` 并返回问候语
//! - `/translate`: 把文本转发给 MyMemory 翻译 API，并返回 `{translatedText}`
//!
//! # 命令行接口
//!
//! - `serve`: 启动 HTTP 服务器（不带子命令时的默认行为）
//! - `test`: 向本地服务器发送测试请求

mod commands;
mod config;
mod gateway;
mod providers;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// hello-relay CLI
#[derive(Parser)]
#[command(name = "hello-relay")]
#[command(about = "Greeting and translation relay service", long_about = None)]
#[command(version)]
struct Cli {
    /// 省略时等同于 `serve`
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 可用的命令
#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// 启动 HTTP 服务器
    Serve,
    /// 向本地服务器发送测试请求
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("HELLO_RELAY_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    // 初始化日志系统
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello_relay=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let result = match cli.command {
        None | Some(Commands::Serve) => commands::serve_command(config).await,
        Some(Commands::Test) => commands::test_command(config).await,
    };

    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_serves() {
        let cli = Cli::try_parse_from(["hello-relay"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["hello-relay", "serve"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));

        let cli = Cli::try_parse_from(["hello-relay", "test"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Test));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["hello-relay", "login"]).is_err());
    }
}
