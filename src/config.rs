//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - 翻译服务的上游地址

use anyhow::{Context, Result};

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 3333;

/// 默认翻译服务地址（MyMemory）
pub const DEFAULT_TRANSLATE_URL: &str = "https://api.mymemory.translated.net";

/// 应用配置
///
/// 包含服务器运行所需的所有配置项
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 翻译服务基础地址，不含末尾的 `/`
    pub translate_url: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `HELLO_RELAY_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `HELLO_RELAY_PORT`: 服务器监听端口（默认: 3333）
    /// - `HELLO_RELAY_TRANSLATE_URL`: 翻译服务地址（默认: MyMemory）
    ///
    /// # 错误
    ///
    /// - 如果 `HELLO_RELAY_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意查找函数加载配置，`from_env` 即基于环境变量的查找
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HELLO_RELAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("HELLO_RELAY_PORT") {
            Some(raw) => raw
                .parse()
                .context("HELLO_RELAY_PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let translate_url = lookup("HELLO_RELAY_TRANSLATE_URL")
            .unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            host,
            port,
            translate_url,
        })
    }
}
