//! Test 命令 - 向本地服务器发送测试请求
//!
//! 依次请求 `/`、`/hello`、`/translate`，打印每个响应的状态和内容

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder};

use crate::config::Config;
use crate::utils::get_shared_client;

/// 执行测试命令
///
/// 任一请求无法发出时返回错误；非 2xx 状态只打印，不视为失败
pub async fn test_command(config: Config) -> Result<()> {
    println!("Sending test requests to local server...");

    let base = format!("http://{}:{}", config.host, config.port);
    let client = get_shared_client();

    let requests: [(&str, RequestBuilder); 3] = [
        (
            "/",
            client
                .request(Method::GET, format!("{}/?first=1&second=", base))
                .body("hello from the test command"),
        ),
        (
            "/hello",
            client.post(format!("{}/hello", base)).json(&serde_json::json!({
                "Name": "Ferris",
                "Age": 9,
                "Hobby": "sideways walking"
            })),
        ),
        (
            "/translate",
            client.post(format!("{}/translate", base)).json(&serde_json::json!({
                "text": "Hello, world!",
                "source": "en",
                "target": "es"
            })),
        ),
    ];

    for (label, request) in requests {
        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} failed. Make sure the server is running.", label))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        println!("{} -> {}", label, status);
        println!("{}", body.trim_end());
    }

    Ok(())
}
