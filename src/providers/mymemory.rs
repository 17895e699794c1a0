//! MyMemory 翻译 Provider
//!
//! 通过 `GET <base>/get?q=..&langpair=src|dst` 调用公开的 MyMemory API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::providers::{TranslateError, Translator};
use crate::utils::get_shared_client;

/// 上游响应结构，只保留需要的字段
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct MyMemoryTranslator {
    base_url: String,
    client: Client,
}

impl MyMemoryTranslator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, get_shared_client().clone())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// 构造上游请求 URL，文本与语言代码均做百分号编码，`|` 分隔符保持原样
    pub fn request_url(&self, text: &str, source: &str, target: &str) -> String {
        format!(
            "{}/get?q={}&langpair={}|{}",
            self.base_url,
            urlencoding::encode(text),
            urlencoding::encode(source),
            urlencoding::encode(target),
        )
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    fn name(&self) -> &str {
        "mymemory"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let url = self.request_url(text, source, target);
        tracing::debug!(url = %url, "upstream request");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TranslateError::Status(status.to_string()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;
        let parsed: ApiResponse =
            serde_json::from_slice(&body).map_err(|e| TranslateError::Parse(e.to_string()))?;

        Ok(parsed.response_data.translated_text)
    }
}
