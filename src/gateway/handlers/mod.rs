//! HTTP 请求处理器

pub mod hello;
pub mod root;
pub mod translate;

pub use hello::handle_hello;
pub use root::handle_root;
pub use translate::handle_translate;

use axum::{
    extract::rejection::BytesRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::providers::TranslateError;

/// 返回给客户端的错误，响应体为纯文本 `"<message>\n"`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    Internal(String),
    /// 请求体读取失败（如超过 `DefaultBodyLimit`），沿用 axum 的状态码
    Body(BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.to_string(),
            ApiError::Internal(msg) => msg.clone(),
            ApiError::Body(rejection) => rejection.body_text(),
        }
    }
}

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        let message = match err {
            TranslateError::Request(_) => {
                "Internal Server Error: failed to make request".to_string()
            }
            TranslateError::Status(status) => format!("External API error: {}", status),
            TranslateError::Parse(_) => "Internal Server Error: failed to parse response".to_string(),
            TranslateError::Aborted(_) => "Internal Server Error: translation aborted".to_string(),
        };
        ApiError::Internal(message)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            format!("{}\n", self.message()),
        )
            .into_response()
    }
}

/// 宽松解码请求体
///
/// - 只读取第一个 JSON 值，之后的字节忽略
/// - 顶层 `null` 等同于空对象
/// - 对象的 key 不区分大小写（统一转为小写），值为 `null` 的字段视为缺失
///
/// 目标类型的字段名必须是小写
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| serde_json::from_slice::<Value>(b""))?;

    let normalized = match first {
        Value::Null => Value::Object(Map::new()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        ),
        other => other,
    };

    serde_json::from_value(normalized)
}
