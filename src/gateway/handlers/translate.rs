//! 翻译代理处理器

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::gateway::{
    handlers::{decode_body, ApiError},
    state::AppState,
};
use crate::providers::TranslateError;

/// `/translate` 请求体，三个字段均不能为空
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(rename = "source")]
    pub source_language: String,
    #[serde(rename = "target")]
    pub target_language: String,
}

impl TranslationRequest {
    fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.source_language.is_empty() && !self.target_language.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// ANY /translate
pub async fn handle_translate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let body = body?;

    let req: TranslationRequest = decode_body(&body)
        .map_err(|_| ApiError::BadRequest("Bad Request: invalid JSON"))?;

    if !req.is_complete() {
        return Err(ApiError::BadRequest("Bad Request: missing required fields"));
    }

    let translator = state.translator();
    tracing::info!(
        server = state.server_addr(),
        provider = translator.name(),
        source = %req.source_language,
        target = %req.target_language,
        "got /translate request"
    );

    // 出站调用放在独立任务中：客户端断开会丢弃 handler future，但上游请求照常跑完
    let result = tokio::spawn(async move {
        translator
            .translate(&req.text, &req.source_language, &req.target_language)
            .await
    })
    .await
    .map_err(|e| TranslateError::Aborted(e.to_string()))?;

    let translated_text = result.map_err(|e| {
        tracing::warn!("translation failed: {}", e);
        e
    })?;

    Ok(Json(TranslationResponse { translated_text }))
}
