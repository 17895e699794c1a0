//! 问候处理器

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};
use serde::Deserialize;

use crate::gateway::{
    handlers::{decode_body, ApiError},
    state::AppState,
};

/// `/hello` 请求体：`{"Name", "Age", "Hobby"}`，key 不区分大小写，缺失字段取零值
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GreetingRequest {
    pub name: String,
    pub age: i64,
    pub hobby: String,
}

impl GreetingRequest {
    pub fn greeting(&self) -> String {
        format!(
            "Hello, {}! You are {} years old and enjoy {}.\n",
            self.name, self.age, self.hobby
        )
    }
}

/// ANY /hello
pub async fn handle_hello(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<String, ApiError> {
    let body = body?;

    let req: GreetingRequest = decode_body(&body)
        .map_err(|_| ApiError::BadRequest("Bad Request: invalid JSON"))?;

    if req.age <= 0 {
        return Err(ApiError::BadRequest(
            "Bad Request: Age must be a positive number",
        ));
    }

    tracing::info!(
        server = state.server_addr(),
        name = %req.name,
        age = req.age,
        hobby = %req.hobby,
        "got /hello request"
    );

    Ok(req.greeting())
}
