//! 翻译 Provider 抽象层
//!
//! 定义翻译服务的统一接口，handler 只依赖 trait，便于在测试中替换为 stub

pub mod mymemory;

use async_trait::async_trait;

pub use mymemory::MyMemoryTranslator;

/// 翻译调用失败的原因
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// 无法完成出站请求（网络错误等）
    #[error("failed to make request: {0}")]
    Request(#[from] reqwest::Error),
    /// 上游返回了非 200 状态，携带完整状态行，如 `503 Service Unavailable`
    #[error("upstream responded with {0}")]
    Status(String),
    /// 上游响应体不是预期的 `{responseData: {translatedText}}` 结构
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// 执行出站调用的后台任务未能正常结束
    #[error("translation task aborted: {0}")]
    Aborted(String),
}

/// Translator Trait - 所有翻译服务的统一接口
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider 名称（用于日志和标识）
    fn name(&self) -> &str;

    /// 将 `text` 从 `source` 语言翻译为 `target` 语言
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, TranslateError>;
}
