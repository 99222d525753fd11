use serde::Deserialize;
use thiserror::Error;

// =========================================================
// 错误类型
// =========================================================

/// 与托管服务交互时的错误
///
/// - `Network`: 请求没有到达服务（断网、CORS、DNS 等）
/// - `Rejected`: 服务返回了非 2xx 状态，`message` 是可直接展示给用户的文本
/// - `Decode`: 2xx 响应体与预期结构不符
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 由非 2xx 响应构造错误，尽量提取服务端给出的说明
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Rejected { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// 认证服务与数据服务的错误体并集
///
/// 认证服务旧版返回 `error` / `error_description`，新版返回 `msg`，
/// 数据服务返回 `message`。
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
