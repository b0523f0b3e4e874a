use reqwest::StatusCode;
use thiserror::Error;

/// HTTP 客户端层面的错误（传输失败、状态码异常等）
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP 状态码异常: {0}, URL: {1}")]
    HttpStatus(StatusCode, String),

    #[error("无效的请求地址: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("创建HTTP客户端失败: {0}")]
    ClientBuild(String),
}
