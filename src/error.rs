use thiserror::Error;

use crate::common::client::error::ApiError;

pub type Result<T> = std::result::Result<T, DanmakuError>;

/// 一次调用过程中可能出现的所有错误，均为终止性错误
#[derive(Debug, Error)]
pub enum DanmakuError {
    #[error("网络请求失败: {0}")]
    Fetch(String),

    #[error("B站 API 错误 ({code}): {message}")]
    Api { code: i64, message: String },

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("分页号错误: {page} (共 {count} 个分页)")]
    InvalidPage { page: i64, count: i64 },

    #[error("无效的视频号: {0}")]
    InvalidVideoId(String),

    #[error("转换格式时发生错误: {0}")]
    Conversion(String),

    #[error("弹幕数据解压失败: {0}")]
    Decompress(std::io::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiError> for DanmakuError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Reqwest(e) => DanmakuError::Fetch(e.to_string()),
            ApiError::HttpStatus(status, url) => {
                DanmakuError::Fetch(format!("HTTP {} ({})", status, url))
            }
            ApiError::InvalidUrl(e) => DanmakuError::Fetch(format!("无效的请求地址: {}", e)),
            ApiError::ClientBuild(msg) => DanmakuError::Fetch(msg),
        }
    }
}

impl From<serde_json::Error> for DanmakuError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<quick_xml::Error> for DanmakuError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
