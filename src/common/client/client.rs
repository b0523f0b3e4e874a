use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, error};
use url::Url;

use crate::common::client::error::ApiError;

// 弹幕接口对新版浏览器 UA 的响应不稳定，沿用这个老的 UA
pub const USER_AGENT_VALUE: &str = "Chrome/23.3.3333.333";

/// 只读的 GET 请求抽象，解析与下载都通过它访问网络
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, ApiError>;
}

/// 不带任何认证状态的简单客户端
#[derive(Debug, Clone)]
pub struct BiliClient {
    pub inner: Client,
}

impl BiliClient {
    // timeout 为 None 时不限制请求时长
    pub fn new(timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = ClientBuilder::new().default_headers(Self::get_default_headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder.build().map_err(|e| {
            error!("Error creating client: {}", e);
            ApiError::ClientBuild(e.to_string())
        })?;

        Ok(Self { inner })
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }
}

#[async_trait]
impl HttpFetch for BiliClient {
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, ApiError> {
        debug!("GET {}", url);

        let resp = self.inner.get(url.clone()).send().await.map_err(|e| {
            error!("请求失败: {}", e);
            ApiError::Reqwest(e)
        })?;

        let status = resp.status();
        debug!("Response Status: {}", status);
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status, url.to_string()));
        }

        let body = resp.bytes().await?;
        debug!("响应长度: {} 字节", body.len());

        Ok(body.to_vec())
    }
}
