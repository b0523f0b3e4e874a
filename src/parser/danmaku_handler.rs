use std::io::Read;

use flate2::read::DeflateDecoder;
use tracing::{debug, warn};
use url::Url;

use crate::common::client::client::HttpFetch;
use crate::common::client::error::ApiError;
use crate::error::{DanmakuError, Result};

/// 弹幕列表下载
pub struct DanmakuHandler<'a> {
    client: &'a dyn HttpFetch,
    list_api: &'a str,
    strict: bool,
}

impl<'a> DanmakuHandler<'a> {
    pub fn new(client: &'a dyn HttpFetch, list_api: &'a str, strict: bool) -> Self {
        Self {
            client,
            list_api,
            strict,
        }
    }

    /// 获取弹幕下载地址
    pub fn get_url(&self, cid: i64) -> Result<Url> {
        let url = Url::parse_with_params(self.list_api, &[("oid", cid.to_string())])
            .map_err(ApiError::from)?;
        Ok(url)
    }

    /// 下载并解压指定弹幕池的 XML
    pub async fn fetch(&self, cid: i64) -> Result<Vec<u8>> {
        let url = self.get_url(cid)?;
        let raw = self.client.get_bytes(&url).await?;
        debug!("弹幕原始数据: {} 字节", raw.len());

        inflate(&raw, self.strict)
    }
}

/// 解压 raw deflate 数据。非严格模式下出错时返回已解压出的部分
pub fn inflate(raw: &[u8], strict: bool) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(raw);
    let mut decoded = Vec::new();

    match decoder.read_to_end(&mut decoded) {
        Ok(_) => Ok(decoded),
        Err(e) if strict => Err(DanmakuError::Decompress(e)),
        Err(e) => {
            warn!("弹幕数据解压不完整，保留已解压的 {} 字节: {}", decoded.len(), e);
            Ok(decoded)
        }
    }
}
