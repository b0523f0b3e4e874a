use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::common::client::client::HttpFetch;
use crate::common::client::error::ApiError;
use crate::common::client::models::common::CommonResponse;
use crate::error::{DanmakuError, Result};
use crate::parser::models::{PageInfo, VideoView, ViewData};

/// 去掉 av 前缀（不区分大小写），返回纯数字的视频号
pub fn normalize_aid(input: &str) -> Result<String> {
    lazy_static! {
        static ref AV_PATTERN: Regex = Regex::new(r"^(?i:av)?(\d+)$").unwrap();
    }

    let input = input.trim();
    AV_PATTERN
        .captures(input)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| DanmakuError::InvalidVideoId(input.to_string()))
}

/// 视频信息解析
pub struct VideoResolver<'a> {
    client: &'a dyn HttpFetch,
    view_api: &'a str,
}

impl<'a> VideoResolver<'a> {
    pub fn new(client: &'a dyn HttpFetch, view_api: &'a str) -> Self {
        Self { client, view_api }
    }

    /// 请求视频信息接口，只请求一次，不重试
    pub async fn resolve(&self, video_id: &str) -> Result<VideoView> {
        let aid = normalize_aid(video_id)?;
        let url = Url::parse_with_params(self.view_api, &[("aid", aid.as_str())])
            .map_err(ApiError::from)?;

        let body = self.client.get_bytes(&url).await?;
        Self::parse_view(&body)
    }

    /// 解析视频信息接口的响应体
    pub fn parse_view(body: &[u8]) -> Result<VideoView> {
        let resp: CommonResponse<ViewData> = serde_json::from_slice(body)?;

        if resp.code != 0 {
            warn!("视频信息接口返回错误: {} {}", resp.code, resp.message);
            return Err(DanmakuError::Api {
                code: resp.code,
                message: resp.message,
            });
        }

        let data = resp
            .data
            .ok_or_else(|| DanmakuError::Parse("未找到视频信息".to_string()))?;
        if data.pages.is_empty() {
            return Err(DanmakuError::Parse("视频分页列表为空".to_string()));
        }

        let view = VideoView::from_data(resp.code, data);
        debug!("视频信息: {} ({} 个分页)", view.title, view.page_count);
        Ok(view)
    }
}

/// 按 1 起始的分页号选取分页，越界时报错而不是截断
pub fn select_page(view: &VideoView, page: i64) -> Result<&PageInfo> {
    let invalid = || DanmakuError::InvalidPage {
        page,
        count: view.page_count,
    };

    if page < 1 || page > view.page_count {
        return Err(invalid());
    }

    let index = usize::try_from(page - 1).map_err(|_| invalid())?;
    view.pages.get(index).ok_or_else(invalid)
}
