use tracing::{debug, info};

use crate::common::client::client::HttpFetch;
use crate::config::Config;
use crate::error::Result;
use crate::parser::{DanmakuHandler, VideoResolver, convert_to_biu, select_page};
use crate::post_process::{OutputTarget, summarize, write_output};

/// 一次调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 只打印视频信息
    Summary(String),
    /// 弹幕数据（XML 或转换后的 JSON）
    Payload(Vec<u8>),
}

pub struct App<'a> {
    config: &'a Config,
    client: &'a dyn HttpFetch,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, client: &'a dyn HttpFetch) -> Self {
        Self { config, client }
    }

    /// 依次执行：解析视频 -> 选择分页 -> 下载弹幕 -> 转换
    pub async fn prepare(&self) -> Result<Outcome> {
        let resolver = VideoResolver::new(self.client, &self.config.endpoints.view);
        let view = resolver.resolve(&self.config.video_id).await?;
        info!("视频: {} (共 {} 个分页)", view.title, view.page_count);

        if self.config.info_only {
            return Ok(Outcome::Summary(summarize(&view)));
        }

        let page = select_page(&view, self.config.page)?;
        debug!("选择分页 {}: {} (cid: {})", self.config.page, page.title, page.cid);

        let handler = DanmakuHandler::new(
            self.client,
            &self.config.endpoints.danmaku_list,
            self.config.strict_inflate,
        );
        let mut data = handler.fetch(page.cid).await?;

        if self.config.convert {
            data = convert_to_biu(&data)?;
        }

        Ok(Outcome::Payload(data))
    }

    pub async fn run(&self) -> Result<()> {
        match self.prepare().await? {
            Outcome::Summary(text) => {
                print!("{}", text);
                Ok(())
            }
            Outcome::Payload(data) => {
                let target = OutputTarget::from_path(self.config.output.as_deref());
                write_output(&data, &target).await
            }
        }
    }
}
