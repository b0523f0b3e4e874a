use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, DEFAULT_TIMEOUT_SECS, Endpoints};

#[derive(Parser, Debug)]
#[command(name = "bilidm")]
#[command(author, version, about = "获取B站视频弹幕", long_about = None)]
pub struct Cli {
    /// 视频的AV号
    #[arg(short = 'a', value_name = "AID")]
    #[arg(help = "aid, 视频的AV号 (可带 av 前缀)")]
    pub aid: Option<String>,

    /// 视频分页号
    #[arg(short = 'p', value_name = "PAGE", default_value_t = 1)]
    #[arg(allow_negative_numbers = true)]
    pub page: i64,

    /// 输出到指定文件
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 转换为Biu格式
    #[arg(short = 'b', default_value_t = false)]
    pub biu: bool,

    /// 打印视频信息并退出
    #[arg(short = 'i', default_value_t = false)]
    pub info_only: bool,

    /// 请求超时秒数，0 表示不限制
    #[arg(short = 't', long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// 解压失败时直接报错，而不是输出已解压的部分
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// 输出调试日志
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// 转换为运行配置，缺少视频号时返回 None
    pub fn into_config(self) -> Option<Config> {
        let video_id = self.aid.filter(|aid| !aid.is_empty())?;

        Some(Config {
            video_id,
            page: self.page,
            output: self.output.filter(|p| !p.as_os_str().is_empty()),
            convert: self.biu,
            info_only: self.info_only,
            strict_inflate: self.strict,
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            verbose: self.verbose,
            endpoints: Endpoints::default(),
        })
    }
}
