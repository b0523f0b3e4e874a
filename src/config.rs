use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_VIEW_API: &str = "https://api.bilibili.com/x/web-interface/view";
pub const DEFAULT_DANMAKU_API: &str = "https://api.bilibili.com/x/v1/dm/list.so";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 接口地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub view: String,         // 视频信息
    pub danmaku_list: String, // 弹幕列表
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            view: DEFAULT_VIEW_API.to_string(),
            danmaku_list: DEFAULT_DANMAKU_API.to_string(),
        }
    }
}

/// 启动后只读的运行配置
#[derive(Debug, Clone)]
pub struct Config {
    pub video_id: String,           // 视频号，可带 av 前缀
    pub page: i64,                  // 分页号，从 1 开始
    pub output: Option<PathBuf>,    // 输出文件，None 表示标准输出
    pub convert: bool,              // 是否转换为 Biu 格式
    pub info_only: bool,            // 只打印视频信息
    pub strict_inflate: bool,       // 解压失败时是否报错
    pub timeout: Option<Duration>,  // 请求超时
    pub verbose: bool,              // 调试日志
    pub endpoints: Endpoints,
}

impl Config {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            page: 1,
            output: None,
            convert: false,
            info_only: false,
            strict_inflate: false,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            verbose: false,
            endpoints: Endpoints::default(),
        }
    }
}
