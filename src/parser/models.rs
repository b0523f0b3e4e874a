use serde_derive::{Deserialize, Serialize};

/// 视频信息接口 `data` 字段的原始结构，缺失的字段取默认值
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewData {
    pub title: String,
    pub videos: i64,
    pub owner: OwnerInfo,
    pub pages: Vec<PageData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OwnerInfo {
    pub name: String,
    pub mid: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub cid: i64,
    pub page: i64,
    pub part: String,
    pub duration: u64,
}

/// 解析后的视频信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoView {
    pub status_code: i64,
    pub title: String,
    pub page_count: i64,
    pub uploader_name: String,
    pub uploader_id: i64,
    pub pages: Vec<PageInfo>,
}

/// 单个分页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub cid: i64,               // 弹幕池 id
    pub page_number: i64,       // 分页号，从 1 开始
    pub title: String,          // 分页标题
    pub duration_seconds: u64,  // 时长（秒）
}

impl VideoView {
    pub fn from_data(status_code: i64, data: ViewData) -> Self {
        Self {
            status_code,
            title: data.title,
            page_count: data.videos,
            uploader_name: data.owner.name,
            uploader_id: data.owner.mid,
            pages: data.pages.into_iter().map(PageInfo::from).collect(),
        }
    }

    pub fn is_multi_page(&self) -> bool {
        self.page_count > 1
    }
}

impl From<PageData> for PageInfo {
    fn from(page: PageData) -> Self {
        Self {
            cid: page.cid,
            page_number: page.page,
            title: page.part,
            duration_seconds: page.duration,
        }
    }
}

/// Biu 格式的单条弹幕
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiuDanmaku {
    pub time: i64,
    #[serde(rename = "type")]
    pub kind: u8,
    pub text: String,
    pub style: BiuStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiuStyle {
    pub color: String,
}

/// XML 中的一个 `<d>` 元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDanmaku {
    pub p: Option<String>,
    pub text: String,
}
