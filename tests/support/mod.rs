#![allow(dead_code)]

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use bili_danmaku::common::client::client::HttpFetch;
use bili_danmaku::common::client::error::ApiError;
use bili_danmaku::config::{Config, Endpoints};
use flate2::Compression;
use flate2::write::DeflateEncoder;
use reqwest::StatusCode;
use url::Url;

pub const VIEW_API: &str = "http://fake.local/x/web-interface/view";
pub const DANMAKU_API: &str = "http://fake.local/x/v1/dm/list.so";

/// 按 URL 前缀返回预设响应，并记录所有请求
pub struct FakeClient {
    routes: Vec<(String, Option<Vec<u8>>)>,
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn route(mut self, prefix: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.push((prefix.to_string(), Some(body.into())));
        self
    }

    /// 该前缀的请求返回 502
    pub fn fail(mut self, prefix: &str) -> Self {
        self.routes.push((prefix.to_string(), None));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetch for FakeClient {
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, ApiError> {
        self.calls.lock().unwrap().push(url.to_string());

        for (prefix, body) in &self.routes {
            if url.as_str().starts_with(prefix.as_str()) {
                return match body {
                    Some(body) => Ok(body.clone()),
                    None => Err(ApiError::HttpStatus(StatusCode::BAD_GATEWAY, url.to_string())),
                };
            }
        }

        Err(ApiError::HttpStatus(StatusCode::NOT_FOUND, url.to_string()))
    }
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn test_config(video_id: &str) -> Config {
    let mut config = Config::new(video_id);
    config.endpoints = Endpoints {
        view: VIEW_API.to_string(),
        danmaku_list: DANMAKU_API.to_string(),
    };
    config
}

pub const SINGLE_PAGE_VIEW: &str = r#"{
    "code": 0,
    "message": "0",
    "ttl": 1,
    "data": {
        "bvid": "BV1xx411c7mD",
        "aid": 170001,
        "videos": 1,
        "title": "测试视频",
        "owner": { "mid": 2, "name": "碧诗", "face": "" },
        "cid": 279786,
        "pages": [
            { "cid": 279786, "page": 1, "part": "", "duration": 125 }
        ]
    }
}"#;

pub const MULTI_PAGE_VIEW: &str = r#"{
    "code": 0,
    "message": "0",
    "data": {
        "videos": 3,
        "title": "合集",
        "owner": { "mid": 42, "name": "up主" },
        "pages": [
            { "cid": 1001, "page": 1, "part": "第一集", "duration": 59 },
            { "cid": 1002, "page": 2, "part": "第二集", "duration": 600 },
            { "cid": 1003, "page": 3, "part": "第三集", "duration": 3725 }
        ]
    }
}"#;

pub const NOT_FOUND_VIEW: &str = r#"{"code":-400,"message":"请求错误","ttl":1}"#;

pub const DANMAKU_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?><i><chatserver>chat.bilibili.com</chatserver><chatid>279786</chatid><mission>0</mission><maxlimit>1000</maxlimit><state>0</state><real_name>0</real_name><source>k-v</source><d p="12.34,1,25,16777215,1500000000,0,abcdef01,1234567">第一条</d><d p="3.50,5,25,255,1500000001,0,abcdef02,1234568">顶部 &amp; 弹幕</d><d p="100.00,4,25,0,1500000002,0,abcdef03,1234569">底部</d></i>"#;
