use std::fmt::Write;

use crate::parser::models::VideoView;
use crate::parser::utils::FormatTool;

/// 生成视频信息摘要，不做任何输出
pub fn summarize(view: &VideoView) -> String {
    let mut buf = String::new();

    // 写入 String 不会失败
    let _ = writeln!(buf, "标  题: {}", view.title);
    let _ = writeln!(
        buf,
        "上传者: {} (mid: {})",
        view.uploader_name, view.uploader_id
    );

    if view.is_multi_page() {
        buf.push_str("分  页:\n");
        for (i, page) in view.pages.iter().enumerate() {
            let _ = writeln!(
                buf,
                "      {:>3}. \"{}\" - {}",
                i + 1,
                page.title,
                FormatTool::format_duration(page.duration_seconds)
            );
        }
    } else if let Some(page) = view.pages.first() {
        let _ = writeln!(
            buf,
            "长  度: {}",
            FormatTool::format_duration(page.duration_seconds)
        );
    }

    buf
}
