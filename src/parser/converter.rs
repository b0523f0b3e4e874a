use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{DanmakuError, Result};
use crate::parser::models::{BiuDanmaku, BiuStyle, RawDanmaku};

const MAX_COLOR: u32 = 0xff_ffff;

/// 把 XML 弹幕转换为 Biu 格式的 JSON 数组。任意一条弹幕出错都会整体失败
pub fn convert_to_biu(xml: &[u8]) -> Result<Vec<u8>> {
    let raw = parse_xml(xml)?;
    debug!("共解析到 {} 条弹幕", raw.len());

    let converted = raw
        .iter()
        .map(convert_danmaku)
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::to_vec(&converted)?)
}

/// 读取根元素下的所有 `<d>` 元素，保持文档顺序
pub fn parse_xml(xml: &[u8]) -> Result<Vec<RawDanmaku>> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(false);
    reader.check_end_names(true);

    let mut buf = Vec::new();
    let mut items = Vec::new();
    let mut current: Option<RawDanmaku> = None;
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if depth == 0 {
                    seen_root = true;
                } else if depth == 1 && e.name().as_ref() == b"d" {
                    current = Some(RawDanmaku {
                        p: read_p_attr(&e)?,
                        text: String::new(),
                    });
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    // 空的根元素，没有弹幕
                    break;
                }
                if depth == 1 && e.name().as_ref() == b"d" {
                    items.push(RawDanmaku {
                        p: read_p_attr(&e)?,
                        text: String::new(),
                    });
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(DanmakuError::Parse("多余的结束标签".to_string()));
                }
                if depth == 2 {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                }
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Text(e) => {
                if depth == 2 {
                    if let Some(item) = current.as_mut() {
                        item.text.push_str(&e.unescape()?);
                    }
                }
            }
            Event::CData(e) => {
                if depth == 2 {
                    if let Some(item) = current.as_mut() {
                        let data = e.into_inner();
                        let text = std::str::from_utf8(&data)
                            .map_err(|e| DanmakuError::Parse(e.to_string()))?;
                        item.text.push_str(text);
                    }
                }
            }
            Event::Eof => {
                if !seen_root {
                    return Err(DanmakuError::Parse("XML 缺少根元素".to_string()));
                }
                if depth > 0 {
                    return Err(DanmakuError::Parse("XML 文档不完整".to_string()));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

fn read_p_attr(e: &BytesStart) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| DanmakuError::Parse(e.to_string()))?;
        if attr.key.as_ref() == b"p" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// 转换单条弹幕，`p` 属性只用到第 0（时间）、1（模式）、3（颜色）个字段
pub fn convert_danmaku(raw: &RawDanmaku) -> Result<BiuDanmaku> {
    let p = raw
        .p
        .as_deref()
        .ok_or_else(|| DanmakuError::Conversion("弹幕缺少 p 属性".to_string()))?;

    let fields: Vec<&str> = p.split(',').collect();
    if fields.len() < 4 {
        return Err(DanmakuError::Conversion(format!("弹幕属性字段不足: {:?}", p)));
    }

    Ok(BiuDanmaku {
        time: parse_time(fields[0])?,
        kind: map_type(fields[1]),
        text: raw.text.clone(),
        style: BiuStyle {
            color: format_color(fields[3])?,
        },
    })
}

/// 弹幕出现时间，截断到整秒
pub fn parse_time(field: &str) -> Result<i64> {
    let invalid = || DanmakuError::Conversion(format!("无效的弹幕时间: {:?}", field));

    let digits: Vec<char> = field.chars().filter(|c| *c != '.').collect();
    if digits.len() < 3 {
        return Err(invalid());
    }

    let whole: String = match field.split_once('.') {
        Some((secs, frac)) => {
            if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            secs.to_string()
        }
        // 没有小数点时按厘秒处理
        None => digits[..digits.len() - 2].iter().collect(),
    };

    whole.parse::<i64>().map_err(|_| invalid())
}

/// 弹幕模式 -> Biu 类型：1 滚动，2 顶部，3 底部，0 其它
pub fn map_type(mode: &str) -> u8 {
    match mode {
        "1" | "2" | "3" => 1,
        "5" => 2,
        "4" => 3,
        _ => 0,
    }
}

/// 十进制颜色 -> `#rrggbb`
pub fn format_color(field: &str) -> Result<String> {
    let color = field
        .parse::<u32>()
        .map_err(|e| DanmakuError::Conversion(format!("无效的弹幕颜色 {:?}: {}", field, e)))?;

    if color > MAX_COLOR {
        return Err(DanmakuError::Conversion(format!("弹幕颜色超出范围: {}", color)));
    }

    Ok(format!("#{:06x}", color))
}
