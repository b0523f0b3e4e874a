pub mod converter;
pub mod danmaku_handler;
pub mod models;
pub mod utils;
pub mod video_parser;

pub use converter::convert_to_biu;
pub use danmaku_handler::DanmakuHandler;
pub use video_parser::{VideoResolver, normalize_aid, select_page};
