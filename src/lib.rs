pub mod app;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod parser;
pub mod post_process;

pub use app::{App, Outcome};
pub use config::Config;
pub use error::DanmakuError;
