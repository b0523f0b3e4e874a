use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::Result;
use crate::log_success;

/// 输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }
}

/// 写出数据。标准输出会额外补一个换行，文件按原样写入
pub async fn write_output(data: &[u8], target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_with_newline(&mut handle, data)
        }
        OutputTarget::File(path) => {
            write_file(path, data).await?;
            log_success!("已写入 {} ({} 字节)", path.display(), data.len());
            Ok(())
        }
    }
}

pub fn write_with_newline<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    writer.write_all(data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

async fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    debug!("写入文件: {:?}", path);
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}
