pub struct FormatTool;

impl FormatTool {
    // 格式化时长为 MM:SS，分钟数不按小时进位
    pub fn format_duration(seconds: u64) -> String {
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}
