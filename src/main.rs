use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

use bili_danmaku::App;
use bili_danmaku::cli::Cli;
use bili_danmaku::common::client::client::BiliClient;
use bili_danmaku::common::logger::init_tracing;
use bili_danmaku::log_error;

#[tokio::main]
async fn main() -> ExitCode {
    // 解析命令行参数
    let args = match Cli::try_parse() {
        Ok(args) => args,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let Some(config) = args.into_config() else {
        let _ = Cli::command().write_help(&mut std::io::stderr());
        return ExitCode::FAILURE;
    };

    // 初始化日志
    init_tracing(config.verbose);
    debug!("运行配置: {:?}", config);

    let client = match BiliClient::new(config.timeout) {
        Ok(client) => client,
        Err(e) => {
            log_error!("错误: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match App::new(&config, &client).run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("错误: {}", e);
            ExitCode::FAILURE
        }
    }
}
