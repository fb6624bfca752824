//! 日志初始化
//!
//! 终端由 TUI 占用，日志只写入文件。

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// 构造过滤器：RUST_LOG 优先，否则使用配置中的级别
pub fn make_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| Error::Logging(format!("invalid log level '{default_level}': {e}"))),
    }
}

/// 初始化日志，追加写入 `path`。启动时调用一次。
pub fn init_logging(path: &Path, default_level: &str) -> Result<()> {
    let filter = make_filter(default_level)?;
    let file = File::options().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
