//! 错误类型

use std::io;

/// 应用错误
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// 配置文件不是合法的 TOML，或包含未知字段
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("cannot locate user {0} directory")]
    NoDataDir(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
