use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{BillState, DEFAULT_MAX_DIGITS, MAX_SUPPORTED_DIGITS};

const APP_DIR: &str = "tipcalc";

/// 用户配置 (config.toml)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// 账单最大位数 (1..=9)
    pub max_bill_digits: usize,
    /// 小费重复时显示 "--"
    pub dedup_tips: bool,
    /// 日志过滤器，RUST_LOG 优先
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_bill_digits: DEFAULT_MAX_DIGITS,
            dedup_tips: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SUPPORTED_DIGITS).contains(&self.max_bill_digits) {
            return Err(Error::InvalidConfig(format!(
                "max_bill_digits must be between 1 and {MAX_SUPPORTED_DIGITS}, got {}",
                self.max_bill_digits
            )));
        }
        Ok(())
    }

    /// 按配置创建初始账单状态
    pub fn bill_state(&self) -> BillState {
        BillState::new(self.max_bill_digits, self.dedup_tips)
    }
}

/// 配置文件路径 (~/.config/tipcalc/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(Error::NoDataDir("config"))?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// 获取数据目录路径 (~/.local/share/tipcalc/)
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(Error::NoDataDir("data"))?
        .join(APP_DIR);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;

    Ok(settings)
}
