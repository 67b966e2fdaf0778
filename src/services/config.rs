use crate::models::UiConfig;
use anyhow::{bail, Context};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "securitydashboard";
const APP_NAME: &str = "security_dashboard";

/// 获取配置文件路径: ~/.local/share/security_dashboard/config.json 等
fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME) {
        return proj_dirs.data_local_dir().join("config.json");
    }
    // 回退方案：当前目录
    PathBuf::from("config.json")
}

/// 解析并校验配置内容
pub fn parse_config(content: &str) -> anyhow::Result<UiConfig> {
    let config: UiConfig = serde_json::from_str(content).context("invalid config json")?;
    if !(config.breakpoint_px > 0.0) {
        bail!("breakpoint_px must be positive, got {}", config.breakpoint_px);
    }
    if !(config.drawer_width_px > 0.0) {
        bail!("drawer_width_px must be positive, got {}", config.drawer_width_px);
    }
    Ok(config)
}

fn load_from(path: &Path) -> anyhow::Result<UiConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_config(&content)
}

/// 加载配置，没有文件或解析失败时返回默认值
pub fn load_config() -> UiConfig {
    let path = get_config_path();
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return UiConfig::default();
    }
    match load_from(&path) {
        Ok(config) => {
            info!(path = %path.display(), "config loaded");
            config
        }
        Err(err) => {
            warn!("failed to load config, using defaults: {err:#}");
            UiConfig::default()
        }
    }
}
