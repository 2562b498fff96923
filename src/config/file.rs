// src/config/file.rs

use crate::{
    config::ExternalConfig, // 只需要从父模块导入结构体定义
    constants,
    error::{AppError, AppResult},
};
use anyhow::{Context, anyhow};
use log::{info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub(super) fn get_config_path() -> AppResult<PathBuf> {
    let path = dirs::home_dir()
        .ok_or_else(|| AppError::Other(anyhow!("无法获取用户主目录")))?
        .join(constants::CONFIG_DIR_NAME)
        .join(constants::CONFIG_FILE_NAME);
    Ok(path)
}

/// 读取配置文件；文件不存在时写入一份默认配置。
/// 默认配置写入失败不影响运行，只记录警告并使用内存中的默认值。
pub(crate) fn load_or_create_external_config() -> AppResult<ExternalConfig> {
    let config_path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{}，使用默认配置", e);
            return Ok(ExternalConfig::default());
        }
    };

    if config_path.is_file() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("读取配置文件 '{}' 失败", config_path.display()))?;
        return serde_json::from_str(&content).map_err(|source| AppError::ConfigParseFailed {
            path: config_path.display().to_string(),
            source,
        });
    }

    info!("配置文件 {:?} 不存在，将创建默认配置。", config_path);
    let config = ExternalConfig::default();
    if let Err(e) = write_config(&config_path, &config) {
        warn!("无法写入默认配置文件 '{}': {}", config_path.display(), e);
    }
    Ok(config)
}

fn write_config(path: &Path, config: &ExternalConfig) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json_content = serde_json::to_string_pretty(config)?;
    fs::write(path, json_content)?;
    Ok(())
}
