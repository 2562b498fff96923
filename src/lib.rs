// src/lib.rs

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod store;
pub mod symbols;
pub mod ui;
pub mod utils;
mod workflows;

use crate::{cli::Cli, config::AppConfig, error::AppResult};
use log::debug;
use std::sync::Arc;

/// 库的公共入口点，由 `main.rs` 调用
pub fn run_from_cli(args: Arc<Cli>) -> AppResult<()> {
    logging::init_logger(args.log_level);
    debug!("CLI 参数: {:?}", args);

    if args.catalog {
        return workflows::run_catalog();
    }

    let config = AppConfig::new(&args)?;
    debug!("加载的应用配置: {:?}", config);

    if let Some(path) = &args.config_file {
        workflows::run_config_file(path, &args, &config)
    } else if let Some(path) = &args.prompt_file {
        workflows::run_prompt_file(path, &args, &config)
    } else if let Some(name) = &args.name {
        workflows::run_flags(name, &args, &config)
    } else {
        Ok(())
    }
}
