// src/config.rs

pub mod file;

use self::file::load_or_create_external_config;
use crate::{
    cli::{Cli, PointPolicyKind},
    constants,
    error::AppResult,
    generator::{GenerationOptions, PointPolicy},
    models::CourseDefaults,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub point_policy: PointPolicyKind,
    pub default_total_points: Option<u32>,
    pub default_term_weeks: Option<u32>,
    pub default_credits: Option<u32>,
    pub default_department: Option<String>,
    pub default_seed_history: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            point_policy: PointPolicyKind::Linear,
            default_total_points: Some(constants::DEFAULT_TOTAL_POINTS),
            default_term_weeks: Some(constants::DEFAULT_TERM_WEEKS),
            default_credits: Some(constants::DEFAULT_CREDITS),
            default_department: Some(constants::DEFAULT_DEPARTMENT.to_string()),
            default_seed_history: Some(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// --- 为上面的 serde default 添加辅助函数 ---
fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// 用户目录下的 JSON 配置文件
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub point_policy: PointPolicy,
    pub course_defaults: CourseDefaults,
    /// 需要模拟为已完成的模块数，0 表示不生成历史数据
    pub seed_history: u32,
    pub seed: u64,
    pub pretty_json: bool,
}

impl AppConfig {
    /// 命令行参数优先于配置文件
    pub fn new(args: &Cli) -> AppResult<Self> {
        let external_config = load_or_create_external_config()?;
        Ok(Self::merge(args, external_config))
    }

    pub(crate) fn merge(args: &Cli, external_config: ExternalConfig) -> Self {
        let generator = external_config.generator;
        let kind = args.point_policy.unwrap_or(generator.point_policy);
        let total_points = args
            .total_points
            .or(generator.default_total_points)
            .unwrap_or(constants::DEFAULT_TOTAL_POINTS);

        Self {
            point_policy: kind.into_policy(total_points),
            course_defaults: CourseDefaults {
                department: generator
                    .default_department
                    .unwrap_or_else(|| constants::DEFAULT_DEPARTMENT.to_string()),
                term_weeks: generator
                    .default_term_weeks
                    .unwrap_or(constants::DEFAULT_TERM_WEEKS),
                credits: generator.default_credits.unwrap_or(constants::DEFAULT_CREDITS),
            },
            seed_history: args
                .seed_history
                .or(generator.default_seed_history)
                .unwrap_or(0),
            seed: args.seed.unwrap_or(constants::DEFAULT_SEED),
            pretty_json: external_config.output.pretty,
        }
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.point_policy)
    }
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            point_policy: PointPolicy::LinearByModule,
            course_defaults: CourseDefaults::default(),
            seed_history: 0,
            seed: constants::DEFAULT_SEED,
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_file_settings() {
        let args = Cli::parse_from([
            "lms-course-gen",
            "--catalog",
            "--point-policy",
            "budget",
            "--total-points",
            "600",
        ]);
        let config = AppConfig::merge(&args, ExternalConfig::default());
        assert_eq!(
            config.point_policy,
            PointPolicy::BudgetProportional { total_points: 600 }
        );
    }

    #[test]
    fn test_file_settings_apply_without_flags() {
        let external: ExternalConfig = serde_json::from_str(
            r#"{"generator":{"point_policy":"budget","default_total_points":900,"default_department":"History"}}"#,
        )
        .unwrap();
        let args = Cli::parse_from(["lms-course-gen", "--catalog"]);
        let config = AppConfig::merge(&args, external);
        assert_eq!(
            config.point_policy,
            PointPolicy::BudgetProportional { total_points: 900 }
        );
        assert_eq!(config.course_defaults.department, "History");
        assert_eq!(config.course_defaults.term_weeks, constants::DEFAULT_TERM_WEEKS);
        assert_eq!(config.seed_history, 0);
        assert_eq!(config.seed, constants::DEFAULT_SEED);
        assert!(config.pretty_json);
    }
}
