// src/cli.rs

use crate::generator::PointPolicy;
use clap::{Parser, ValueEnum, command, crate_version};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// 作业/测验的分值策略
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointPolicyKind {
    /// 随模块序号线性递增
    #[default]
    Linear,
    /// 按总分预算在模块间平均分配
    Budget,
}

impl PointPolicyKind {
    pub fn into_policy(self, total_points: u32) -> PointPolicy {
        match self {
            PointPolicyKind::Linear => PointPolicy::LinearByModule,
            PointPolicyKind::Budget => PointPolicy::BudgetProportional { total_points },
        }
    }
}

// command 属性
#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true,
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(&["config_file", "prompt_file", "name", "catalog"]),
))]
pub struct Cli {
    // --- 运行模式 (Mode) ---
    /// 从 JSON 文件读取课程配置 (单个对象或数组)
    #[arg(short, long = "config", value_name = "FILE", help_heading = "Mode")]
    pub config_file: Option<PathBuf>,
    /// 从自由文本描述中解析课程配置
    #[arg(short, long, value_name = "FILE", help_heading = "Mode")]
    pub prompt_file: Option<PathBuf>,
    /// 直接通过命令行参数生成指定名称的课程
    #[arg(short, long, help_heading = "Mode")]
    pub name: Option<String>,
    /// 列出内置的院系与课程目录并退出
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub catalog: bool,

    // --- 课程选项 (Course) ---
    /// [参数模式] 所属院系
    #[arg(short, long, help_heading = "Course")]
    pub department: Option<String>,
    /// [参数模式] 课程代码 (例如 'MATH101')
    #[arg(long, help_heading = "Course")]
    pub code: Option<String>,
    /// [参数模式] 授课教师姓名
    #[arg(long, help_heading = "Course")]
    pub instructor: Option<String>,
    /// [参数模式] 开课日期 (YYYY-MM-DD 等常见格式)，默认为今天
    #[arg(long, value_name = "DATE", help_heading = "Course")]
    pub start: Option<String>,
    /// [参数模式] 结课日期，默认为开课日期加上默认学期周数
    #[arg(long, value_name = "DATE", help_heading = "Course")]
    pub end: Option<String>,
    /// [参数模式] 显式指定模块数量
    #[arg(short, long, value_name = "N", allow_negative_numbers = true, help_heading = "Course")]
    pub modules: Option<i64>,

    // --- 生成选项 (Options) ---
    /// 课程总分预算 (配合 budget 策略使用)
    #[arg(long, value_name = "POINTS", help_heading = "Options")]
    pub total_points: Option<u32>,
    /// 作业与测验的分值策略
    #[arg(long, value_enum, help_heading = "Options")]
    pub point_policy: Option<PointPolicyKind>,
    /// 将前 N 个模块标记为已完成，并生成模拟成绩
    #[arg(long, value_name = "N", help_heading = "Options")]
    pub seed_history: Option<u32>,
    /// 模拟成绩使用的随机种子
    #[arg(long, value_name = "SEED", help_heading = "Options")]
    pub seed: Option<u64>,
    /// 将生成的课程 JSON 写入文件
    #[arg(short, long, value_name = "FILE", help_heading = "Options")]
    pub output: Option<PathBuf>,
    /// 将生成的课程 JSON 打印到标准输出，不显示课程大纲
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub json: bool,

    // --- 通用选项 (General) ---
    /// 显示此帮助信息并退出
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// 显示版本信息并退出
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["lms-course-gen", "--catalog", "--name", "Calculus I"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flag_mode_parses_course_options() {
        let args = Cli::try_parse_from([
            "lms-course-gen",
            "--name",
            "Calculus I",
            "--department",
            "Mathematics",
            "--start",
            "2025-01-13",
            "--modules",
            "6",
            "--point-policy",
            "budget",
        ])
        .unwrap();
        assert_eq!(args.name.as_deref(), Some("Calculus I"));
        assert_eq!(args.modules, Some(6));
        assert_eq!(args.point_policy, Some(PointPolicyKind::Budget));
        assert_eq!(args.log_level, LogLevel::Off);
    }

    #[test]
    fn test_policy_kind_maps_to_policy() {
        assert_eq!(PointPolicyKind::Linear.into_policy(500), PointPolicy::LinearByModule);
        assert_eq!(
            PointPolicyKind::Budget.into_policy(500),
            PointPolicy::BudgetProportional { total_points: 500 }
        );
    }
}
