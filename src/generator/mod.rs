// src/generator/mod.rs
//
// 课程内容生成流水线：配置解析 -> 排期推导 -> 条目组装 -> 模块列表 -> 课程。
// 整个过程是纯函数，同样的输入总是得到同样的输出。

pub mod assembler;
pub mod catalog;
pub mod points;
pub mod schedule;
pub mod seeding;

pub use assembler::{assemble_course, build_module};
pub use catalog::{resolve_config, resolve_topics};
pub use points::PointPolicy;
pub use schedule::{derive_item_offsets, derive_module_count, derive_module_dates};
pub use seeding::seed_historical_completion;

use crate::{
    constants,
    error::{AppError, AppResult},
    models::{Course, CourseConfig},
};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationOptions {
    pub point_policy: PointPolicy,
}

impl GenerationOptions {
    pub fn new(point_policy: PointPolicy) -> Self {
        Self { point_policy }
    }

    /// 预算策略下，课程自身的 `totalPoints` 优先于全局预算
    pub fn effective_policy(&self, base: &CourseConfig) -> PointPolicy {
        match (self.point_policy, base.total_points) {
            (PointPolicy::BudgetProportional { .. }, Some(total_points)) => {
                PointPolicy::BudgetProportional { total_points }
            }
            (policy, _) => policy,
        }
    }
}

/// 显式模块数优先；缺省时由学期长度推导 (4–8)
pub fn module_count_for(base: &CourseConfig) -> AppResult<u32> {
    match base.module_count {
        Some(n) if n <= 0 => Err(AppError::InvalidModuleCount(n)),
        Some(n) => u32::try_from(n).map_err(|_| AppError::InvalidModuleCount(n)),
        None => Ok(derive_module_count(base.start_date, base.end_date)),
    }
}

/// 一次调用完成整条生成流水线
pub fn generate_course(base: &CourseConfig, options: &GenerationOptions) -> AppResult<Course> {
    let department = base
        .department
        .as_deref()
        .unwrap_or(constants::DEFAULT_DEPARTMENT);
    let dept = resolve_config(department);
    let module_count = module_count_for(base)?;
    let topics = resolve_topics(department, &base.name, module_count as usize);
    let course = assemble_course(base, dept, &topics, options.effective_policy(base))?;
    info!(
        "已生成课程 '{}' ({}): {} 个模块, 总分 {}",
        course.name,
        course.code,
        course.modules.len(),
        course.total_points
    );
    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> CourseConfig {
        CourseConfig::new(
            "Data Structures",
            "Computer Science",
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
        )
    }

    #[test]
    fn test_explicit_module_count_wins() {
        let mut config = base();
        config.module_count = Some(5);
        let course = generate_course(&config, &GenerationOptions::default()).unwrap();
        assert_eq!(course.modules.len(), 5);
    }

    #[test]
    fn test_non_positive_module_count_fails_fast() {
        let mut config = base();
        config.module_count = Some(0);
        assert!(matches!(
            generate_course(&config, &GenerationOptions::default()),
            Err(AppError::InvalidModuleCount(0))
        ));
        config.module_count = Some(-3);
        assert!(matches!(
            module_count_for(&config),
            Err(AppError::InvalidModuleCount(-3))
        ));
    }

    #[test]
    fn test_course_total_points_overrides_budget() {
        let mut config = base();
        config.total_points = Some(800);
        let options = GenerationOptions::new(PointPolicy::BudgetProportional { total_points: 1000 });
        assert_eq!(
            options.effective_policy(&config),
            PointPolicy::BudgetProportional { total_points: 800 }
        );
        // 线性策略忽略 totalPoints
        assert_eq!(
            GenerationOptions::default().effective_policy(&config),
            PointPolicy::LinearByModule
        );
    }

    #[test]
    fn test_missing_department_uses_default() {
        let mut config = base();
        config.department = None;
        let course = generate_course(&config, &GenerationOptions::default()).unwrap();
        assert_eq!(course.department, "Computer Science");
        assert_eq!(course.modules[0].name, "Module 1: Algorithm Analysis");
    }
}
