// src/generator/points.rs

use crate::constants::points::*;
use serde::{Deserialize, Serialize};

/// 作业/测验分值策略。两种公式都曾在演示数据中使用，这里显式选择其一。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PointPolicy {
    /// 作业 `100 + n*5`，测验 `50 + n*5`
    #[default]
    LinearByModule,
    /// 作业 `floor(total/count * 0.4)`，测验 `floor(total/count * 0.2)`
    BudgetProportional { total_points: u32 },
}

/// 单个模块内各类条目的分值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPoints {
    pub page: u32,
    pub reading: u32,
    pub discussion: u32,
    pub assignment: u32,
    pub quiz: u32,
}

impl PointPolicy {
    pub fn points_for(&self, module_number: u32, module_count: u32) -> ItemPoints {
        let (assignment, quiz) = match *self {
            PointPolicy::LinearByModule => (
                ASSIGNMENT_BASE + module_number * PER_MODULE_STEP,
                QUIZ_BASE + module_number * PER_MODULE_STEP,
            ),
            PointPolicy::BudgetProportional { total_points } => {
                let per_module = f64::from(total_points) / f64::from(module_count.max(1));
                (
                    (per_module * ASSIGNMENT_BUDGET_SHARE).floor() as u32,
                    (per_module * QUIZ_BUDGET_SHARE).floor() as u32,
                )
            }
        };
        ItemPoints {
            page: PAGE,
            reading: READING,
            discussion: DISCUSSION,
            assignment,
            quiz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_policy_grows_by_module() {
        let p1 = PointPolicy::LinearByModule.points_for(1, 8);
        let p8 = PointPolicy::LinearByModule.points_for(8, 8);
        assert_eq!((p1.assignment, p1.quiz), (105, 55));
        assert_eq!((p8.assignment, p8.quiz), (140, 90));
        assert_eq!(p1.discussion, 25);
        assert_eq!(p1.page, 0);
    }

    #[test]
    fn test_budget_policy_truncates() {
        let policy = PointPolicy::BudgetProportional { total_points: 1000 };
        let p = policy.points_for(3, 7);
        // 1000 / 7 = 142.857... -> 57 / 28
        assert_eq!((p.assignment, p.quiz), (57, 28));
        assert_eq!(p.discussion, 25);
    }

    #[test]
    fn test_policy_serde_form() {
        let json = serde_json::to_string(&PointPolicy::BudgetProportional { total_points: 600 }).unwrap();
        assert_eq!(json, r#"{"kind":"budget_proportional","total_points":600}"#);
        let back: PointPolicy = serde_json::from_str(r#"{"kind":"linear_by_module"}"#).unwrap();
        assert_eq!(back, PointPolicy::LinearByModule);
    }
}
