// src/generator/schedule.rs

use crate::{
    constants::schedule::*,
    error::{AppError, AppResult},
};
use chrono::{Duration, NaiveDate};
use log::trace;

/// 学期总周数，按天数向上取整到整周；结束日期不晚于开始日期时为 0 或负数
pub fn total_weeks(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days();
    days.div_euclid(7) + i64::from(days.rem_euclid(7) != 0)
}

/// `clamp(floor(total_weeks / 2), 4, 8)`
pub fn derive_module_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let half = total_weeks(start, end).div_euclid(2);
    half.clamp(i64::from(MIN_MODULES), i64::from(MAX_MODULES)) as u32
}

/// 每个模块的间隔周数，向下取整。学期过短或结束早于开始时间隔为 0，
/// 所有模块都从学期开始日期起步。
pub fn weeks_per_module(start: NaiveDate, end: NaiveDate, module_count: u32) -> AppResult<i64> {
    if module_count == 0 {
        return Err(AppError::InvalidModuleCount(0));
    }
    Ok(total_weeks(start, end)
        .div_euclid(i64::from(module_count))
        .max(0))
}

/// 第 i 个模块 (0 起) 的开始日期为 `start + i * weeks_per_module` 周
pub fn derive_module_dates(
    start: NaiveDate,
    end: NaiveDate,
    module_count: u32,
) -> AppResult<Vec<NaiveDate>> {
    let spacing = weeks_per_module(start, end, module_count)?;
    trace!("模块数 {}，间隔 {} 周", module_count, spacing);
    Ok((0..i64::from(module_count))
        .map(|i| start + Duration::weeks(i * spacing))
        .collect())
}

/// 模块内各条目的截止日期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemOffsets {
    pub intro: NaiveDate,
    pub reading1: NaiveDate,
    pub discussion: NaiveDate,
    pub reading2: NaiveDate,
    pub assignment: NaiveDate,
    pub quiz: NaiveDate,
}

impl ItemOffsets {
    /// 模块窗口的结束日期 (即最后一个条目的截止日期)
    pub fn window_end(&self) -> NaiveDate {
        self.quiz
    }
}

pub fn derive_item_offsets(module_start: NaiveDate) -> ItemOffsets {
    let at = |days: i64| module_start + Duration::days(days);
    ItemOffsets {
        intro: at(INTRO_OFFSET_DAYS),
        reading1: at(READING1_OFFSET_DAYS),
        discussion: at(DISCUSSION_OFFSET_DAYS),
        reading2: at(READING2_OFFSET_DAYS),
        assignment: at(ASSIGNMENT_OFFSET_DAYS),
        quiz: at(QUIZ_OFFSET_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total_weeks_rounds_up_partial_weeks() {
        assert_eq!(total_weeks(date(2025, 1, 13), date(2025, 5, 2)), 16); // 109 天
        assert_eq!(total_weeks(date(2025, 1, 1), date(2025, 1, 15)), 2);
        assert_eq!(total_weeks(date(2025, 1, 1), date(2025, 1, 1)), 0);
        assert!(total_weeks(date(2025, 5, 1), date(2025, 1, 1)) < 0);
    }

    #[test]
    fn test_module_count_is_clamped() {
        assert_eq!(derive_module_count(date(2025, 1, 13), date(2025, 5, 2)), 8);
        assert_eq!(derive_module_count(date(2025, 1, 1), date(2025, 2, 1)), 4);
        assert_eq!(derive_module_count(date(2025, 1, 1), date(2026, 1, 1)), 8);
        // 12 周 -> 6 个模块
        assert_eq!(derive_module_count(date(2025, 1, 1), date(2025, 3, 26)), 6);
    }

    #[test]
    fn test_degenerate_range_yields_four_modules() {
        assert_eq!(derive_module_count(date(2025, 3, 1), date(2025, 3, 1)), 4);
        assert_eq!(derive_module_count(date(2025, 3, 1), date(2024, 3, 1)), 4);
        let dates = derive_module_dates(date(2025, 3, 1), date(2024, 3, 1), 4).unwrap();
        assert_eq!(dates, vec![date(2025, 3, 1); 4]);
    }

    #[test]
    fn test_short_term_keeps_truncated_spacing() {
        // 3 周 / 4 个模块 -> 间隔 0 周，不会排到学期之外
        let start = date(2025, 1, 13);
        let end = date(2025, 2, 3);
        assert_eq!(weeks_per_module(start, end, 4).unwrap(), 0);
        let dates = derive_module_dates(start, end, 4).unwrap();
        assert!(dates.iter().all(|d| *d == start));
    }

    #[test]
    fn test_module_dates_truncate_spacing() {
        // 15 周 / 4 个模块 -> 间隔 3 周
        let start = date(2025, 1, 6);
        let end = start + Duration::weeks(15);
        let dates = derive_module_dates(start, end, 4).unwrap();
        assert_eq!(
            dates,
            vec![start, date(2025, 1, 27), date(2025, 2, 17), date(2025, 3, 10)]
        );
    }

    #[test]
    fn test_zero_module_count_is_rejected() {
        let err = derive_module_dates(date(2025, 1, 1), date(2025, 5, 1), 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidModuleCount(0)));
    }

    #[test]
    fn test_item_offsets() {
        let o = derive_item_offsets(date(2025, 1, 13));
        assert_eq!(o.intro, date(2025, 1, 13));
        assert_eq!(o.reading1, date(2025, 1, 15));
        assert_eq!(o.discussion, date(2025, 1, 17));
        assert_eq!(o.reading2, date(2025, 1, 20));
        assert_eq!(o.assignment, date(2025, 1, 23));
        assert_eq!(o.quiz, date(2025, 1, 26));
        assert_eq!(o.window_end(), o.quiz);
    }
}
