// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const TITLE_TRUNCATE_LENGTH: usize = 60;
pub const MAX_FILENAME_BYTES: usize = 200;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "app.log";
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";

pub const DEFAULT_DEPARTMENT: &str = "Computer Science";
pub const DEFAULT_COURSE_NAME: &str = "Untitled Course";
pub const DEFAULT_INSTRUCTOR_NAME: &str = "Staff";
pub const DEFAULT_INSTRUCTOR_EMAIL: &str = "staff@university.edu";
pub const DEFAULT_CREDITS: u32 = 3;
pub const DEFAULT_TERM_WEEKS: u32 = 16;
pub const DEFAULT_TOTAL_POINTS: u32 = 1000;
pub const DEFAULT_SEED: u64 = 42;

/// 模块数量的取值区间 (由学期长度推导时生效)
pub mod schedule {
    pub const MIN_MODULES: u32 = 4;
    pub const MAX_MODULES: u32 = 8;

    // 相对于模块开始日期的固定天数偏移
    pub const INTRO_OFFSET_DAYS: i64 = 0;
    pub const READING1_OFFSET_DAYS: i64 = 2;
    pub const DISCUSSION_OFFSET_DAYS: i64 = 4;
    pub const READING2_OFFSET_DAYS: i64 = 7;
    pub const ASSIGNMENT_OFFSET_DAYS: i64 = 10;
    pub const QUIZ_OFFSET_DAYS: i64 = 13;
}

pub mod points {
    pub const PAGE: u32 = 0;
    pub const READING: u32 = 0;
    pub const DISCUSSION: u32 = 25;
    pub const ASSIGNMENT_BASE: u32 = 100;
    pub const QUIZ_BASE: u32 = 50;
    pub const PER_MODULE_STEP: u32 = 5;
    pub const ASSIGNMENT_BUDGET_SHARE: f64 = 0.4;
    pub const QUIZ_BUDGET_SHARE: f64 = 0.2;
}

pub mod quiz {
    pub const QUESTIONS_PER_QUIZ: usize = 5;
    pub const BASE_TIME_LIMIT_MINUTES: u32 = 30;
    pub const ALLOWED_ATTEMPTS: u32 = 2;
}

/// 历史完成度填充时的成绩区间 (满分的百分比)
pub mod seeding {
    pub const MIN_GRADE_PERCENT: u32 = 70;
    pub const MAX_GRADE_PERCENT: u32 = 100;
}
