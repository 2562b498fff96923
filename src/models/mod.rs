// src/models/mod.rs

pub mod catalog;

use crate::{constants, utils};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- 生成结果 (Course 树) ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub email: String,
}

impl Instructor {
    /// 只有姓名时，按姓名推导一个演示用邮箱
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: utils::derive_email(name),
        }
    }
}

impl Default for Instructor {
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_INSTRUCTOR_NAME.to_string(),
            email: constants::DEFAULT_INSTRUCTOR_EMAIL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub code: String,
    pub description: String,
    pub instructor: Instructor,
    pub term: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub department: String,
    pub credits: u32,
    pub total_points: u32,
    pub modules: Vec<Module>,
}

impl Course {
    pub fn items(&self) -> impl Iterator<Item = &ModuleItem> {
        self.modules.iter().flat_map(|m| m.items.iter())
    }

    /// 所有条目分值之和，`total_points` 必须始终等于该值
    pub fn item_points_sum(&self) -> u32 {
        self.items().map(|i| i.points_possible).sum()
    }

    pub fn recompute_total_points(&mut self) {
        self.total_points = self.item_points_sum();
    }

    /// 整体替换模块列表，并同步重算总分
    pub fn with_modules(mut self, modules: Vec<Module>) -> Self {
        self.modules = modules;
        self.recompute_total_points();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub items: Vec<ModuleItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Page,
    Reading,
    Discussion,
    Assignment,
    Quiz,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemType::Page => "page",
            ItemType::Reading => "reading",
            ItemType::Discussion => "discussion",
            ItemType::Assignment => "assignment",
            ItemType::Quiz => "quiz",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Submitted,
    Graded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub content: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: ItemStatus,
    pub points_possible: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_details: Option<ReadingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_details: Option<QuizDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingDetails {
    pub source: String,
    pub pages: String,
    pub estimated_minutes: u32,
    pub reading_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDetails {
    pub time_limit_minutes: u32,
    pub allowed_attempts: u32,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub question_type: String,
    pub points: u32,
}

// --- 输入配置 ---

/// 讲师字段既可以是纯文本姓名，也可以是完整对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructorInput {
    Name(String),
    Full(Instructor),
}

impl From<InstructorInput> for Instructor {
    fn from(input: InstructorInput) -> Self {
        match input {
            InstructorInput::Name(name) => Instructor::from_name(&name),
            InstructorInput::Full(instructor) => instructor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseConfig {
    pub name: String,
    #[serde(default, alias = "code")]
    pub course_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<InstructorInput>,
    #[serde(default)]
    pub term: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub total_points: Option<u32>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub credits: Option<u32>,
    /// 显式指定的模块数量；缺省时由学期长度推导
    #[serde(default, alias = "unitCount")]
    pub module_count: Option<i64>,
}

impl CourseConfig {
    pub fn new(name: &str, department: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            course_code: None,
            description: None,
            instructor: None,
            term: None,
            start_date,
            end_date,
            total_points: None,
            department: Some(department.to_string()),
            credits: None,
            module_count: None,
        }
    }
}

/// 文本解析结果：每个字段都可能缺失，由调用方补全默认值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCourseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_count: Option<i64>,
}

/// 补全缺失字段时使用的默认值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDefaults {
    pub department: String,
    pub term_weeks: u32,
    pub credits: u32,
}

impl Default for CourseDefaults {
    fn default() -> Self {
        Self {
            department: constants::DEFAULT_DEPARTMENT.to_string(),
            term_weeks: constants::DEFAULT_TERM_WEEKS,
            credits: constants::DEFAULT_CREDITS,
        }
    }
}
