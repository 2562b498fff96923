// src/models/catalog.rs

use serde::Serialize;

// --- 院系配置 (静态、只读) ---

/// 每个模块内各类条目的数量。条目形状是固定的槽位 (1 页面、2 阅读、
/// 1 讨论、1 作业、1 测验)，此处数量决定启用哪些槽位，超出部分被截断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyPattern {
    pub pages: u8,
    pub readings: u8,
    pub discussions: u8,
    pub assignments: u8,
    pub quizzes: u8,
}

impl WeeklyPattern {
    pub const STANDARD: WeeklyPattern = WeeklyPattern {
        pages: 1,
        readings: 2,
        discussions: 1,
        assignments: 1,
        quizzes: 1,
    };
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DepartmentConfig {
    pub name: &'static str,
    pub code_prefix: &'static str,
    pub reading_types: &'static [&'static str],
    pub assignment_types: &'static [&'static str],
    pub discussion_topics: &'static [&'static str],
    pub weekly_pattern: WeeklyPattern,
}

impl DepartmentConfig {
    /// 按模块序号 (1 起) 循环取词表中的条目
    pub fn reading_type(&self, module_number: u32, slot: usize) -> &'static str {
        cycle(self.reading_types, (module_number as usize).saturating_sub(1) + slot)
    }

    pub fn assignment_type(&self, module_number: u32) -> &'static str {
        cycle(self.assignment_types, (module_number as usize).saturating_sub(1))
    }

    pub fn discussion_topic(&self, module_number: u32) -> &'static str {
        cycle(self.discussion_topics, (module_number as usize).saturating_sub(1))
    }
}

fn cycle(words: &'static [&'static str], index: usize) -> &'static str {
    if words.is_empty() {
        return "";
    }
    words[index % words.len()]
}

/// 单个模块的主题：标题 + 概述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub title: String,
    pub overview: String,
}

impl Topic {
    pub fn new(title: &str, overview: &str) -> Self {
        Self {
            title: title.to_string(),
            overview: overview.to_string(),
        }
    }
}
