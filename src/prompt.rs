// src/prompt.rs
//
// 从自由文本中尽力提取课程配置。解析是启发式的：任何字段提取失败都只会
// 让该字段保持缺失，从不报错，默认值由调用方在下游补全。

use crate::{
    constants,
    generator::catalog,
    models::{CourseConfig, CourseDefaults, InstructorInput, PartialCourseConfig},
    utils,
};
use chrono::{Duration, NaiveDate};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

static LABELED_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*•]\s*)?(course\s+name|course\s+title|course\s+code|course|name|title|code|instructor|professor|teacher|description|department|dept|term|semester|start\s+date|start|end\s+date|end|dates|date\s+range|units|modules|unit\s+count|number\s+of\s+(?:units|modules))\s*[:：]\s*(.*?)\s*$",
    )
    .unwrap()
});
static DATE_RANGE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:-|–|—|to|through|until)\s+").unwrap());
static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,4})\s?(\d{3}[A-Z]?)\b").unwrap());
static UNIT_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})[\s-]*(?:units?|modules?)\b").unwrap());
static TAUGHT_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:taught\s+by)\s+((?:Dr\.|Prof\.|Professor)?\s*[A-Z][A-Za-z'-]*(?:\s+[A-Z][A-Za-z'-]*)*)")
        .unwrap()
});
static DATE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{4}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+\d{1,2},?\s+\d{4})\b",
    )
    .unwrap()
});

enum Field {
    Name,
    Code,
    Instructor,
    Description,
    Department,
    Term,
    Start,
    End,
    Dates,
    Units,
}

fn field_for_label(label: &str) -> Option<Field> {
    let normalized = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let field = match normalized.as_str() {
        "course name" | "course title" | "course" | "name" | "title" => Field::Name,
        "course code" | "code" => Field::Code,
        "instructor" | "professor" | "teacher" => Field::Instructor,
        "description" => Field::Description,
        "department" | "dept" => Field::Department,
        "term" | "semester" => Field::Term,
        "start date" | "start" => Field::Start,
        "end date" | "end" => Field::End,
        "dates" | "date range" => Field::Dates,
        "units" | "modules" | "unit count" | "number of units" | "number of modules" => Field::Units,
        _ => return None,
    };
    Some(field)
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

/// 只接受正整数；0 或负数视为无法识别，由学期长度推导
fn parse_count(value: &str) -> Option<i64> {
    value
        .split(|c: char| !c.is_ascii_digit() && c != '-')
        .find(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n > 0)
}

fn parse_date_range(value: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let mut parts = DATE_RANGE_SPLIT_RE.splitn(value, 2);
    let start = parts.next().and_then(utils::parse_flexible_date);
    let end = parts.next().and_then(utils::parse_flexible_date);
    (start, end)
}

pub fn parse_course_prompt(text: &str) -> PartialCourseConfig {
    let mut parsed = PartialCourseConfig::default();

    for line in text.lines() {
        let Some(caps) = LABELED_LINE_RE.captures(line) else {
            continue;
        };
        let (Some(label), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let value = value.as_str();
        let Some(field) = field_for_label(label.as_str()) else {
            continue;
        };
        trace!("提示行 '{}' -> '{}'", label.as_str(), value);

        match field {
            Field::Name => set_once(&mut parsed.name, value),
            Field::Code => set_once(&mut parsed.course_code, value),
            Field::Instructor => set_once(&mut parsed.instructor, value),
            Field::Description => set_once(&mut parsed.description, value),
            Field::Department => set_once(&mut parsed.department, value),
            Field::Term => set_once(&mut parsed.term, value),
            Field::Start => {
                parsed.start_date = parsed.start_date.or_else(|| utils::parse_flexible_date(value))
            }
            Field::End => {
                parsed.end_date = parsed.end_date.or_else(|| utils::parse_flexible_date(value))
            }
            Field::Dates => {
                let (start, end) = parse_date_range(value);
                parsed.start_date = parsed.start_date.or(start);
                parsed.end_date = parsed.end_date.or(end);
            }
            Field::Units => parsed.module_count = parsed.module_count.or_else(|| parse_count(value)),
        }
    }

    apply_prose_fallbacks(text, &mut parsed);
    debug!("提示解析结果: {:?}", parsed);
    parsed
}

/// 标签缺失时，从正文中做更宽松的匹配
fn apply_prose_fallbacks(text: &str, parsed: &mut PartialCourseConfig) {
    if parsed.name.is_none()
        && let Some(first) = text.lines().map(str::trim).find(|l| !l.is_empty())
        && !first.contains(':')
        && first.chars().count() <= 80
    {
        // 首行若本身就是课程代码+名称 (如 "CS 101 Intro"), 名称取代码之后的部分
        let name = COURSE_CODE_RE
            .find(first)
            .filter(|m| m.start() == 0)
            .map(|m| first[m.end()..].trim_start_matches([' ', '-', ':']).trim())
            .unwrap_or(first);
        if !name.is_empty() {
            parsed.name = Some(name.trim_end_matches('.').to_string());
        }
    }

    if parsed.course_code.is_none()
        && let Some(caps) = COURSE_CODE_RE.captures(text)
    {
        parsed.course_code = Some(format!("{}{}", &caps[1], &caps[2]));
    }

    if parsed.instructor.is_none()
        && let Some(caps) = TAUGHT_BY_RE.captures(text)
    {
        parsed.instructor = Some(caps[1].trim().to_string());
    }

    if parsed.module_count.is_none()
        && let Some(caps) = UNIT_COUNT_RE.captures(text)
    {
        parsed.module_count = parse_count(&caps[1]);
    }

    if parsed.start_date.is_none() && parsed.end_date.is_none() {
        let mut dates = DATE_TOKEN_RE
            .find_iter(text)
            .filter_map(|m| utils::parse_flexible_date(m.as_str()));
        parsed.start_date = dates.next();
        parsed.end_date = dates.next();
    }
}

impl PartialCourseConfig {
    /// 用默认值补全缺失字段。`today` 由调用方传入，保持解析与补全的确定性。
    pub fn into_config(self, defaults: &CourseDefaults, today: NaiveDate) -> CourseConfig {
        let department = self
            .department
            .or_else(|| {
                self.course_code
                    .as_deref()
                    .and_then(catalog::department_for_code)
                    .map(|d| d.name.to_string())
            })
            .unwrap_or_else(|| defaults.department.clone());
        let start_date = self.start_date.unwrap_or(today);
        let end_date = self
            .end_date
            .unwrap_or_else(|| start_date + Duration::weeks(i64::from(defaults.term_weeks)));

        CourseConfig {
            name: self
                .name
                .unwrap_or_else(|| constants::DEFAULT_COURSE_NAME.to_string()),
            course_code: self.course_code,
            description: self.description,
            instructor: self.instructor.map(InstructorInput::Name),
            term: self.term,
            start_date,
            end_date,
            total_points: None,
            department: Some(department),
            credits: Some(defaults.credits),
            module_count: self.module_count.filter(|n| *n > 0),
        }
    }
}
