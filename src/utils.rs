// src/utils.rs

use crate::constants;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static ILLEGAL_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%d %B %Y"];
const NAME_TITLES: &[&str] = &["dr", "prof", "professor", "mr", "mrs", "ms", "mx"];

/// 依次尝试常见日期格式，全部失败时返回 None
pub fn parse_flexible_date(text: &str) -> Option<NaiveDate> {
    let cleaned = text
        .trim()
        .trim_end_matches([',', ';'])
        .replace('.', "")
        .replace("Sept ", "Sep ");
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
}

/// "Dr. Ada Lovelace" -> "ada.lovelace@university.edu"
pub fn derive_email(name: &str) -> String {
    let parts: Vec<String> = name
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty() && !NAME_TITLES.contains(&w.as_str()))
        .collect();
    if parts.is_empty() {
        return constants::DEFAULT_INSTRUCTOR_EMAIL.to_string();
    }
    format!("{}@university.edu", parts.join("."))
}

/// 将课程代码等文本转换为安全的文件名
pub fn sanitize_filename(name: &str) -> String {
    let name = ILLEGAL_CHARS_RE.replace_all(name.trim(), " ");
    let name = WHITESPACE_RE.replace_all(&name, "_");
    let name = name.trim_matches(|c: char| c == '.' || c == '_');
    if name.is_empty() {
        return "course".to_string();
    }
    safe_truncate_utf8(name, constants::MAX_FILENAME_BYTES).to_string()
}

fn safe_truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut i = max_bytes;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    &s[..i]
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 { text.to_string() } else { format!("{}...", &text[..end_pos]) }
}
