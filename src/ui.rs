// src/ui.rs

use crate::{
    constants,
    models::{Course, ItemStatus, Module},
    symbols, utils,
};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(constants::UI_WIDTH));
    println!(" {}", title.cyan().bold());
    println!("{}", "═".repeat(constants::UI_WIDTH));
}

pub fn print_sub_header(title: &str) {
    println!("\n--- {} ---", title.bold());
}

pub fn box_message(title: &str, content: &[&str], color_func: fn(ColoredString) -> ColoredString) {
    println!("\n┌{}┐", "─".repeat(constants::UI_WIDTH - 2));
    println!("  {}", color_func(title.bold()));
    println!("├{}┤", "─".repeat(constants::UI_WIDTH - 2));
    for line in content {
        println!("  {}", line);
    }
    println!("└{}┘", "─".repeat(constants::UI_WIDTH - 2));
}

pub fn info(message: &str) {
    println!("{} {}", *symbols::INFO, message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", *symbols::WARN, message.yellow());
}

pub fn success(message: &str) {
    println!("{} {}", *symbols::OK, message.green());
}

/// 多课程生成时使用的进度条
pub fn new_tasks_progress_bar(len: u64, prefix: &str) -> ProgressBar {
    let pbar = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{prefix:7.bold.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}/{len:3} {wide_msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pbar.set_style(style);
    pbar.set_prefix(prefix.to_string());
    pbar
}

fn status_symbol(status: ItemStatus) -> &'static ColoredString {
    match status {
        ItemStatus::Graded | ItemStatus::Submitted => &*symbols::DONE,
        ItemStatus::InProgress => &*symbols::PROGRESS,
        ItemStatus::NotStarted => &*symbols::PENDING,
    }
}

fn module_summary(module: &Module) -> String {
    module
        .items
        .iter()
        .counts_by(|item| item.item_type)
        .into_iter()
        .sorted_by_key(|(item_type, _)| *item_type)
        .map(|(item_type, count)| format!("{} x{}", item_type, count))
        .join(", ")
}

pub fn print_course_outline(course: &Course) {
    let id = course.id.map_or_else(String::new, |id| format!(" #{}", id));
    print_header(&format!("{} {}{}", course.code, course.name, id));
    println!(
        "  {} | {} | {} ~ {} | {} 学分 | 总分 {}",
        course.department,
        course.term,
        course.start_date,
        course.end_date,
        course.credits,
        course.total_points
    );
    println!("  讲师: {} <{}>", course.instructor.name, course.instructor.email);

    let title_width = constants::TITLE_TRUNCATE_LENGTH - 20;
    for module in &course.modules {
        let marker = if module.completed { &*symbols::DONE } else { &*symbols::PENDING };
        print_sub_header(&format!(
            "{} 模块 {}: {} (截止 {})",
            marker,
            module.id,
            utils::truncate_text(&module.name, constants::TITLE_TRUNCATE_LENGTH),
            module.due_date
        ));
        println!("  {}", module_summary(module).dimmed());
        for item in &module.items {
            let grade = item
                .grade
                .map_or_else(String::new, |g| format!(" 得分 {}", g).green().to_string());
            println!(
                "  {} {:<10} {:<width$} {:>4} 分  {}{}",
                status_symbol(item.status),
                item.item_type.to_string(),
                utils::truncate_text(&item.title, title_width),
                item.points_possible,
                item.due_date,
                grade,
                width = title_width
            );
        }
    }
}

pub fn print_catalog(entries: &[(&str, Vec<&str>)]) {
    print_header("内置课程目录");
    for (department, courses) in entries {
        println!("  {}", department.bold());
        if courses.is_empty() {
            println!("    {}", "(仅使用通用主题)".dimmed());
        } else {
            println!("    {}", courses.iter().join(" | "));
        }
    }
}
