// src/generator/assembler.rs

use super::{
    catalog,
    points::{ItemPoints, PointPolicy},
    schedule::{self, ItemOffsets},
};
use crate::{
    constants,
    error::{AppError, AppResult},
    models::{
        catalog::{DepartmentConfig, Topic},
        Course, CourseConfig, Instructor, ItemStatus, ItemType, Module, ModuleItem, QuizDetails,
        QuizQuestion, ReadingDetails,
    },
};
use chrono::{Datelike, NaiveDate};
use log::{debug, trace};

// 固定槽位编号，条目 ID = 模块序号 * 100 + 槽位
const SLOT_INTRO: u32 = 1;
const SLOT_READING1: u32 = 2;
const SLOT_DISCUSSION: u32 = 3;
const SLOT_READING2: u32 = 4;
const SLOT_ASSIGNMENT: u32 = 5;
const SLOT_QUIZ: u32 = 6;

const QUESTION_TYPES: [&str; 3] = ["multiple_choice", "true_false", "short_answer"];

/// 构建单个模块。`number` 从 1 开始。
pub fn build_module(
    number: u32,
    topic: &Topic,
    dept: &DepartmentConfig,
    module_start: NaiveDate,
    points: &ItemPoints,
) -> Module {
    let offsets = schedule::derive_item_offsets(module_start);
    let pattern = dept.weekly_pattern;
    let mut items = Vec::with_capacity(6);

    if pattern.pages > 0 {
        items.push(intro_page(number, topic, &offsets, points.page));
    }
    if pattern.readings > 0 {
        items.push(reading(number, topic, dept, 0, offsets.reading1, points.reading));
    }
    if pattern.discussions > 0 {
        items.push(discussion(number, topic, dept, offsets.discussion, points.discussion));
    }
    if pattern.readings > 1 {
        items.push(reading(number, topic, dept, 1, offsets.reading2, points.reading));
    }
    if pattern.assignments > 0 {
        items.push(assignment(number, topic, dept, offsets.assignment, points.assignment));
    }
    if pattern.quizzes > 0 {
        items.push(quiz(number, topic, offsets.quiz, points.quiz));
    }
    trace!("模块 {} 生成 {} 个条目", number, items.len());

    Module {
        id: number,
        name: format!("Module {}: {}", number, topic.title),
        description: topic.overview.clone(),
        due_date: offsets.window_end(),
        completed: false,
        items,
    }
}

/// 由基础配置、院系配置和主题列表组装完整课程。模块数量等于主题数量。
/// 不修改输入，返回新的 `Course`。
pub fn assemble_course(
    base: &CourseConfig,
    dept: &DepartmentConfig,
    topics: &[Topic],
    policy: PointPolicy,
) -> AppResult<Course> {
    if topics.is_empty() {
        return Err(AppError::InvalidModuleCount(0));
    }
    let module_count = u32::try_from(topics.len())
        .map_err(|_| AppError::InvalidModuleCount(topics.len() as i64))?;
    let starts = schedule::derive_module_dates(base.start_date, base.end_date, module_count)?;

    let modules: Vec<Module> = topics
        .iter()
        .zip(starts)
        .enumerate()
        .map(|(i, (topic, start))| {
            let number = i as u32 + 1;
            let points = policy.points_for(number, module_count);
            build_module(number, topic, dept, start, &points)
        })
        .collect();

    let course = course_shell(base, dept, module_count).with_modules(modules);
    debug!(
        "课程 '{}' 组装完成: {} 个模块, 总分 {}",
        course.name,
        course.modules.len(),
        course.total_points
    );
    Ok(course)
}

/// 课程的非模块字段，缺失项使用默认值
fn course_shell(base: &CourseConfig, dept: &DepartmentConfig, module_count: u32) -> Course {
    let department = base
        .department
        .as_deref()
        .map(catalog::normalize_department)
        .unwrap_or_else(|| dept.name.to_string());
    let description = base.description.clone().unwrap_or_else(|| {
        format!(
            "{} is a {} course organized into {} modules, running from {} to {}.",
            base.name,
            department,
            module_count,
            base.start_date.format("%B %-d, %Y"),
            base.end_date.format("%B %-d, %Y"),
        )
    });

    Course {
        id: None,
        name: base.name.clone(),
        code: base
            .course_code
            .clone()
            .unwrap_or_else(|| format!("{}101", dept.code_prefix)),
        description,
        instructor: base
            .instructor
            .clone()
            .map(Instructor::from)
            .unwrap_or_default(),
        term: base.term.clone().unwrap_or_else(|| term_for(base.start_date)),
        start_date: base.start_date,
        end_date: base.end_date,
        department,
        credits: base.credits.unwrap_or(constants::DEFAULT_CREDITS),
        total_points: 0,
        modules: Vec::new(),
    }
}

/// 按开始月份推断学期名，例如 "Spring 2025"
pub fn term_for(start: NaiveDate) -> String {
    let season = match start.month() {
        1..=5 => "Spring",
        6..=7 => "Summer",
        _ => "Fall",
    };
    format!("{} {}", season, start.year())
}

// --- 条目模板 ---

fn item(
    number: u32,
    slot: u32,
    item_type: ItemType,
    title: String,
    content: String,
    due_date: NaiveDate,
    points_possible: u32,
) -> ModuleItem {
    ModuleItem {
        id: number * 100 + slot,
        title,
        item_type,
        content,
        due_date,
        status: ItemStatus::NotStarted,
        points_possible,
        grade: None,
        reading_details: None,
        quiz_details: None,
    }
}

fn intro_page(number: u32, topic: &Topic, offsets: &ItemOffsets, points: u32) -> ModuleItem {
    let content = format!(
        "Welcome to Module {n}: {title}.\n\n{overview}\n\nThis module runs from {start} to {end}. \
         Work through the readings, join the discussion, and complete the assignment and quiz before the module closes.",
        n = number,
        title = topic.title,
        overview = topic.overview,
        start = offsets.intro.format("%B %-d"),
        end = offsets.window_end().format("%B %-d"),
    );
    item(
        number,
        SLOT_INTRO,
        ItemType::Page,
        format!("Module {} Overview: {}", number, topic.title),
        content,
        offsets.intro,
        points,
    )
}

fn reading(
    number: u32,
    topic: &Topic,
    dept: &DepartmentConfig,
    index: usize,
    due_date: NaiveDate,
    points: u32,
) -> ModuleItem {
    let reading_type = dept.reading_type(number, index);
    let (slot, title) = if index == 0 {
        (SLOT_READING1, format!("{}: {}", reading_type, topic.title))
    } else {
        (SLOT_READING2, format!("{}: {} in Depth", reading_type, topic.title))
    };
    let first_page = number.saturating_sub(1) * 40 + index as u32 * 20 + 1;
    let content = format!(
        "Read the assigned {} on {}. As you read, focus on the following: {}",
        reading_type.to_lowercase(),
        topic.title,
        topic.overview,
    );

    let mut reading = item(number, slot, ItemType::Reading, title, content, due_date, points);
    reading.reading_details = Some(ReadingDetails {
        source: format!("{} Course Reader", dept.name),
        pages: format!("{}-{}", first_page, first_page + 17),
        estimated_minutes: 45 + index as u32 * 15,
        reading_type: reading_type.to_string(),
    });
    reading
}

fn discussion(
    number: u32,
    topic: &Topic,
    dept: &DepartmentConfig,
    due_date: NaiveDate,
    points: u32,
) -> ModuleItem {
    let prompt = dept.discussion_topic(number);
    let content = format!(
        "Post a response of at least 250 words on {} as it relates to {}. \
         Then reply thoughtfully to at least two classmates before the due date.",
        prompt.to_lowercase(),
        topic.title,
    );
    item(
        number,
        SLOT_DISCUSSION,
        ItemType::Discussion,
        format!("Discussion: {} in {}", prompt, topic.title),
        content,
        due_date,
        points,
    )
}

fn assignment(
    number: u32,
    topic: &Topic,
    dept: &DepartmentConfig,
    due_date: NaiveDate,
    points: u32,
) -> ModuleItem {
    let kind = dept.assignment_type(number);
    let content = format!(
        "Complete the {} applying the ideas from {}. {} Submit your work by {} ({} points).",
        kind.to_lowercase(),
        topic.title,
        topic.overview,
        due_date.format("%B %-d, %Y"),
        points,
    );
    item(
        number,
        SLOT_ASSIGNMENT,
        ItemType::Assignment,
        format!("{}: {}", kind, topic.title),
        content,
        due_date,
        points,
    )
}

fn quiz(number: u32, topic: &Topic, due_date: NaiveDate, points: u32) -> ModuleItem {
    let content = format!(
        "This quiz checks your understanding of {}. You have {} attempts; the highest score counts.",
        topic.title,
        constants::quiz::ALLOWED_ATTEMPTS,
    );
    let mut quiz = item(
        number,
        SLOT_QUIZ,
        ItemType::Quiz,
        format!("Quiz {}: {}", number, topic.title),
        content,
        due_date,
        points,
    );
    quiz.quiz_details = Some(QuizDetails {
        time_limit_minutes: constants::quiz::BASE_TIME_LIMIT_MINUTES,
        allowed_attempts: constants::quiz::ALLOWED_ATTEMPTS,
        questions: quiz_questions(quiz.id, topic, points),
    });
    quiz
}

/// 题目分值之和等于测验总分，余数归入最后一题
fn quiz_questions(quiz_id: u32, topic: &Topic, points: u32) -> Vec<QuizQuestion> {
    let count = constants::quiz::QUESTIONS_PER_QUIZ;
    let per_question = points / count as u32;
    let remainder = points % count as u32;
    let prompts = [
        format!("Which statement best describes a key idea of {}?", topic.title),
        format!("True or false: {}", topic.overview),
        format!("Explain in your own words how {} connects to earlier modules.", topic.title),
        format!("Which example best illustrates {} in practice?", topic.title),
        format!("Identify a common mistake when working with {} and how to avoid it.", topic.title),
    ];

    prompts
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, prompt)| QuizQuestion {
            id: quiz_id * 10 + i as u32 + 1,
            prompt,
            question_type: QUESTION_TYPES[i % QUESTION_TYPES.len()].to_string(),
            points: if i + 1 == count {
                per_question + remainder
            } else {
                per_question
            },
        })
        .collect()
}
