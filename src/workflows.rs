// src/workflows.rs

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{AppError, AppResult},
    generator::{self, catalog, seed_historical_completion},
    models::{Course, CourseConfig, InstructorInput, PartialCourseConfig},
    prompt, store::CourseStore, symbols, ui, utils,
};
use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use colored::*;
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// 列出内置目录 (--catalog)
pub(crate) fn run_catalog() -> AppResult<()> {
    let entries: Vec<(&str, Vec<&str>)> = catalog::departments()
        .iter()
        .map(|d| (d.name, catalog::courses_for(d.name)))
        .collect();
    ui::print_catalog(&entries);
    Ok(())
}

/// 读取 JSON 配置文件 (--config)，文件内容可以是单个对象或对象数组
pub(crate) fn run_config_file(path: &Path, args: &Cli, config: &AppConfig) -> AppResult<()> {
    let bases = load_course_configs(path)?;
    if bases.is_empty() {
        ui::warn(&format!("配置文件 '{}' 中没有课程。", path.display()));
        return Ok(());
    }
    info!("从 '{}' 读取到 {} 个课程配置", path.display(), bases.len());

    let options = config.generation_options();
    let courses = if bases.len() == 1 {
        vec![generator::generate_course(&bases[0], &options)?]
    } else {
        let pbar = ui::new_tasks_progress_bar(bases.len() as u64, "生成");
        let mut courses = Vec::with_capacity(bases.len());
        for base in &bases {
            pbar.set_message(utils::truncate_text(&base.name, 40));
            match generator::generate_course(base, &options) {
                Ok(course) => courses.push(course),
                Err(e) => {
                    pbar.finish_and_clear();
                    return Err(e);
                }
            }
            pbar.inc(1);
        }
        pbar.finish_and_clear();
        if !args.json {
            ui::info(&format!("已生成 {} 个课程", courses.len()));
        }
        courses
    };

    finish(courses, args, config)
}

pub(crate) fn load_course_configs(path: &Path) -> AppResult<Vec<CourseConfig>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取课程配置文件 '{}' 失败", path.display()))?;
    let value: Value = serde_json::from_str(&content)?;
    let bases = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<CourseConfig>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(bases)
}

/// 从自由文本描述生成课程 (--prompt-file)
pub(crate) fn run_prompt_file(path: &Path, args: &Cli, config: &AppConfig) -> AppResult<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("读取提示文件 '{}' 失败", path.display()))?;
    let parsed = prompt::parse_course_prompt(&text);
    if parsed.name.is_none() {
        ui::warn("未能从文本中识别课程名称，将使用默认名称。");
    }
    if !args.json {
        print_parsed_summary(&parsed);
    }
    let base = parsed.into_config(&config.course_defaults, Local::now().date_naive());
    debug!("文本解析后的课程配置: {:?}", base);

    let course = generator::generate_course(&base, &config.generation_options())?;
    finish(vec![course], args, config)
}

fn print_parsed_summary(parsed: &PartialCourseConfig) {
    let show = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    let lines = [
        format!("名称: {}", show(parsed.name.clone())),
        format!("代码: {}", show(parsed.course_code.clone())),
        format!("讲师: {}", show(parsed.instructor.clone())),
        format!("院系: {}", show(parsed.department.clone())),
        format!("开始: {}", show(parsed.start_date.map(|d| d.to_string()))),
        format!("结束: {}", show(parsed.end_date.map(|d| d.to_string()))),
        format!("模块数: {}", show(parsed.module_count.map(|n| n.to_string()))),
    ];
    let content: Vec<&str> = lines.iter().map(String::as_str).collect();
    ui::box_message("文本解析结果", &content, |s| s.cyan());
}

/// 直接由命令行参数生成课程 (--name)
pub(crate) fn run_flags(name: &str, args: &Cli, config: &AppConfig) -> AppResult<()> {
    let base = course_config_from_flags(name, args, config, Local::now().date_naive())?;
    let course = generator::generate_course(&base, &config.generation_options())?;
    finish(vec![course], args, config)
}

pub(crate) fn course_config_from_flags(
    name: &str,
    args: &Cli,
    config: &AppConfig,
    today: NaiveDate,
) -> AppResult<CourseConfig> {
    let defaults = &config.course_defaults;
    let start_date = match args.start.as_deref() {
        Some(text) => parse_date_arg("--start", text)?,
        None => today,
    };
    let end_date = match args.end.as_deref() {
        Some(text) => parse_date_arg("--end", text)?,
        None => start_date + Duration::weeks(i64::from(defaults.term_weeks)),
    };
    if end_date < start_date {
        warn!("结课日期 {} 早于开课日期 {}", end_date, start_date);
    }
    let department = args
        .department
        .clone()
        .or_else(|| {
            args.code
                .as_deref()
                .and_then(catalog::department_for_code)
                .map(|d| d.name.to_string())
        })
        .unwrap_or_else(|| defaults.department.clone());

    let mut base = CourseConfig::new(name, &department, start_date, end_date);
    base.course_code = args.code.clone();
    base.instructor = args.instructor.clone().map(InstructorInput::Name);
    base.total_points = args.total_points;
    base.credits = Some(defaults.credits);
    base.module_count = args.modules;
    Ok(base)
}

fn parse_date_arg(flag: &str, text: &str) -> AppResult<NaiveDate> {
    utils::parse_flexible_date(text)
        .ok_or_else(|| AppError::UserInputError(format!("{} 的日期 '{}' 无法识别。", flag, text)))
}

/// 生成之后的公共流程：可选的历史数据填充 -> 存入仓库 -> 输出
fn finish(courses: Vec<Course>, args: &Cli, config: &AppConfig) -> AppResult<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut store = CourseStore::new();

    for course in courses {
        let course = if config.seed_history > 0 {
            seed_historical_completion(&course, config.seed_history as usize, &mut rng)
        } else {
            course
        };
        store.add_course(course)?;
    }

    let json = render_json(store.get_courses(), config.pretty_json)?;
    if args.json {
        println!("{}", json);
    } else {
        for course in store.get_courses() {
            ui::print_course_outline(course);
        }
    }

    if let Some(output) = &args.output {
        let output = resolve_output_path(output, store.get_courses());
        write_atomically(&output, &json)?;
        let message = format!("已写入 {} 个课程到 '{}'", store.len(), output.display());
        info!("{}", message);
        if args.json {
            eprintln!("{} {}", *symbols::OK, message.green());
        } else {
            ui::success(&message);
        }
    }
    Ok(())
}

/// 输出路径是已存在的目录时，按课程代码生成文件名
fn resolve_output_path(output: &Path, courses: &[Course]) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let stem = match courses {
        [course] => utils::sanitize_filename(&course.code),
        _ => "courses".to_string(),
    };
    output.join(format!("{}.json", stem))
}

/// 单个课程输出为对象，多个课程输出为数组
pub(crate) fn render_json(courses: &[Course], pretty: bool) -> AppResult<String> {
    let json = match (courses, pretty) {
        ([course], true) => serde_json::to_string_pretty(course)?,
        ([course], false) => serde_json::to_string(course)?,
        (all, true) => serde_json::to_string_pretty(all)?,
        (all, false) => serde_json::to_string(all)?,
    };
    Ok(json)
}

/// 先写入同目录下的临时文件再重命名，避免留下写了一半的输出
fn write_atomically(path: &Path, content: &str) -> AppResult<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;
    let mut temp = tempfile::NamedTempFile::new_in(&dir)?;
    temp.write_all(content.as_bytes())?;
    temp.persist(path)?;
    Ok(())
}
