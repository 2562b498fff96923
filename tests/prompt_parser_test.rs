// tests/prompt_parser_test.rs

use chrono::NaiveDate;
use lms_course_gen::{
    config::AppConfig,
    generator,
    models::{InstructorInput, PartialCourseConfig},
    prompt::parse_course_prompt,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_name_code_instructor_prompt() {
    let parsed = parse_course_prompt("Name: Intro to X\nCode: XYZ100\nInstructor: Dr. A");
    assert_eq!(parsed.name.as_deref(), Some("Intro to X"));
    assert_eq!(parsed.course_code.as_deref(), Some("XYZ100"));
    assert_eq!(parsed.instructor.as_deref(), Some("Dr. A"));
    assert_eq!(parsed.description, None);
    assert_eq!(parsed.department, None);
    assert_eq!(parsed.term, None);
    assert_eq!(parsed.start_date, None);
    assert_eq!(parsed.end_date, None);
    assert_eq!(parsed.module_count, None);

    // 缺失字段不会出现在序列化结果中
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "Intro to X", "courseCode": "XYZ100", "instructor": "Dr. A"})
    );
}

#[test]
fn test_corpus_extraction() {
    let empty = PartialCourseConfig::default();
    let corpus = [
        ("", empty.clone()),
        ("\n\n\n", empty.clone()),
        (":::", empty.clone()),
        ("Name:", empty.clone()),
        ("Code: \nInstructor:   ", empty.clone()),
        ("Dates: whenever - later", empty.clone()),
        ("Units: -4", empty.clone()),
        ("Modules: 0", empty.clone()),
        (
            "這是一段沒有任何欄位的文字。",
            PartialCourseConfig {
                name: Some("這是一段沒有任何欄位的文字。".into()),
                ..Default::default()
            },
        ),
        (
            "Course: Statistics\nDepartment: Mathematics\nSemester: Fall 2025",
            PartialCourseConfig {
                name: Some("Statistics".into()),
                department: Some("Mathematics".into()),
                term: Some("Fall 2025".into()),
                ..Default::default()
            },
        ),
        (
            "Title: Linear Algebra\nModules: 6\nStart: 2025-08-25",
            PartialCourseConfig {
                name: Some("Linear Algebra".into()),
                start_date: Some(date(2025, 8, 25)),
                module_count: Some(6),
                ..Default::default()
            },
        ),
    ];
    for (text, expected) in corpus {
        assert_eq!(parse_course_prompt(text), expected, "输入: {:?}", text);
    }
}

#[test]
fn test_non_positive_units_fall_back_to_term_length() {
    let config = AppConfig::default();
    for text in [
        "Name: Calculus I\nDepartment: Mathematics\nUnits: 0",
        "Name: Calculus I\nDepartment: Mathematics\nUnits: -4",
    ] {
        let base = parse_course_prompt(text).into_config(&config.course_defaults, date(2025, 1, 13));
        assert_eq!(base.module_count, None);

        let course = generator::generate_course(&base, &config.generation_options()).unwrap();
        assert!((4..=8).contains(&course.modules.len()));
        assert_eq!(course.total_points, course.item_points_sum());
    }
}

#[test]
fn test_bulleted_labels_and_case_insensitivity() {
    let text = "- COURSE TITLE: Music Theory I\n* dept: Music\n• Start: March 3, 2025\n- End: 2025-06-13";
    let parsed = parse_course_prompt(text);
    assert_eq!(parsed.name.as_deref(), Some("Music Theory I"));
    assert_eq!(parsed.department.as_deref(), Some("Music"));
    assert_eq!(parsed.start_date, Some(date(2025, 3, 3)));
    assert_eq!(parsed.end_date, Some(date(2025, 6, 13)));
}

#[test]
fn test_prompt_feeds_generator() {
    let text = "Course Name: Calculus I\nDepartment: Mathematics\nInstructor: Prof. Ada Lovelace\n\
                Dates: 2025-01-13 to 2025-05-02";
    let config = AppConfig::default();
    let base = parse_course_prompt(text).into_config(&config.course_defaults, date(2030, 1, 1));
    assert_eq!(
        base.instructor,
        Some(InstructorInput::Name("Prof. Ada Lovelace".into()))
    );

    let course = generator::generate_course(&base, &config.generation_options()).unwrap();
    assert_eq!(course.modules.len(), 8);
    assert_eq!(course.modules[0].name, "Module 1: Limits and Continuity");
    assert_eq!(course.instructor.email, "ada.lovelace@university.edu");
}
