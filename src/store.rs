// src/store.rs
//
// 内存中的课程仓库，充当演示用的 "数据库"。由调用方显式持有并传递，
// 不存在全局单例。

use crate::{
    error::{AppError, AppResult},
    models::Course,
};
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCourseResult {
    pub success: bool,
    pub course: Course,
}

#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
    next_id: u64,
}

impl CourseStore {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            next_id: 1,
        }
    }

    /// 未设置 ID 的课程会被分配下一个可用 ID，其余字段原样保存
    pub fn add_course(&mut self, mut course: Course) -> AppResult<AddCourseResult> {
        validate(&course)?;
        let id = match course.id {
            Some(id) => {
                if self.courses.iter().any(|c| c.id == Some(id)) {
                    return Err(AppError::InvalidCourse(format!("课程 ID {} 已存在", id)));
                }
                id
            }
            None => self.allocate_id()?,
        };
        self.next_id = self.next_id.max(id.saturating_add(1));
        course.id = Some(id);
        info!("课程 '{}' 已存入仓库, ID: {}", course.name, id);
        self.courses.push(course.clone());
        Ok(AddCourseResult {
            success: true,
            course,
        })
    }

    pub fn get_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get_course(&self, id: u64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == Some(id))
    }

    /// 整体替换同 ID 的课程，并重新计算总分
    pub fn replace_course(&mut self, mut course: Course) -> AppResult<()> {
        validate(&course)?;
        let id = course
            .id
            .ok_or_else(|| AppError::InvalidCourse("替换的课程缺少 ID".to_string()))?;
        let slot = self
            .courses
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(AppError::CourseNotFound(id))?;
        course.recompute_total_points();
        debug!("替换课程 ID {}", id);
        *slot = course;
        Ok(())
    }

    pub fn remove_course(&mut self, id: u64) -> AppResult<Course> {
        let index = self
            .courses
            .iter()
            .position(|c| c.id == Some(id))
            .ok_or(AppError::CourseNotFound(id))?;
        debug!("删除课程 ID {}", id);
        Ok(self.courses.remove(index))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn allocate_id(&mut self) -> AppResult<u64> {
        let id = self.next_id.max(1);
        if self.courses.iter().any(|c| c.id == Some(id)) {
            return Err(AppError::InvalidCourse("课程 ID 已用尽".to_string()));
        }
        self.next_id = id.saturating_add(1);
        Ok(id)
    }
}

fn validate(course: &Course) -> AppResult<()> {
    if course.name.trim().is_empty() {
        return Err(AppError::InvalidCourse("课程名称不能为空".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerationOptions, generate_course};
    use crate::models::CourseConfig;
    use chrono::NaiveDate;

    fn course(name: &str) -> Course {
        let base = CourseConfig::new(
            name,
            "History",
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
        );
        generate_course(&base, &GenerationOptions::default()).unwrap()
    }

    #[test]
    fn test_add_assigns_sequential_ids_and_keeps_content() {
        let mut store = CourseStore::new();
        let original = course("World History");
        let first = store.add_course(original.clone()).unwrap();
        let second = store.add_course(course("US History")).unwrap();

        assert!(first.success);
        assert_eq!(first.course.id, Some(1));
        assert_eq!(second.course.id, Some(2));
        assert_eq!(
            Course {
                id: None,
                ..first.course.clone()
            },
            original
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_explicit_id_is_respected() {
        let mut store = CourseStore::new();
        let mut c = course("World History");
        c.id = Some(10);
        store.add_course(c.clone()).unwrap();
        assert!(store.add_course(c).is_err());
        assert_eq!(store.add_course(course("Next")).unwrap().course.id, Some(11));
    }

    #[test]
    fn test_max_explicit_id_does_not_overflow() {
        let mut store = CourseStore::new();
        let mut c = course("World History");
        c.id = Some(u64::MAX);
        assert_eq!(store.add_course(c).unwrap().course.id, Some(u64::MAX));
        assert!(matches!(
            store.add_course(course("Next")),
            Err(AppError::InvalidCourse(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut store = CourseStore::new();
        let mut c = course("World History");
        c.name = "  ".into();
        assert!(matches!(store.add_course(c), Err(AppError::InvalidCourse(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_recomputes_total_points() {
        let mut store = CourseStore::new();
        let mut stored = store.add_course(course("World History")).unwrap().course;
        stored.modules.truncate(2);
        store.replace_course(stored.clone()).unwrap();

        let replaced = store.get_course(1).unwrap();
        assert_eq!(replaced.modules.len(), 2);
        assert_eq!(replaced.total_points, replaced.item_points_sum());
        assert_ne!(replaced.total_points, stored.total_points);
    }

    #[test]
    fn test_remove_and_missing_ids() {
        let mut store = CourseStore::new();
        store.add_course(course("World History")).unwrap();
        assert_eq!(store.remove_course(1).unwrap().name, "World History");
        assert!(matches!(store.remove_course(1), Err(AppError::CourseNotFound(1))));
        assert!(store.get_course(1).is_none());
    }
}
