// src/generator/seeding.rs
//
// 演示数据填充：把前 N 个模块标记为已完成，并给计分条目随机打分。
// 与课程生成完全分离，随机源由调用方传入，固定种子即可复现输出。

use crate::{
    constants::seeding::{MAX_GRADE_PERCENT, MIN_GRADE_PERCENT},
    models::{Course, ItemStatus},
};
use log::debug;
use rand::Rng;

pub fn seed_historical_completion<R: Rng + ?Sized>(
    course: &Course,
    completed_modules: usize,
    rng: &mut R,
) -> Course {
    let mut seeded = course.clone();
    let completed = completed_modules.min(seeded.modules.len());

    for module in seeded.modules.iter_mut().take(completed) {
        module.completed = true;
        for item in module.items.iter_mut() {
            if item.points_possible == 0 {
                item.status = ItemStatus::Submitted;
                continue;
            }
            let percent = rng.random_range(MIN_GRADE_PERCENT..=MAX_GRADE_PERCENT);
            item.grade = Some(scaled_grade(item.points_possible, percent));
            item.status = ItemStatus::Graded;
        }
    }

    if let Some(current) = seeded.modules.get_mut(completed)
        && let Some(first) = current.items.first_mut()
    {
        first.status = ItemStatus::InProgress;
    }

    debug!("课程 '{}' 已填充 {} 个已完成模块", seeded.name, completed);
    seeded
}

/// 在 u64 中计算，结果不超过 `points`，可以安全转回 u32
fn scaled_grade(points: u32, percent: u32) -> u32 {
    let grade = u64::from(points) * u64::from(percent) / 100;
    u32::try_from(grade).unwrap_or(points)
}
