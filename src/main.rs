// src/main.rs

use clap::{CommandFactory, FromArgMatches};
use colored::*;
use lms_course_gen::{cli::Cli, run_from_cli, symbols};
use std::{env, sync::Arc};

fn main() {
    // 为 Windows 终端启用 ANSI 颜色支持。
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }

    let bin_name = env::var("CARGO_BIN_NAME").unwrap_or_else(|_| "lms-course-gen".to_string());

    let after_help = format!(
        "示例:\n  # 查看内置院系与课程\n  {bin} --catalog\n\n  # 通过参数生成课程\n  {bin} --name \"Calculus I\" -d Mathematics --start 2025-01-13 --end 2025-05-02\n\n  # 从 JSON 配置批量生成并写入文件\n  {bin} --config courses.json -o out.json\n\n  # 从文本描述生成，并模拟前 3 个模块的成绩\n  {bin} --prompt-file course.txt --seed-history 3 --json",
        bin = bin_name
    );

    let cmd = Cli::command().after_help(after_help);
    let args = match Cli::from_arg_matches(&cmd.get_matches()) {
        Ok(args) => Arc::new(args),
        Err(e) => e.exit(),
    };

    if let Err(e) = run_from_cli(args) {
        log::error!("程序执行出错: {}", e);
        eprintln!("\n{} {}", *symbols::ERROR, format!("程序执行出错: {}", e).red());
        std::process::exit(1);
    }
}
