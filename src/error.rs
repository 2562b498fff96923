// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("无法解析配置文件 '{path}': {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("临时文件持久化失败: {0}")]
    TempFilePersist(#[from] tempfile::PersistError),
    #[error("无效的模块数量: {0} (必须大于 0)")]
    InvalidModuleCount(i64),
    #[error("无效的课程: {0}")]
    InvalidCourse(String),
    #[error("未找到 ID 为 {0} 的课程")]
    CourseNotFound(u64),
    #[error("{0}")] // 只打印内部信息，不加任何前缀
    UserInputError(String),
    #[error("未知错误: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
