//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_hwtracker_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum HWTrackerError {
            $($variant(String),)*
        }

        impl HWTrackerError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(HWTrackerError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(HWTrackerError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(HWTrackerError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl HWTrackerError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        HWTrackerError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_hwtracker_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    AlreadyExists("E006", "Resource Already Exists"),
    InvalidCredentials("E007", "Invalid Credentials"),
    Unauthorized("E008", "Unauthorized"),
    Notification("E009", "Notification Error"),
    Serialization("E010", "Serialization Error"),
    DateParse("E011", "Date Parse Error"),
    SessionToken("E012", "Session Token Error"),
}

impl HWTrackerError {
    /// 是否为唯一约束冲突（调用方可据此重试或视为幂等成功）
    pub fn is_already_exists(&self) -> bool {
        matches!(self, HWTrackerError::AlreadyExists(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for HWTrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for HWTrackerError {}

// 为常见的错误类型实现 From trait
// 唯一约束冲突统一映射为 AlreadyExists，其余数据库错误原样上抛
impl From<sea_orm::DbErr> for HWTrackerError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                HWTrackerError::AlreadyExists(msg)
            }
            _ => HWTrackerError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for HWTrackerError {
    fn from(err: serde_json::Error) -> Self {
        HWTrackerError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for HWTrackerError {
    fn from(err: chrono::ParseError) -> Self {
        HWTrackerError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HWTrackerError>;
