use serde::{Deserialize, Serialize};

/// 应用配置结构体
///
/// 所有字段均带默认值：作为库嵌入时无配置文件也可直接使用。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub argon2: Argon2Config,
    pub admin: AdminConfig,
    pub smtp: SmtpConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "Classwork Tracker".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "school.db".to_string(),
            pool_size: 8,
            timeout: 10,
        }
    }
}

/// 会话令牌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(skip_serializing)] // 不序列化到JSON响应中
    pub secret: String,
    pub token_expiry_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "insecure-dev-secret".to_string(),
            token_expiry_days: 30,
        }
    }
}

/// Argon2 参数配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// 管理员配置
///
/// secret 为空时拒绝一切管理操作。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    #[serde(skip_serializing)]
    pub secret: String,
}

/// SMTP 邮件通知配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub enabled: bool,
    pub relay: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub from_name: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            relay: "smtp.gmail.com".to_string(),
            username: String::new(),
            password: String::new(),
            from_name: "Classwork Tracker".to_string(),
        }
    }
}
