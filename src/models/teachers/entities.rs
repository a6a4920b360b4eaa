use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    // 教师ID
    pub id: i64,
    // 登录用户名（全局唯一，大小写敏感）
    pub username: String,
    // 密码哈希，绝不出现在序列化输出中
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
