use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 所属班级ID
    pub class_id: i64,
    // 显示名（同一班级内唯一）
    pub name: String,
    // 通知邮箱（可选）
    pub email: Option<String>,
    // 首次加入时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
