use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 所属教师ID
    pub teacher_id: i64,
    // 班级名称
    pub name: String,
    // 加入码（全局唯一，学生凭此自助加入）
    pub access_code: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
