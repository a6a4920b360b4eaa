use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 作业ID
    pub id: i64,
    // 所属班级ID
    pub class_id: i64,
    // 标题（必填）
    pub title: String,
    // 描述（默认空串）
    pub description: String,
    // 截止日期（纯日历日期，无时间部分）
    pub due_date: Option<chrono::NaiveDate>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
