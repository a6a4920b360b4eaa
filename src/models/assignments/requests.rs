use serde::Deserialize;

// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<chrono::NaiveDate>,
    // 是否向留有邮箱的学生发送通知（尽力而为，失败不影响创建结果）
    #[serde(default)]
    pub notify: bool,
}
