use serde::Serialize;

use super::entities::SubmissionStatus;
use crate::models::students::entities::Student;

// 教师视角的名册条目：班级内每个学生对某作业的完成状态
#[derive(Debug, Clone, Serialize)]
pub struct StudentSubmissionRow {
    #[serde(flatten)]
    pub student: Student,
    pub status: SubmissionStatus,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}
