use serde::Serialize;

use super::entities::Assignment;
use crate::models::submissions::entities::SubmissionStatus;

// 学生视角的作业条目：作业信息 + 本人提交状态
// 无提交记录时状态视为 pending
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithStatus {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub status: SubmissionStatus,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}
