pub mod list;
pub mod set_status;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    responses::StudentSubmissionRow,
};
use crate::storage::Storage;

// 提交状态变更的操作者
//
// 策略：学生只能改自己的记录；教师可以代任一本班学生切换。
// 两条路径共用同一个 upsert，终态一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionActor {
    Student(i64),
    Teacher(i64),
}

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 切换提交状态（标记完成 / 撤销）
    pub async fn set_status(
        &self,
        actor: SubmissionActor,
        assignment_id: i64,
        student_id: i64,
        status: SubmissionStatus,
    ) -> Result<Submission> {
        set_status::handle_set_status(self, actor, assignment_id, student_id, status).await
    }

    // 教师查看某作业的班级完成名册
    pub async fn list_for_assignment(
        &self,
        teacher_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<StudentSubmissionRow>> {
        list::handle_list_for_assignment(self, teacher_id, assignment_id).await
    }
}
