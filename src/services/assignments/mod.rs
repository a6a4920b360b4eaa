pub mod create;
pub mod delete;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment, requests::CreateAssignmentRequest, responses::AssignmentWithStatus,
};
use crate::services::notify::Notifier;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        Self { storage, notifier }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    // 布置作业（可选向留有邮箱的学生发送通知）
    pub async fn create(
        &self,
        teacher_id: i64,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::handle_create(self, teacher_id, request).await
    }

    // 删除作业（级联删除其提交）
    pub async fn delete(&self, teacher_id: i64, assignment_id: i64) -> Result<bool> {
        delete::handle_delete(self, teacher_id, assignment_id).await
    }

    // 教师查看班级作业列表
    pub async fn list_by_class(&self, teacher_id: i64, class_id: i64) -> Result<Vec<Assignment>> {
        list::handle_list_by_class(self, teacher_id, class_id).await
    }

    // 学生查看班级作业列表 + 本人完成状态
    pub async fn list_for_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<AssignmentWithStatus>> {
        list::handle_list_for_student(self, class_id, student_id).await
    }
}
