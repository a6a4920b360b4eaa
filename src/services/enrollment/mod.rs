pub mod join;
pub mod list;
pub mod remove;
pub mod update_profile;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{JoinClassRequest, UpdateStudentRequest},
    responses::JoinClassResponse,
};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 学生凭加入码加入班级（幂等：同名重复加入返回同一行）
    pub async fn join(&self, request: JoinClassRequest) -> Result<JoinClassResponse> {
        join::handle_join(self, request).await
    }

    // 学生资料更新（显示名 / 通知邮箱）
    pub async fn update_profile(
        &self,
        student_id: i64,
        request: UpdateStudentRequest,
    ) -> Result<Student> {
        update_profile::handle_update_profile(self, student_id, request).await
    }

    // 教师查看班级名册
    pub async fn list(&self, teacher_id: i64, class_id: i64) -> Result<Vec<Student>> {
        list::handle_list(self, teacher_id, class_id).await
    }

    // 教师将学生移出班级（级联删除其提交）
    pub async fn remove(&self, teacher_id: i64, student_id: i64) -> Result<bool> {
        remove::handle_remove(self, teacher_id, student_id).await
    }
}
