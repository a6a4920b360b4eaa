use tracing::info;

use super::AuthService;
use crate::errors::{HWTrackerError, Result};

pub async fn handle_delete_account(service: &AuthService, teacher_id: i64) -> Result<bool> {
    service
        .storage()
        .get_teacher_by_id(teacher_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("教师不存在: {teacher_id}")))?;

    // 级联删除其班级及下属学生、作业、提交
    let deleted = service.storage().delete_teacher(teacher_id).await?;
    if deleted {
        info!("Teacher {} account deleted", teacher_id);
    }
    Ok(deleted)
}
