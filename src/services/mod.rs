//! 业务逻辑层
//!
//! 每个领域一个服务，动词一个文件。服务只依赖 Storage trait，
//! 由外部的展示层/路由层负责会话解析后调用。

pub mod admin;
pub mod assignments;
pub mod auth;
pub mod classes;
pub mod enrollment;
pub mod notify;
pub mod submissions;

pub use admin::AdminService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use enrollment::EnrollmentService;
pub use submissions::SubmissionService;

use std::sync::Arc;

use crate::errors::{HWTrackerError, Result};
use crate::models::classes::entities::Class;
use crate::storage::Storage;

/// 校验班级存在且归属指定教师
///
/// 教师侧的班级变更（重命名、换码、删除、布置作业等）统一走这里。
pub(crate) async fn require_class_owner(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    class_id: i64,
) -> Result<Class> {
    let class = storage
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("班级不存在: {class_id}")))?;

    if class.teacher_id != teacher_id {
        return Err(HWTrackerError::unauthorized(
            "You do not have permission to manage this class",
        ));
    }

    Ok(class)
}
