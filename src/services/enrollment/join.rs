use tracing::info;

use super::EnrollmentService;
use crate::errors::{HWTrackerError, Result};
use crate::models::students::{requests::JoinClassRequest, responses::JoinClassResponse};
use crate::utils::session::{SessionRole, SessionUtils};
use crate::utils::validate::{normalize_access_code, validate_required};

pub async fn handle_join(
    service: &EnrollmentService,
    request: JoinClassRequest,
) -> Result<JoinClassResponse> {
    validate_required(&request.name, "student name").map_err(HWTrackerError::validation)?;
    validate_required(&request.access_code, "access code").map_err(HWTrackerError::validation)?;

    // 操作者手输的码统一去空白转大写后再查找
    let access_code = normalize_access_code(&request.access_code);
    let name = request.name.trim();

    let class = service
        .storage()
        .get_class_by_code(&access_code)
        .await?
        .ok_or_else(|| {
            HWTrackerError::not_found("Couldn't find a class with that code")
        })?;

    // 原子化查找或创建：重复加入（包括并发的两个标签页）收敛到同一行
    let student = service
        .storage()
        .find_or_create_student(class.id, name)
        .await?;

    let token = SessionUtils::establish(SessionRole::Student, student.id, &student.name)
        .map_err(|e| HWTrackerError::session_token(format!("签发会话令牌失败: {e}")))?;

    info!("Student {} joined class {}", student.name, class.id);
    Ok(JoinClassResponse {
        class,
        student,
        token,
    })
}
