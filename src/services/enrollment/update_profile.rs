use super::EnrollmentService;
use crate::errors::{HWTrackerError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use crate::utils::validate::{validate_email, validate_required};

pub async fn handle_update_profile(
    service: &EnrollmentService,
    student_id: i64,
    mut request: UpdateStudentRequest,
) -> Result<Student> {
    if let Some(ref name) = request.name {
        validate_required(name, "student name").map_err(HWTrackerError::validation)?;
        request.name = Some(name.trim().to_string());
    }

    if let Some(ref email) = request.email {
        let email = email.trim();
        // 空串表示清除邮箱，其余必须是合法地址
        if !email.is_empty() {
            validate_email(email).map_err(HWTrackerError::validation)?;
        }
        request.email = Some(email.to_string());
    }

    service
        .storage()
        .update_student(student_id, request)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("学生不存在: {student_id}")))
}
