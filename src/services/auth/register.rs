use tracing::info;

use super::AuthService;
use crate::errors::{HWTrackerError, Result};
use crate::models::auth::requests::RegisterRequest;
use crate::models::teachers::entities::Teacher;
use crate::utils::password::hash_password;
use crate::utils::validate::validate_required;

pub async fn handle_register(service: &AuthService, request: RegisterRequest) -> Result<Teacher> {
    validate_required(&request.username, "username").map_err(HWTrackerError::validation)?;
    validate_required(&request.password, "password").map_err(HWTrackerError::validation)?;

    // 哈希后入库；明文密码不落盘、不打日志
    let password_hash = hash_password(&request.password)?;

    // 用户名唯一性由数据库约束保证，冲突在存储层映射为 AlreadyExists
    let teacher = service
        .storage()
        .create_teacher(request.username.trim(), &password_hash)
        .await?;

    info!("Teacher {} registered", teacher.username);
    Ok(teacher)
}
