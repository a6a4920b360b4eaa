use tracing::info;

use super::AuthService;
use crate::errors::{HWTrackerError, Result};
use crate::models::auth::{requests::LoginRequest, responses::LoginResponse};
use crate::utils::password::{verify_dummy_password, verify_password};
use crate::utils::session::{SessionRole, SessionUtils};

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<LoginResponse> {
    let teacher = service
        .storage()
        .get_teacher_by_username(request.username.trim())
        .await?;

    // 未知用户名与密码错误必须不可区分：
    // 用户名未命中时也做一次同量的哈希验证，再统一返回 InvalidCredentials
    let teacher = match teacher {
        Some(t) => t,
        None => {
            verify_dummy_password(&request.password);
            return Err(HWTrackerError::invalid_credentials("Invalid credentials"));
        }
    };

    if !verify_password(&request.password, &teacher.password_hash) {
        return Err(HWTrackerError::invalid_credentials("Invalid credentials"));
    }

    let token = SessionUtils::establish(SessionRole::Teacher, teacher.id, &teacher.username)
        .map_err(|e| HWTrackerError::session_token(format!("签发会话令牌失败: {e}")))?;

    info!("Teacher {} logged in", teacher.username);
    Ok(LoginResponse { teacher, token })
}
