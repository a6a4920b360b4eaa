use serde::Serialize;

use crate::models::teachers::entities::Teacher;

// 登录成功响应：教师信息 + 会话令牌
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub teacher: Teacher,
    pub token: String,
}
