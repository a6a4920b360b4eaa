use serde::Serialize;

use super::entities::Student;
use crate::models::classes::entities::Class;

// 加入班级成功响应：班级、学生行（重复加入返回同一行）与学生会话令牌
#[derive(Debug, Serialize)]
pub struct JoinClassResponse {
    pub class: Class,
    pub student: Student,
    pub token: String,
}
