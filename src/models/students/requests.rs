use serde::Deserialize;

// 学生加入班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct JoinClassRequest {
    pub name: String,
    pub access_code: String,
}

// 学生资料更新请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}
