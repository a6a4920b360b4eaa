use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
}

// 更新班级请求（目前仅支持重命名）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
}
