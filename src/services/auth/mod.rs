pub mod delete_account;
pub mod login;
pub mod register;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{
    requests::{LoginRequest, RegisterRequest},
    responses::LoginResponse,
};
use crate::models::teachers::entities::Teacher;
use crate::storage::Storage;

pub struct AuthService {
    storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 教师注册
    pub async fn register(&self, request: RegisterRequest) -> Result<Teacher> {
        register::handle_register(self, request).await
    }

    // 教师登录
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        login::handle_login(self, request).await
    }

    // 教师注销账号（级联删除名下班级及全部下属数据）
    pub async fn delete_account(&self, teacher_id: i64) -> Result<bool> {
        delete_account::handle_delete_account(self, teacher_id).await
    }
}
