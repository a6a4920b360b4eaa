pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod regenerate_code;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use crate::storage::Storage;

/// 加入码生成冲突时的最大重试次数
pub(crate) const MAX_CODE_ATTEMPTS: usize = 5;

pub struct ClassService {
    storage: Arc<dyn Storage>,
}

impl ClassService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建班级（自动生成唯一加入码）
    pub async fn create(&self, teacher_id: i64, request: CreateClassRequest) -> Result<Class> {
        create::handle_create(self, teacher_id, request).await
    }

    // 重新生成加入码（旧码立即失效，已加入学生不受影响）
    pub async fn regenerate_code(&self, teacher_id: i64, class_id: i64) -> Result<Class> {
        regenerate_code::handle_regenerate_code(self, teacher_id, class_id).await
    }

    // 更新班级信息
    pub async fn update(
        &self,
        teacher_id: i64,
        class_id: i64,
        request: UpdateClassRequest,
    ) -> Result<Class> {
        update::handle_update(self, teacher_id, class_id, request).await
    }

    // 获取班级信息
    pub async fn get(&self, class_id: i64) -> Result<Option<Class>> {
        get::handle_get(self, class_id).await
    }

    // 列出教师的班级
    pub async fn list(&self, teacher_id: i64) -> Result<Vec<Class>> {
        list::handle_list(self, teacher_id).await
    }

    // 删除班级（级联删除学生、作业、提交）
    pub async fn delete(&self, teacher_id: i64, class_id: i64) -> Result<bool> {
        delete::handle_delete(self, teacher_id, class_id).await
    }
}
