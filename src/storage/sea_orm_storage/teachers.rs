//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{HWTrackerError, Result};
use crate::models::teachers::entities::Teacher;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, username: &str, password_hash: &str) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                HWTrackerError::already_exists(format!("用户名已被占用: {username}"))
            }
            _ => HWTrackerError::database_operation(format!("创建教师失败: {e}")),
        })?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过用户名获取教师
    pub async fn get_teacher_by_username_impl(&self, username: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let result = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_teacher()).collect())
    }
}
