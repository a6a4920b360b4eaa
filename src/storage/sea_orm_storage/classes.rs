//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{HWTrackerError, Result};
use crate::models::classes::entities::Class;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 插入班级
    ///
    /// 加入码冲突映射为 AlreadyExists，由服务层换新码重试。
    pub async fn insert_class_impl(
        &self,
        teacher_id: i64,
        name: &str,
        access_code: &str,
    ) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            name: Set(name.to_string()),
            access_code: Set(access_code.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                HWTrackerError::already_exists(format!("加入码已被占用: {access_code}"))
            }
            _ => HWTrackerError::database_operation(format!("创建班级失败: {e}")),
        })?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过加入码获取班级
    pub async fn get_class_by_code_impl(&self, access_code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::AccessCode.eq(access_code))
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出教师的班级
    pub async fn list_classes_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let result = Classes::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }

    /// 重命名班级
    pub async fn update_class_name_impl(&self, class_id: i64, name: &str) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(class_id),
            name: Set(name.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 替换加入码
    ///
    /// 旧码在本次更新提交后立即失效（下一次按码查找不再命中）。
    pub async fn update_access_code_impl(
        &self,
        class_id: i64,
        access_code: &str,
    ) -> Result<Option<Class>> {
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(class_id),
            access_code: Set(access_code.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                HWTrackerError::already_exists(format!("加入码已被占用: {access_code}"))
            }
            _ => HWTrackerError::database_operation(format!("更新加入码失败: {e}")),
        })?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出全部班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let result = Classes::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }
}
