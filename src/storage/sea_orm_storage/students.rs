//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{HWTrackerError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 原子化查找或创建学生
    ///
    /// INSERT .. ON CONFLICT DO NOTHING 依赖 (class_id, name) 唯一索引：
    /// 并发重复加入时一个写入胜出，其余落到已有行，随后的查询取回同一条记录。
    pub async fn find_or_create_student_impl(&self, class_id: i64, name: &str) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_string()),
            email: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Students::insert(model)
            .on_conflict(
                OnConflict::columns([Column::ClassId, Column::Name])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("加入班级失败: {e}")))?;

        let result = Students::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::Name.eq(name)),
            )
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询学生失败: {e}")))?;

        result
            .map(|m| m.into_student())
            .ok_or_else(|| HWTrackerError::database_operation("学生行写入后未能取回"))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 更新学生资料
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = update.email {
            // 空串视为清除邮箱
            model.email = Set(if email.is_empty() { None } else { Some(email) });
        }

        model.update(&self.db).await.map_err(|e| match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                HWTrackerError::already_exists("该姓名在班级内已被使用")
            }
            _ => HWTrackerError::database_operation(format!("更新学生失败: {e}")),
        })?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出班级学生（按姓名排序）
    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出班级内留有邮箱的学生
    pub async fn list_students_with_email_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::Email.is_not_null()),
            )
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let result = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }
}
