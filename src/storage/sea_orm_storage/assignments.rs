//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{HWTrackerError, Result};
use crate::models::assignments::entities::Assignment;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        class_id: i64,
        title: &str,
        description: &str,
        due_date: Option<chrono::NaiveDate>,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            due_date: Set(due_date),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出班级作业
    ///
    /// 展示顺序：截止日期升序、无截止日期排最后，同日期新建的在前。
    pub async fn list_assignments_by_class_impl(&self, class_id: i64) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_with_nulls(Column::DueDate, Order::Asc, NullOrdering::Last)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 列出全部作业
    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }
}
