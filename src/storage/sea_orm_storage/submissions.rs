//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{HWTrackerError, Result};
use crate::models::{
    assignments::responses::AssignmentWithStatus,
    submissions::{
        entities::{Submission, SubmissionStatus},
        responses::StudentSubmissionRow,
    },
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 原子化写入提交状态
    ///
    /// INSERT .. ON CONFLICT UPDATE 依赖 (assignment_id, student_id) 唯一索引：
    /// 无行插入、有行更新收敛到同一终态，重复切换不会产生第二行。
    /// 切换为 done 时写入完成时间，切回 pending 时清空。
    pub async fn upsert_submission_status_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        status: SubmissionStatus,
    ) -> Result<Submission> {
        let completed_at = match status {
            SubmissionStatus::Done => Some(chrono::Utc::now().timestamp()),
            SubmissionStatus::Pending => None,
        };

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            status: Set(status.to_string()),
            completed_at: Set(completed_at),
            ..Default::default()
        };

        Submissions::insert(model)
            .on_conflict(
                OnConflict::columns([Column::AssignmentId, Column::StudentId])
                    .update_columns([Column::Status, Column::CompletedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("写入提交状态失败: {e}")))?;

        let result = self.get_submission_impl(assignment_id, student_id).await?;

        result.ok_or_else(|| HWTrackerError::database_operation("提交行写入后未能取回"))
    }

    /// 获取某 (作业, 学生) 的提交记录
    pub async fn get_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(
                Condition::all()
                    .add(Column::AssignmentId.eq(assignment_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 删除提交记录
    pub async fn delete_submission_impl(&self, id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("删除提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生视角：班级作业列表 + 本人提交状态
    ///
    /// 作业与提交分两次查询后在内存中合并；缺行视为 pending。
    pub async fn list_assignments_with_status_impl(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<AssignmentWithStatus>> {
        let assignments = self.list_assignments_by_class_impl(class_id).await?;

        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
        if assignment_ids.is_empty() {
            return Ok(vec![]);
        }

        let submissions = Submissions::find()
            .filter(
                Condition::all()
                    .add(Column::AssignmentId.is_in(assignment_ids))
                    .add(Column::StudentId.eq(student_id)),
            )
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询提交列表失败: {e}")))?;

        let by_assignment: HashMap<i64, Submission> = submissions
            .into_iter()
            .map(|m| (m.assignment_id, m.into_submission()))
            .collect();

        Ok(assignments
            .into_iter()
            .map(|assignment| {
                let submission = by_assignment.get(&assignment.id);
                AssignmentWithStatus {
                    status: submission
                        .map(|s| s.status)
                        .unwrap_or(SubmissionStatus::Pending),
                    completed_at: submission.and_then(|s| s.completed_at),
                    assignment,
                }
            })
            .collect())
    }

    /// 教师视角：某作业在班级内的完成名册
    ///
    /// 班级全部学生（按姓名排序）各取一行；缺行视为 pending。
    pub async fn list_class_submission_rows_impl(
        &self,
        assignment_id: i64,
        class_id: i64,
    ) -> Result<Vec<StudentSubmissionRow>> {
        let students = Students::find()
            .filter(StudentColumn::ClassId.eq(class_id))
            .order_by_asc(StudentColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询学生列表失败: {e}")))?;

        let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let submissions = Submissions::find()
            .filter(
                Condition::all()
                    .add(Column::AssignmentId.eq(assignment_id))
                    .add(Column::StudentId.is_in(student_ids)),
            )
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询提交列表失败: {e}")))?;

        let by_student: HashMap<i64, Submission> = submissions
            .into_iter()
            .map(|m| (m.student_id, m.into_submission()))
            .collect();

        Ok(students
            .into_iter()
            .map(|student| {
                let submission = by_student.get(&student.id);
                StudentSubmissionRow {
                    status: submission
                        .map(|s| s.status)
                        .unwrap_or(SubmissionStatus::Pending),
                    completed_at: submission.and_then(|s| s.completed_at),
                    student: student.into_student(),
                }
            })
            .collect())
    }

    /// 列出全部提交
    pub async fn list_submissions_impl(&self) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }
}
