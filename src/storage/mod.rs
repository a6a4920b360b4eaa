use std::sync::Arc;

use crate::models::{
    assignments::{entities::Assignment, responses::AssignmentWithStatus},
    classes::entities::Class,
    students::{entities::Student, requests::UpdateStudentRequest},
    submissions::{
        entities::{Submission, SubmissionStatus},
        responses::StudentSubmissionRow,
    },
    teachers::entities::Teacher,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师（用户名唯一冲突返回 AlreadyExists）
    async fn create_teacher(&self, username: &str, password_hash: &str) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过用户名获取教师信息
    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>>;
    // 删除教师（级联删除其班级及下属数据）
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 列出全部教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;

    /// 班级管理方法
    // 插入班级（加入码唯一冲突返回 AlreadyExists，调用方换码重试）
    async fn insert_class(&self, teacher_id: i64, name: &str, access_code: &str) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过加入码获取班级信息
    async fn get_class_by_code(&self, access_code: &str) -> Result<Option<Class>>;
    // 列出教师的班级
    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 重命名班级
    async fn update_class_name(&self, class_id: i64, name: &str) -> Result<Option<Class>>;
    // 替换加入码（唯一冲突返回 AlreadyExists，调用方换码重试）
    async fn update_access_code(&self, class_id: i64, access_code: &str) -> Result<Option<Class>>;
    // 删除班级（级联删除学生、作业、提交）
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 列出全部班级
    async fn list_classes(&self) -> Result<Vec<Class>>;

    /// 学生管理方法
    // 原子化查找或创建学生：同一 (班级, 姓名) 永远只有一行
    async fn find_or_create_student(&self, class_id: i64, name: &str) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 更新学生资料
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生（级联删除其提交）
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 列出班级学生（按姓名排序）
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    // 列出班级内留有邮箱的学生
    async fn list_students_with_email(&self, class_id: i64) -> Result<Vec<Student>>;
    // 列出全部学生
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        class_id: i64,
        title: &str,
        description: &str,
        due_date: Option<chrono::NaiveDate>,
    ) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 删除作业（级联删除其提交）
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 列出班级作业（截止日期升序，空值最后，同日新建在前）
    async fn list_assignments_by_class(&self, class_id: i64) -> Result<Vec<Assignment>>;
    // 列出全部作业
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;

    /// 提交管理方法
    // 原子化写入提交状态：无行则插入，有行则更新，两条路径收敛到同一终态
    async fn upsert_submission_status(
        &self,
        assignment_id: i64,
        student_id: i64,
        status: SubmissionStatus,
    ) -> Result<Submission>;
    // 获取某 (作业, 学生) 的提交记录
    async fn get_submission(&self, assignment_id: i64, student_id: i64)
    -> Result<Option<Submission>>;
    // 删除提交记录
    async fn delete_submission(&self, id: i64) -> Result<bool>;
    // 学生视角：班级作业列表 + 本人状态（缺行视为 pending）
    async fn list_assignments_with_status(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<AssignmentWithStatus>>;
    // 教师视角：某作业在班级内的完成名册（按学生姓名排序）
    async fn list_class_submission_rows(
        &self,
        assignment_id: i64,
        class_id: i64,
    ) -> Result<Vec<StudentSubmissionRow>>;
    // 列出全部提交
    async fn list_submissions(&self) -> Result<Vec<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 使用显式连接 URL 创建存储（测试与嵌入方使用）
pub async fn create_storage_with_url(url: &str, pool_size: u32) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_with_url(url, pool_size).await?;
    Ok(Arc::new(storage))
}
