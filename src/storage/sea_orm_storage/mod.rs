//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod classes;
mod students;
mod submissions;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{HWTrackerError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（连接参数取自全局配置）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(&config.database.url, config.database.pool_size).await
    }

    /// 使用显式连接 URL 创建存储实例
    pub async fn new_with_url(url: &str, pool_size: u32) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size).await?
        } else {
            Self::connect_generic(&db_url, pool_size).await?
        };

        // 运行迁移（幂等）
        Migrator::up(&db, None)
            .await
            .map_err(|e| HWTrackerError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化，外键强制开启以保证级联删除）
    async fn connect_sqlite(url: &str, pool_size: u32) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let config = AppConfig::get();

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| HWTrackerError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| HWTrackerError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32) -> Result<DatabaseConnection> {
        let config = AppConfig::get();

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| HWTrackerError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(HWTrackerError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_teacher(&self, username: &str, password_hash: &str) -> Result<Teacher> {
        self.create_teacher_impl(username, password_hash).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_username_impl(username).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    // 班级模块
    async fn insert_class(&self, teacher_id: i64, name: &str, access_code: &str) -> Result<Class> {
        self.insert_class_impl(teacher_id, name, access_code).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_code(&self, access_code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(access_code).await
    }

    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>> {
        self.list_classes_by_teacher_impl(teacher_id).await
    }

    async fn update_class_name(&self, class_id: i64, name: &str) -> Result<Option<Class>> {
        self.update_class_name_impl(class_id, name).await
    }

    async fn update_access_code(&self, class_id: i64, access_code: &str) -> Result<Option<Class>> {
        self.update_access_code_impl(class_id, access_code).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    // 学生模块
    async fn find_or_create_student(&self, class_id: i64, name: &str) -> Result<Student> {
        self.find_or_create_student_impl(class_id, name).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn list_students_with_email(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_with_email_impl(class_id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        class_id: i64,
        title: &str,
        description: &str,
        due_date: Option<chrono::NaiveDate>,
    ) -> Result<Assignment> {
        self.create_assignment_impl(class_id, title, description, due_date)
            .await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn list_assignments_by_class(&self, class_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_class_impl(class_id).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    // 提交模块
    async fn upsert_submission_status(
        &self,
        assignment_id: i64,
        student_id: i64,
        status: SubmissionStatus,
    ) -> Result<Submission> {
        self.upsert_submission_status_impl(assignment_id, student_id, status)
            .await
    }

    async fn get_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_impl(assignment_id, student_id).await
    }

    async fn delete_submission(&self, id: i64) -> Result<bool> {
        self.delete_submission_impl(id).await
    }

    async fn list_assignments_with_status(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Vec<AssignmentWithStatus>> {
        self.list_assignments_with_status_impl(class_id, student_id)
            .await
    }

    async fn list_class_submission_rows(
        &self,
        assignment_id: i64,
        class_id: i64,
    ) -> Result<Vec<StudentSubmissionRow>> {
        self.list_class_submission_rows_impl(assignment_id, class_id)
            .await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.list_submissions_impl().await
    }
}
