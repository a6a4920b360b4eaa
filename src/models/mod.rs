//! 业务模型定义
//!
//! 与 entity 模块的数据库实体分离：storage 层查询后转换为这里的业务实体。

pub mod assignments;
pub mod auth;
pub mod classes;
pub mod students;
pub mod submissions;
pub mod teachers;
