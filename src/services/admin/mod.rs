//! 管理操作
//!
//! 单个共享口令做门禁（非账号体系），校验通过后提供跨全部五张表的
//! 无限制读取与删除。这是有意保留的逃生舱：绕过领域层的归属校验，
//! 存储引擎的外键约束是唯一兜底。

pub mod tables;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{HWTrackerError, Result};
use crate::storage::Storage;

pub use tables::AdminTable;

pub struct AdminService {
    storage: Arc<dyn Storage>,
}

impl AdminService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 口令门禁：未配置口令（空串）时拒绝一切管理操作
    pub fn authorize(&self, secret_input: &str) -> Result<()> {
        if !secret_matches(&AppConfig::get().admin.secret, secret_input) {
            return Err(HWTrackerError::unauthorized("Invalid admin password"));
        }
        Ok(())
    }

    // 整表读取
    pub async fn dump_table(&self, secret_input: &str, table: AdminTable) -> Result<serde_json::Value> {
        self.authorize(secret_input)?;
        tables::handle_dump_table(self, table).await
    }

    // 按 ID 删除任意表中的行
    pub async fn delete_row(&self, secret_input: &str, table: AdminTable, id: i64) -> Result<bool> {
        self.authorize(secret_input)?;
        tables::handle_delete_row(self, table, id).await
    }
}

pub(crate) fn secret_matches(expected: &str, input: &str) -> bool {
    !expected.is_empty() && input == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_denies_everything() {
        assert!(!secret_matches("", ""));
        assert!(!secret_matches("", "anything"));
    }

    #[test]
    fn test_secret_comparison() {
        assert!(secret_matches("s3cret", "s3cret"));
        assert!(!secret_matches("s3cret", "S3CRET"));
        assert!(!secret_matches("s3cret", "s3cret "));
    }
}
