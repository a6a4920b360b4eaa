use std::str::FromStr;

use tracing::warn;

use super::AdminService;
use crate::errors::Result;

// 管理操作可触达的表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTable {
    Teachers,
    Classes,
    Students,
    Assignments,
    Submissions,
}

impl FromStr for AdminTable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "teachers" => Ok(AdminTable::Teachers),
            "classes" => Ok(AdminTable::Classes),
            "students" => Ok(AdminTable::Students),
            "assignments" => Ok(AdminTable::Assignments),
            "submissions" => Ok(AdminTable::Submissions),
            _ => Err(format!("Unknown table: {s}")),
        }
    }
}

pub async fn handle_dump_table(
    service: &AdminService,
    table: AdminTable,
) -> Result<serde_json::Value> {
    let storage = service.storage();
    let value = match table {
        AdminTable::Teachers => serde_json::to_value(storage.list_teachers().await?)?,
        AdminTable::Classes => serde_json::to_value(storage.list_classes().await?)?,
        AdminTable::Students => serde_json::to_value(storage.list_students().await?)?,
        AdminTable::Assignments => serde_json::to_value(storage.list_assignments().await?)?,
        AdminTable::Submissions => serde_json::to_value(storage.list_submissions().await?)?,
    };
    Ok(value)
}

pub async fn handle_delete_row(service: &AdminService, table: AdminTable, id: i64) -> Result<bool> {
    let storage = service.storage();
    let deleted = match table {
        AdminTable::Teachers => storage.delete_teacher(id).await?,
        AdminTable::Classes => storage.delete_class(id).await?,
        AdminTable::Students => storage.delete_student(id).await?,
        AdminTable::Assignments => storage.delete_assignment(id).await?,
        AdminTable::Submissions => storage.delete_submission(id).await?,
    };
    if deleted {
        warn!("Admin deleted row {} from {:?}", id, table);
    }
    Ok(deleted)
}
