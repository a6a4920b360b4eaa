use tracing::info;

use super::{ClassService, MAX_CODE_ATTEMPTS};
use crate::errors::{HWTrackerError, Result};
use crate::models::classes::entities::Class;
use crate::services::require_class_owner;
use crate::utils::{ACCESS_CODE_LEN, generate_access_code};

pub async fn handle_regenerate_code(
    service: &ClassService,
    teacher_id: i64,
    class_id: i64,
) -> Result<Class> {
    let class = require_class_owner(service.storage(), teacher_id, class_id).await?;

    let mut last_err = None;
    for _ in 0..MAX_CODE_ATTEMPTS {
        let access_code = generate_access_code(ACCESS_CODE_LEN);
        // 新码与旧码撞上的概率可忽略，但同样由唯一约束兜底
        if access_code == class.access_code {
            continue;
        }
        match service
            .storage()
            .update_access_code(class_id, &access_code)
            .await
        {
            Ok(Some(updated)) => {
                info!("Class {} access code regenerated", class_id);
                return Ok(updated);
            }
            Ok(None) => {
                return Err(HWTrackerError::not_found(format!("班级不存在: {class_id}")));
            }
            Err(e) if e.is_already_exists() => {
                last_err = Some(e);
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        HWTrackerError::database_operation("更新加入码失败: 重试次数耗尽")
    }))
}
