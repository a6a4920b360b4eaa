use tracing::info;

use super::{ClassService, MAX_CODE_ATTEMPTS};
use crate::errors::{HWTrackerError, Result};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use crate::utils::{ACCESS_CODE_LEN, generate_access_code};
use crate::utils::validate::validate_required;

pub async fn handle_create(
    service: &ClassService,
    teacher_id: i64,
    request: CreateClassRequest,
) -> Result<Class> {
    validate_required(&request.name, "class name").map_err(HWTrackerError::validation)?;
    let name = request.name.trim();

    // 生成-插入-冲突重试：唯一性交给数据库约束判定，
    // 有界重试避免生成与插入之间的竞态
    let mut last_err = None;
    for _ in 0..MAX_CODE_ATTEMPTS {
        let access_code = generate_access_code(ACCESS_CODE_LEN);
        match service
            .storage()
            .insert_class(teacher_id, name, &access_code)
            .await
        {
            Ok(class) => {
                info!(
                    "Class {} created with code {} by teacher {}",
                    class.name, class.access_code, teacher_id
                );
                return Ok(class);
            }
            Err(e) if e.is_already_exists() => {
                last_err = Some(e);
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        HWTrackerError::database_operation("创建班级失败: 加入码生成重试次数耗尽")
    }))
}
