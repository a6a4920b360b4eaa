//! 作业通知
//!
//! 外部邮件中继的薄封装。通知是尽力而为的：发送失败只记日志，
//! 绝不影响触发它的领域操作结果，也不重试。

pub mod smtp;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    // 作业创建后向单个学生发送一封通知
    async fn notify_assignment_created(
        &self,
        to_email: &str,
        student_name: &str,
        assignment: &Assignment,
    ) -> Result<()>;
}

/// 不发送任何通知的空实现
pub struct NullNotifier;

#[async_trait::async_trait]
impl Notifier for NullNotifier {
    async fn notify_assignment_created(
        &self,
        _to_email: &str,
        _student_name: &str,
        _assignment: &Assignment,
    ) -> Result<()> {
        Ok(())
    }
}

/// 根据配置创建通知器：未启用 SMTP 时退化为空实现
pub fn create_notifier() -> Arc<dyn Notifier> {
    let config = AppConfig::get();
    if config.smtp.enabled {
        Arc::new(smtp::SmtpNotifier::new())
    } else {
        Arc::new(NullNotifier)
    }
}
