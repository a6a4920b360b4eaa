//! SMTP 邮件通知实现

use lettre::{
    AsyncTransport, Tokio1Executor,
    message::{Message, header},
    transport::smtp::{AsyncSmtpTransport, authentication::Credentials},
};

use super::Notifier;
use crate::config::AppConfig;
use crate::errors::{HWTrackerError, Result};
use crate::models::assignments::entities::Assignment;

pub struct SmtpNotifier {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpNotifier {
    pub fn new() -> Self {
        let config = AppConfig::get();

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp.relay)
            .map(|builder| {
                builder
                    .credentials(Credentials::new(
                        config.smtp.username.clone(),
                        config.smtp.password.clone(),
                    ))
                    .build()
            })
            .ok();

        Self { transport }
    }

    fn build_message(
        to_email: &str,
        student_name: &str,
        assignment: &Assignment,
    ) -> Result<Message> {
        let config = AppConfig::get();

        let due = assignment
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let body = format!(
            "Hi {student_name},\n\nA new assignment has been posted:\n\nTitle: {}\nDescription: {}\nDue: {due}\n\nPlease log in to view more details.",
            assignment.title, assignment.description
        );

        Message::builder()
            .from(
                format!("{} <{}>", config.smtp.from_name, config.smtp.username)
                    .parse()
                    .map_err(|e| {
                        HWTrackerError::notification(format!("发件人地址无效: {e}"))
                    })?,
            )
            .to(to_email
                .parse()
                .map_err(|e| HWTrackerError::notification(format!("收件人地址无效: {e}")))?)
            .subject(format!("New Assignment: {}", assignment.title))
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| HWTrackerError::notification(format!("构建邮件失败: {e}")))
    }
}

impl Default for SmtpNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_assignment_created(
        &self,
        to_email: &str,
        student_name: &str,
        assignment: &Assignment,
    ) -> Result<()> {
        let transport = self
            .transport
            .as_ref()
            .ok_or_else(|| HWTrackerError::notification("SMTP 传输未初始化"))?;

        let message = Self::build_message(to_email, student_name, assignment)?;

        transport
            .send(message)
            .await
            .map_err(|e| HWTrackerError::notification(format!("发送邮件失败: {e}")))?;

        Ok(())
    }
}
