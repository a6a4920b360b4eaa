use serde::{Deserialize, Serialize};

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending, // 未完成
    Done,    // 已完成
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "pending";
    pub const DONE: &'static str = "done";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::PENDING => Ok(SubmissionStatus::Pending),
            SubmissionStatus::DONE => Ok(SubmissionStatus::Done),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, done"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Done => write!(f, "{}", SubmissionStatus::DONE),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "done" => Ok(SubmissionStatus::Done),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub status: SubmissionStatus,
    // 仅在状态切换为 done 时写入；切回 pending 时清空
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}
