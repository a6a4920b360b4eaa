use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// 会话角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Teacher,
    Student,
}

impl SessionRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl<'de> Deserialize<'de> for SessionRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SessionRole::TEACHER => Ok(SessionRole::Teacher),
            SessionRole::STUDENT => Ok(SessionRole::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的会话角色: '{s}'. 支持的角色: teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for SessionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionRole::Teacher => write!(f, "{}", SessionRole::TEACHER),
            SessionRole::Student => write!(f, "{}", SessionRole::STUDENT),
        }
    }
}

// 会话 Claims 结构体
//
// 会话状态完全由客户端持有：服务端签发后不保留任何记录，
// 注销即客户端丢弃令牌，无服务端吊销（设计上接受的限制）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,       // 主体（教师或学生 ID）
    pub role: SessionRole, // 会话角色
    pub name: String,      // 显示名
    pub exp: usize,        // 过期时间（时间戳）
    pub iat: usize,        // 签发时间（时间戳）
}

impl SessionClaims {
    /// 主体 ID（解析失败视为令牌无效）
    pub fn actor_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok()
    }
}

pub struct SessionUtils;

impl SessionUtils {
    // 获取签名密钥
    fn get_secret() -> String {
        AppConfig::get().session.secret.clone()
    }

    // 为指定主体签发会话令牌
    pub fn establish(
        role: SessionRole,
        actor_id: i64,
        display_name: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::establish_with_expiry(
            role,
            actor_id,
            display_name,
            chrono::Duration::days(config.session.token_expiry_days),
        )
    }

    // 签发带自定义过期时间的令牌
    pub fn establish_with_expiry(
        role: SessionRole,
        actor_id: i64,
        display_name: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = SessionClaims {
            sub: actor_id.to_string(),
            role,
            name: display_name.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 读取会话令牌
    //
    // 解码或校验失败一律视为"无会话"，不向调用方区分原因。
    pub fn read(token: &str) -> Option<SessionClaims> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_establish_and_read_roundtrip() {
        let token = SessionUtils::establish(SessionRole::Teacher, 42, "ms_lee").unwrap();
        let claims = SessionUtils::read(&token).expect("token should decode");
        assert_eq!(claims.role, SessionRole::Teacher);
        assert_eq!(claims.actor_id(), Some(42));
        assert_eq!(claims.name, "ms_lee");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_student_session() {
        let token = SessionUtils::establish(SessionRole::Student, 7, "Ava").unwrap();
        let claims = SessionUtils::read(&token).unwrap();
        assert_eq!(claims.role, SessionRole::Student);
        assert_eq!(claims.actor_id(), Some(7));
    }

    #[test]
    fn test_tampered_token_reads_as_no_session() {
        let token = SessionUtils::establish(SessionRole::Student, 7, "Ava").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });
        assert!(SessionUtils::read(&tampered).is_none());
        assert!(SessionUtils::read("garbage.token.value").is_none());
    }

    #[test]
    fn test_expired_token_reads_as_no_session() {
        let token = SessionUtils::establish_with_expiry(
            SessionRole::Teacher,
            1,
            "old",
            chrono::Duration::seconds(-3600),
        )
        .unwrap();
        assert!(SessionUtils::read(&token).is_none());
    }
}
