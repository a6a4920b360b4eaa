use crate::config::AppConfig;
use crate::errors::HWTrackerError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, HWTrackerError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| HWTrackerError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HWTrackerError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

/// 针对固定的占位哈希做一次验证
///
/// 登录时用户名不存在也执行同量的哈希计算，使未知用户名与密码错误
/// 在耗时上不可区分（枚举防护）。
pub fn verify_dummy_password(password: &str) {
    // 任意合法的 Argon2id 哈希即可，结果被丢弃
    const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$kEKWvINexmPCCjNvC6gxEZTknA2XiRGiAWQEuZR9Vz8";
    let _ = verify_password(password, DUMMY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("hunter22").unwrap();
        assert_ne!(hash, "hunter22");
        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_garbage_hash_is_false() {
        assert!(!verify_password("hunter22", "not-a-hash"));
        assert!(!verify_password("hunter22", ""));
    }
}
