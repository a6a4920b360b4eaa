//! 班级加入码生成
//!
//! 码值全局唯一由数据库唯一约束保证；这里只负责生成，
//! 插入冲突时由调用方换新码重试。

use rand::Rng;

/// 默认加入码长度
pub const ACCESS_CODE_LEN: usize = 6;

// 大写字母 + 数字，去掉易混淆的 0/O/1/I，便于口头转述和手工输入
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成指定长度的加入码
pub fn generate_access_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let code = generate_access_code(ACCESS_CODE_LEN);
        assert_eq!(code.len(), 6);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_no_ambiguous_glyphs() {
        for _ in 0..100 {
            let code = generate_access_code(ACCESS_CODE_LEN);
            assert!(!code.contains(['0', 'O', '1', 'I']));
        }
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(generate_access_code(8).len(), 8);
    }
}
