use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 校验必填文本字段非空（去除首尾空白后）
pub fn validate_required(value: &str, field: &'static str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be blank"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 规范化操作者输入的加入码：去空白并转大写
pub fn normalize_access_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// 解析操作者输入的截止日期（"YYYY-MM-DD"）；空串视为无截止日期
pub fn parse_due_date(value: &str) -> crate::errors::Result<Option<chrono::NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value.parse::<chrono::NaiveDate>()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(validate_required("", "title").is_err());
        assert!(validate_required("   ", "title").is_err());
        assert!(validate_required("\t\n", "title").is_err());
        assert!(validate_required("Algebra 1", "title").is_ok());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("ava@example.com").is_ok());
        assert!(validate_email("a.b+c@school.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_normalize_access_code() {
        assert_eq!(normalize_access_code("  3h8kqz "), "3H8KQZ");
        assert_eq!(normalize_access_code("ABCDEF"), "ABCDEF");
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2024-03-01").unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("  ").unwrap(), None);
        assert!(matches!(
            parse_due_date("03/01/2024").unwrap_err(),
            crate::errors::HWTrackerError::DateParse(_)
        ));
    }
}
