//! # Cookie Handling
//!
//! Set-Cookieヘッダの解析とCookieヘッダの組み立て

/// `Set-Cookie`ヘッダから指定した名前のクッキー値を取り出す
///
/// `PHPSESSID=abc123; path=/; HttpOnly`のようなヘッダから
/// 属性部分を無視して値のみを返す
///
/// # Arguments
///
/// * `set_cookie` - `Set-Cookie`ヘッダの値
/// * `name` - 取り出すクッキーの名前
pub fn extract_cookie(set_cookie: &str, name: &str) -> Option<String> {
    set_cookie.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// `Cookie`リクエストヘッダ用に1組のクッキーを組み立てる
pub fn serialize_cookie(name: &str, value: &str) -> String {
    format!("{}={}", name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cookie_with_attributes() {
        let value = extract_cookie("PHPSESSID=abc123; path=/", "PHPSESSID");
        assert_eq!(value, Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_cookie_value_only() {
        let value = extract_cookie("PHPSESSID=abc123", "PHPSESSID");
        assert_eq!(value, Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_cookie_ignores_other_names() {
        let value = extract_cookie("lang=en; path=/", "PHPSESSID");
        assert_eq!(value, None);
    }

    #[test]
    fn test_extract_cookie_empty_value() {
        let value = extract_cookie("PHPSESSID=; path=/", "PHPSESSID");
        assert_eq!(value, Some(String::new()));
    }

    #[test]
    fn test_extract_cookie_malformed_header() {
        assert_eq!(extract_cookie("garbage", "PHPSESSID"), None);
        assert_eq!(extract_cookie("", "PHPSESSID"), None);
    }

    #[test]
    fn test_serialize_cookie() {
        assert_eq!(serialize_cookie("PHPSESSID", "abc123"), "PHPSESSID=abc123");
    }
}
