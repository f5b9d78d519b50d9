//! コマンド行のトークン化ユーティリティ

/// 文字列を区切り文字で分割する
///
/// 空のトークンは取り除かれる。
///
/// # Examples
/// ```
/// use sumire_core::parse::split;
///
/// assert_eq!(split("break 0xDEAD", ' '), vec!["break", "0xDEAD"]);
/// assert_eq!(split("cont", ' '), vec!["cont"]);
/// ```
pub fn split(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// sがofの先頭部分文字列かどうかを判定する
///
/// 空文字列はあらゆる文字列の接頭辞として扱われる。
///
/// # Examples
/// ```
/// use sumire_core::parse::is_prefix;
///
/// assert!(is_prefix("c", "continue"));
/// assert!(!is_prefix("continue", "c"));
/// ```
pub fn is_prefix(s: &str, of: &str) -> bool {
    of.starts_with(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        assert_eq!(split("break 0xDEAD", ' '), vec!["break", "0xDEAD"]);
        assert_eq!(split("cont", ' '), vec!["cont"]);
    }

    #[test]
    fn test_split_collapses_empty_tokens() {
        assert_eq!(split("c  0xDEAD", ' '), vec!["c", "0xDEAD"]);
        assert!(split("", ' ').is_empty());
    }

    #[test]
    fn test_is_prefix() {
        assert!(is_prefix("c", "continue"));
        assert!(is_prefix("cont", "continue"));
        assert!(is_prefix("continue", "continue"));
        assert!(is_prefix("", "continue"));
        assert!(!is_prefix("continue", "c"));
        assert!(!is_prefix("x", "continue"));
    }
}
