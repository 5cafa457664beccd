//! Interface name predicates

use regex::Regex;

use crate::shared::models::Result;

/// Rule deciding which interface names get a mock
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Unanchored regular expression search
    Regex(Regex),

    /// Fixed name suffix
    Suffix(String),
}

impl NameMatcher {
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(NameMatcher::Regex(Regex::new(pattern)?))
    }

    pub fn suffix(suffix: impl Into<String>) -> Self {
        NameMatcher::Suffix(suffix.into())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Regex(re) => re.is_match(name),
            NameMatcher::Suffix(suffix) => name.ends_with(suffix.as_str()),
        }
    }

    /// Human readable form for log lines
    pub fn describe(&self) -> String {
        match self {
            NameMatcher::Regex(re) => format!("/{}/", re.as_str()),
            NameMatcher::Suffix(suffix) => format!("*{}", suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_is_unanchored() {
        let matcher = NameMatcher::regex("Serv").unwrap();
        assert!(matcher.matches("UserService"));
        assert!(matcher.matches("Server"));
        assert!(!matcher.matches("Store"));
    }

    #[test]
    fn test_anchored_regex() {
        let matcher = NameMatcher::regex("^(User|Repo)Service$").unwrap();
        assert!(matcher.matches("UserService"));
        assert!(!matcher.matches("UserServiceImpl"));
    }

    #[test]
    fn test_suffix() {
        let matcher = NameMatcher::suffix("Service");
        assert!(matcher.matches("UserService"));
        assert!(matcher.matches("Service"));
        assert!(!matcher.matches("ServiceClient"));
        assert_eq!(matcher.describe(), "*Service");
    }

    #[test]
    fn test_invalid_regex() {
        assert!(NameMatcher::regex("(unclosed").is_err());
    }
}
