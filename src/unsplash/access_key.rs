use crate::error::{NmdError, Result};

/// Unsplash APIアクセスキー
#[derive(Debug, Clone)]
pub struct AccessKey(String);

impl AccessKey {
    /// 新しいAccessKeyを作成
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// アクセスキーを解決
    /// 優先順位: 1. 明示指定, 2. UNSPLASH_ACCESS_KEY環境変数
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(key) = explicit {
            if !key.is_empty() {
                return Ok(Self::new(key));
            }
        }
        Self::from_env().ok_or(NmdError::MissingAccessKey)
    }

    /// 環境変数から取得（空文字列は未設定として扱う）
    pub fn from_env() -> Option<Self> {
        std::env::var("UNSPLASH_ACCESS_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .map(Self::new)
    }

    /// キー文字列への参照を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Client-ID認証ヘッダー値を生成
    pub fn to_client_id(&self) -> String {
        format!("Client-ID {}", self.0)
    }
}

impl std::fmt::Display for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_access_key_new() {
        let key = AccessKey::new("test_key");
        assert_eq!(key.as_str(), "test_key");
    }

    #[test]
    fn test_access_key_to_client_id() {
        let key = AccessKey::new("abc123");
        assert_eq!(key.to_client_id(), "Client-ID abc123");
    }

    #[test]
    fn test_access_key_display_hides_value() {
        let key = AccessKey::new("secret");
        assert_eq!(format!("{}", key), "AccessKey(***)");
    }

    #[test]
    #[serial]
    fn test_resolve_prefers_explicit() {
        std::env::set_var("UNSPLASH_ACCESS_KEY", "from-env");
        let key = AccessKey::resolve(Some("explicit")).unwrap();
        assert_eq!(key.as_str(), "explicit");
        std::env::remove_var("UNSPLASH_ACCESS_KEY");
    }

    #[test]
    #[serial]
    fn test_resolve_falls_back_to_env() {
        std::env::set_var("UNSPLASH_ACCESS_KEY", "from-env");
        let key = AccessKey::resolve(None).unwrap();
        assert_eq!(key.as_str(), "from-env");
        std::env::remove_var("UNSPLASH_ACCESS_KEY");
    }

    #[test]
    #[serial]
    fn test_resolve_empty_env_is_missing() {
        std::env::set_var("UNSPLASH_ACCESS_KEY", "");
        let result = AccessKey::resolve(None);
        assert!(matches!(result, Err(NmdError::MissingAccessKey)));
        std::env::remove_var("UNSPLASH_ACCESS_KEY");
    }

    #[test]
    #[serial]
    fn test_resolve_missing_key() {
        std::env::remove_var("UNSPLASH_ACCESS_KEY");
        let result = AccessKey::resolve(None);
        assert!(matches!(result, Err(NmdError::MissingAccessKey)));
    }
}
