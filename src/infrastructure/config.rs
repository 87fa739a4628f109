// 楽天レシピAPI接続設定
//
// 環境変数からアプリケーションIDと接続先を読み込み、
// 型安全に提供するインフラストラクチャ層コンポーネント。

use thiserror::Error;

/// 楽天APIの本番エンドポイント
const DEFAULT_BASE_URL: &str = "https://app.rakuten.co.jp";

/// 楽天API設定エラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RakutenApiConfigError {
    /// 必須の環境変数が設定されていない
    #[error("必須の環境変数が設定されていません: {0}")]
    MissingEnvVar(String),
}

/// 楽天レシピAPIの接続設定
///
/// # フィールド
/// - `application_id`: 楽天アプリケーションID（サーバー側でのみ保持する認証情報）
/// - `base_url`: APIのベースURL（通常は本番エンドポイント、テスト時のみ上書き）
#[derive(Clone)]
pub struct RakutenApiConfig {
    application_id: String,
    base_url: String,
}

// 認証情報をログやpanicメッセージに出さないため、Debugは手動実装
impl std::fmt::Debug for RakutenApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RakutenApiConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RakutenApiConfig {
    /// 新しい設定を作成
    ///
    /// # 引数
    /// - `application_id`: 楽天アプリケーションID
    /// - `base_url`: APIのベースURL
    pub fn new(application_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            base_url: base_url.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// リクエストごとに呼び出される。認証情報が未設定でも関数自体は
    /// 起動し続け、そのリクエストだけをエラーとして終端する。
    ///
    /// # 環境変数
    /// - `RAKUTEN_APP_ID`: 楽天アプリケーションID（必須、空文字は未設定扱い）
    /// - `RAKUTEN_API_BASE_URL`: ベースURLの上書き（任意）
    ///
    /// # 戻り値
    /// - `Ok(RakutenApiConfig)`: 設定が正常に読み込まれた
    /// - `Err(RakutenApiConfigError)`: RAKUTEN_APP_IDが設定されていない
    pub fn from_env() -> Result<Self, RakutenApiConfigError> {
        let application_id = std::env::var("RAKUTEN_APP_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| RakutenApiConfigError::MissingEnvVar("RAKUTEN_APP_ID".to_string()))?;

        let base_url = std::env::var("RAKUTEN_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            application_id,
            base_url,
        })
    }

    /// アプリケーションIDを取得
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    // 安全性: #[serial]によりシングルスレッドで実行される
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn cleanup_env() {
        unsafe {
            remove_env("RAKUTEN_APP_ID");
            remove_env("RAKUTEN_API_BASE_URL");
        }
    }

    // ==================== RakutenApiConfig テスト ====================

    #[test]
    fn test_new_creates_config() {
        let config = RakutenApiConfig::new("test-app-id", "https://example.com");

        assert_eq!(config.application_id(), "test-app-id");
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    #[serial(rakuten_env)]
    fn test_from_env_success() {
        unsafe {
            cleanup_env();
            set_env("RAKUTEN_APP_ID", "1234567890123456789");
        }

        let config = RakutenApiConfig::from_env().expect("設定の読み込みに失敗");

        assert_eq!(config.application_id(), "1234567890123456789");
        assert_eq!(config.base_url(), "https://app.rakuten.co.jp");

        unsafe { cleanup_env() };
    }

    #[test]
    #[serial(rakuten_env)]
    fn test_from_env_missing_application_id() {
        unsafe { cleanup_env() };

        let result = RakutenApiConfig::from_env();

        assert!(result.is_err());
        match result.unwrap_err() {
            RakutenApiConfigError::MissingEnvVar(var) => {
                assert_eq!(var, "RAKUTEN_APP_ID");
            }
        }
    }

    /// 空文字のアプリケーションIDは未設定として扱う
    #[test]
    #[serial(rakuten_env)]
    fn test_from_env_empty_application_id() {
        unsafe {
            cleanup_env();
            set_env("RAKUTEN_APP_ID", "   ");
        }

        let result = RakutenApiConfig::from_env();

        assert!(result.is_err());

        unsafe { cleanup_env() };
    }

    /// ベースURLは環境変数で上書きできる
    #[test]
    #[serial(rakuten_env)]
    fn test_from_env_base_url_override() {
        unsafe {
            cleanup_env();
            set_env("RAKUTEN_APP_ID", "test-app-id");
            set_env("RAKUTEN_API_BASE_URL", "http://localhost:8080");
        }

        let config = RakutenApiConfig::from_env().expect("設定の読み込みに失敗");

        assert_eq!(config.base_url(), "http://localhost:8080");

        unsafe { cleanup_env() };
    }

    // ==================== Debug実装テスト ====================

    /// Debug出力に認証情報が含まれない
    #[test]
    fn test_debug_redacts_application_id() {
        let config = RakutenApiConfig::new("secret-app-id", "https://example.com");

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("RakutenApiConfig"));
        assert!(debug_str.contains("https://example.com"));
        assert!(!debug_str.contains("secret-app-id"));
    }

    // ==================== RakutenApiConfigError テスト ====================

    #[test]
    fn test_error_display() {
        let error = RakutenApiConfigError::MissingEnvVar("TEST_VAR".to_string());
        assert!(error.to_string().contains("TEST_VAR"));
        assert!(error.to_string().contains("環境変数"));
    }
}
