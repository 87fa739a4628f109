// 楽天レシピAPIクライアント
//
// カテゴリ一覧・カテゴリ別ランキングエンドポイントへのGETリクエストを行い、
// レスポンスボディをJSONとして解釈して返す。成功・失敗の変換は
// アプリケーション層が行うため、ここでは上流の応答をそのまま保持する。

use crate::infrastructure::RakutenApiConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};
use url::form_urlencoded;

/// APIバージョン識別子（URLパスに含まれる固定値）
const API_VERSION: &str = "20170426";

/// カテゴリ一覧エンドポイントのパス
const CATEGORY_LIST_PATH: &str = "services/api/Recipe/CategoryList";

/// カテゴリ別ランキングエンドポイントのパス
const CATEGORY_RANKING_PATH: &str = "services/api/Recipe/CategoryRanking";

/// 上流APIの応答
///
/// ステータスコードとJSONとして解釈済みのボディを保持する。
/// 非2xxの応答もエラーではなくこの型で返し、パススルーの判断は
/// 呼び出し元に委ねる。
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    /// 上流のHTTPステータスコード
    pub status: u16,
    /// JSONとして解釈済みのボディ
    pub body: Value,
}

impl UpstreamResponse {
    /// 2xxステータスかどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// RecipeApiクライアントのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecipeApiError {
    /// 上流ボディがJSONとして解釈できない（診断用に生ボディを保持）
    #[error("上流レスポンスをJSONとして解釈できません: status={status}")]
    InvalidJson {
        /// 上流のHTTPステータスコード
        status: u16,
        /// 解釈できなかった生のボディ
        raw: String,
    },

    /// ネットワークエラー（原因はログのみに記録し、呼び出し元には公開しない）
    #[error("ネットワークエラー: {0}")]
    Network(String),
}

/// 楽天レシピAPIへのアクセスを抽象化するトレイト
///
/// ハンドラーと実際のHTTP通信の間の接合点。
/// テストではスタブ実装に差し替える。
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// カテゴリ一覧を取得（GET CategoryList）
    async fn category_list(&self) -> Result<UpstreamResponse, RecipeApiError>;

    /// 指定カテゴリのランキングを取得（GET CategoryRanking）
    ///
    /// # 引数
    /// * `category_id` - 楽天レシピのカテゴリID（例: "30", "10-275"）
    async fn category_ranking(&self, category_id: &str)
    -> Result<UpstreamResponse, RecipeApiError>;
}

/// reqwestによるRecipeApi実装
///
/// リクエストごとに新しい接続を開く単発のGETのみを行う。
/// 再試行は行わず、タイムアウトも上書きしない（実行環境の
/// リクエスト寿命制限に委ねる）。
#[derive(Clone)]
pub struct RakutenRecipeClient {
    /// HTTPクライアント
    client: Client,
    /// 楽天APIのベースURL
    base_url: String,
    /// アプリケーションID（クエリパラメータとして付与する認証情報）
    application_id: String,
}

// 認証情報をログに出さないため、Debugは手動実装
impl std::fmt::Debug for RakutenRecipeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RakutenRecipeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RakutenRecipeClient {
    /// 設定からクライアントを作成
    pub fn new(config: &RakutenApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url().to_string(),
            application_id: config.application_id().to_string(),
        }
    }

    /// エンドポイントURLを構築
    ///
    /// 固定パス・バージョン識別子・`format=json`・アプリケーションID・
    /// 追加パラメータを結合する。クエリパラメータはすべてURLエスケープされる。
    fn endpoint_url(&self, path: &str, extra_params: &[(&str, &str)]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("format", "json");
        query.append_pair("applicationId", &self.application_id);
        for (key, value) in extra_params {
            query.append_pair(key, value);
        }

        format!(
            "{}/{}/{}?{}",
            self.base_url.trim_end_matches('/'),
            path,
            API_VERSION,
            query.finish()
        )
    }

    /// カテゴリ一覧エンドポイントURLを構築
    fn category_list_url(&self) -> String {
        self.endpoint_url(CATEGORY_LIST_PATH, &[])
    }

    /// カテゴリ別ランキングエンドポイントURLを構築
    fn category_ranking_url(&self, category_id: &str) -> String {
        self.endpoint_url(CATEGORY_RANKING_PATH, &[("categoryId", category_id)])
    }

    /// 単発のGETリクエストを発行してレスポンスを解釈する
    ///
    /// 失敗はすべてこのリクエストで終端し、再試行は行わない。
    /// URLは認証情報を含むためログには記録しない。
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, RecipeApiError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, "楽天APIへのリクエストに失敗");
            RecipeApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();

        // Content-Typeヘッダーに関わらずボディをJSONとして解釈する
        // （上流はエラー時にヘッダーとボディが一致しないことがある）
        let raw = response.text().await.map_err(|e| {
            error!(error = %e, "楽天APIレスポンスの読み取りに失敗");
            RecipeApiError::Network(e.to_string())
        })?;

        parse_upstream(status, raw)
    }
}

/// ステータスコードと生ボディから上流応答を構築
///
/// ボディがJSONとして解釈できない場合は、診断用に生ボディを
/// 保持したエラーを返す。
fn parse_upstream(status: u16, raw: String) -> Result<UpstreamResponse, RecipeApiError> {
    match serde_json::from_str::<Value>(&raw) {
        Ok(body) => Ok(UpstreamResponse { status, body }),
        Err(e) => {
            warn!(status, error = %e, "上流レスポンスがJSONではない");
            Err(RecipeApiError::InvalidJson { status, raw })
        }
    }
}

#[async_trait]
impl RecipeApi for RakutenRecipeClient {
    async fn category_list(&self) -> Result<UpstreamResponse, RecipeApiError> {
        debug!("カテゴリ一覧を取得");
        self.fetch(&self.category_list_url()).await
    }

    async fn category_ranking(
        &self,
        category_id: &str,
    ) -> Result<UpstreamResponse, RecipeApiError> {
        debug!(category_id, "カテゴリ別ランキングを取得");
        self.fetch(&self.category_ranking_url(category_id)).await
    }
}
