// カテゴリ一覧プロキシハンドラー
//
// 楽天レシピAPIのカテゴリ一覧を取得し、フロントエンドが必要とする
// 大カテゴリ・中カテゴリのみに整形して返却する。
// 上流のエラーはステータス・ボディともそのままパススルーする。

use crate::application::response;
use crate::domain::CategoryOverview;
use crate::infrastructure::{RecipeApi, RecipeApiError};
use lambda_http::{Body, Response};
use tracing::{error, info, instrument, warn};

/// カテゴリ一覧プロキシハンドラー
///
/// 上流アクセスは`RecipeApi`トレイト経由で行い、
/// テストではスタブ実装に差し替える。
pub struct CategoryListHandler<G: RecipeApi> {
    /// 楽天レシピAPIゲートウェイ
    gateway: G,
}

impl<G: RecipeApi> CategoryListHandler<G> {
    /// 新しいハンドラーを作成
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// カテゴリ一覧リクエストを処理してレスポンスを生成
    ///
    /// - 上流が2xx: `result.large`と`result.medium`のみを抽出して200で返す
    /// - 上流が非2xx: ステータスとボディをそのまま返す
    /// - 上流ボディがJSONでない: 生ボディを含む500エラー
    /// - 通信失敗: 原因を伏せた500エラー
    #[instrument(skip(self))]
    pub async fn handle(&self) -> Response<Body> {
        match self.gateway.category_list().await {
            Ok(upstream) if upstream.is_success() => {
                info!(status = upstream.status, "カテゴリ一覧の取得に成功");

                match CategoryOverview::from_upstream(&upstream.body) {
                    Ok(overview) => response::json_response(200, &overview),
                    Err(e) => {
                        error!(error = %e, "カテゴリ一覧レスポンスの形式が不正");
                        response::error_response_with_body(
                            500,
                            response::MSG_INVALID_UPSTREAM,
                            upstream.body.to_string(),
                        )
                    }
                }
            }
            Ok(upstream) => {
                // 上流のエラーはステータス・ボディともそのまま返す
                warn!(status = upstream.status, "楽天APIがエラーステータスを返却");
                response::json_response(upstream.status, &upstream.body)
            }
            Err(RecipeApiError::InvalidJson { status, raw }) => {
                error!(status, "楽天APIレスポンスがJSONではない");
                response::error_response_with_body(500, response::MSG_INVALID_UPSTREAM, raw)
            }
            Err(RecipeApiError::Network(cause)) => {
                // 原因はログのみに記録し、呼び出し元には公開しない
                error!(error = %cause, "楽天APIへの接続に失敗");
                response::error_response(500, response::MSG_INTERNAL_ERROR)
            }
        }
    }
}
