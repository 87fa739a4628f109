// カテゴリ別ランキングプロキシハンドラー
//
// 指定されたカテゴリのレシピランキングを楽天レシピAPIから取得し、
// ボディを整形せずそのまま返却する。カテゴリIDは必須パラメータ。

use crate::application::response;
use crate::infrastructure::{RecipeApi, RecipeApiError};
use lambda_http::{Body, Response};
use tracing::{error, info, instrument, warn};

/// カテゴリ別ランキングプロキシハンドラー
///
/// 上流アクセスは`RecipeApi`トレイト経由で行い、
/// テストではスタブ実装に差し替える。
pub struct RankingHandler<G: RecipeApi> {
    /// 楽天レシピAPIゲートウェイ
    gateway: G,
}

impl<G: RecipeApi> RankingHandler<G> {
    /// 新しいハンドラーを作成
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// ランキングリクエストを処理してレスポンスを生成
    ///
    /// - カテゴリID未指定（または空文字）: 上流に接続せず400
    /// - 上流が2xx: ボディをそのまま200で返す
    /// - 上流が非2xx: ステータスとボディをそのまま返す
    /// - 上流ボディがJSONでない: 生ボディを含む500エラー
    /// - 通信失敗: 原因を伏せた500エラー
    ///
    /// # 引数
    /// * `category_id` - クエリ文字列から取得したカテゴリID
    #[instrument(skip(self))]
    pub async fn handle(&self, category_id: Option<&str>) -> Response<Body> {
        // カテゴリIDは必須（空文字は未指定として扱う）
        let Some(category_id) = category_id.filter(|s| !s.is_empty()) else {
            warn!("カテゴリIDが指定されていない");
            return response::error_response(400, response::MSG_MISSING_CATEGORY_ID);
        };

        match self.gateway.category_ranking(category_id).await {
            Ok(upstream) if upstream.is_success() => {
                info!(status = upstream.status, category_id, "ランキングの取得に成功");
                // ランキングはボディを整形せずそのまま返す
                response::json_response(200, &upstream.body)
            }
            Ok(upstream) => {
                // 上流のエラーはステータス・ボディともそのまま返す
                warn!(
                    status = upstream.status,
                    category_id, "楽天APIがエラーステータスを返却"
                );
                response::json_response(upstream.status, &upstream.body)
            }
            Err(RecipeApiError::InvalidJson { status, raw }) => {
                error!(status, category_id, "楽天APIレスポンスがJSONではない");
                response::error_response_with_body(500, response::MSG_INVALID_UPSTREAM, raw)
            }
            Err(RecipeApiError::Network(cause)) => {
                // 原因はログのみに記録し、呼び出し元には公開しない
                error!(error = %cause, category_id, "楽天APIへの接続に失敗");
                response::error_response(500, response::MSG_INTERNAL_ERROR)
            }
        }
    }
}
