/// カテゴリ別ランキングHTTP Lambdaエントリポイント
///
/// フロントエンドからのGET /ranking?categoryId=...リクエストを処理し、
/// 楽天レシピAPIのカテゴリ別ランキングをそのまま返却する。
use lambda_http::{Body, Error, Request, RequestExt, Response, run, service_fn};
use recipe_api::application::{RankingHandler, response};
use recipe_api::infrastructure::{RakutenApiConfig, RakutenRecipeClient, init_logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("ランキングLambda関数を初期化");

    // Lambda関数を実行
    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 認証情報を検証してからプロキシハンドラーに処理を委譲する。
/// 認証情報が未設定の場合は、他のパラメータに関わらず
/// このリクエストを500で終端する。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    // クエリ文字列からカテゴリIDを取得
    let params = request.query_string_parameters();
    let category_id = params.first("categoryId");

    info!(category_id = ?category_id, "ランキングリクエスト受信");

    // 環境変数から認証情報を読み込み（リクエスト単位で検証）
    let config = match RakutenApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, credential_configured = false, "API認証情報が未設定");
            return Ok(response::error_response(
                500,
                response::MSG_MISSING_CREDENTIAL,
            ));
        }
    };

    let client = RakutenRecipeClient::new(&config);
    let proxy = RankingHandler::new(client);
    let response = proxy.handle(category_id).await;

    info!(status = response.status().as_u16(), "ランキングレスポンス送信");

    Ok(response)
}
