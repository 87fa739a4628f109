/// カテゴリ一覧HTTP Lambdaエントリポイント
///
/// フロントエンドからのGET /categoriesリクエストを処理し、
/// 楽天レシピAPIのカテゴリ一覧から大・中カテゴリのみを返却する。
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use recipe_api::application::{CategoryListHandler, response};
use recipe_api::infrastructure::{RakutenApiConfig, RakutenRecipeClient, init_logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("カテゴリ一覧Lambda関数を初期化");

    // Lambda関数を実行
    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 認証情報を検証してからプロキシハンドラーに処理を委譲する。
/// 認証情報が未設定の場合は上流に接続せず、このリクエストのみを
/// 500で終端する。
async fn handler(_request: Request) -> Result<Response<Body>, Error> {
    info!("カテゴリ一覧リクエスト受信");

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
    let proxy = CategoryListHandler::new(client);
    let response = proxy.handle().await;

    info!(status = response.status().as_u16(), "カテゴリ一覧レスポンス送信");

    Ok(response)
}
