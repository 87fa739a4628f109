// HTTPレスポンス構築ヘルパー
//
// 各ハンドラーが共通で使用するJSONレスポンス・エラーレスポンスを構築する。
// エラーレスポンスは常に`error`フィールドを持つJSONオブジェクトとする。

use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, HeaderMap, HeaderValue,
};
use lambda_http::{Body, Response};
use serde::Serialize;

/// API認証情報未設定時のエラーメッセージ
pub const MSG_MISSING_CREDENTIAL: &str = "API認証情報がサーバー側で設定されていません。";

/// カテゴリID未指定時のエラーメッセージ
pub const MSG_MISSING_CATEGORY_ID: &str = "カテゴリが指定されていません。";

/// 一般的なサーバーエラーメッセージ（原因は呼び出し元に公開しない）
pub const MSG_INTERNAL_ERROR: &str = "サーバーでエラーが発生しました。";

/// 上流レスポンスが解釈できない場合のエラーメッセージ
pub const MSG_INVALID_UPSTREAM: &str = "楽天APIのレスポンスを解析できませんでした。";

/// エラーレスポンスのボディ
///
/// 上流レスポンスが解釈できない場合のみ、診断用に`body`へ
/// 生のボディを含める。
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// エラーメッセージ
    pub error: String,

    /// 解釈できなかった上流の生ボディ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// JSONレスポンスを構築
///
/// ブラウザクライアント向けのContent-TypeとCORSヘッダーを付与する。
pub fn json_response(status: u16, payload: &impl Serialize) -> Response<Body> {
    let json = serde_json::to_string(payload).expect("レスポンスボディのシリアライズに失敗");

    let mut response = Response::builder()
        .status(status)
        .body(Body::Text(json))
        .expect("レスポンスの構築に失敗");

    *response.headers_mut() = build_headers();

    response
}

/// エラーレスポンスを構築
pub fn error_response(status: u16, message: &str) -> Response<Body> {
    json_response(
        status,
        &ErrorBody {
            error: message.to_string(),
            body: None,
        },
    )
}

/// 上流の生ボディ付きエラーレスポンスを構築（診断用）
pub fn error_response_with_body(status: u16, message: &str, raw: String) -> Response<Body> {
    json_response(
        status,
        &ErrorBody {
            error: message.to_string(),
            body: Some(raw),
        },
    )
}

/// ブラウザクライアント向けの共通ヘッダーを構築
///
/// - Content-Type: application/json
/// - Access-Control-Allow-Origin: *
/// - Access-Control-Allow-Headers: Accept
/// - Access-Control-Allow-Methods: GET, OPTIONS
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Accept"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );

    headers
}
