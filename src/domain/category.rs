// カテゴリ概要の整形
//
// 楽天レシピAPIのカテゴリ一覧レスポンスから、フロントエンドが必要とする
// 大カテゴリ・中カテゴリのみを抽出する。

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// カテゴリ抽出エラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CategoryExtractError {
    /// レスポンスに`result`オブジェクトが存在しない
    #[error("上流レスポンスにresultフィールドがありません")]
    MissingResult,
}

/// 大カテゴリ・中カテゴリのみを持つカテゴリ概要
///
/// カテゴリ一覧レスポンスは小カテゴリを含む巨大なオブジェクトのため、
/// フロントエンドに返すのは`large`と`medium`のみに絞る。
/// JSONシリアライズ時に存在しないフィールドは省略される。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryOverview {
    /// 大カテゴリの配列
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<Value>,

    /// 中カテゴリの配列
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Value>,
}

impl CategoryOverview {
    /// カテゴリ一覧レスポンスのボディから概要を抽出
    ///
    /// `result.large`と`result.medium`のみを取り出す。`result`自体が
    /// 存在しない（またはnullの）場合は抽出エラーを返し、呼び出し元が
    /// 上流レスポンス不正として処理する。`result`はあるが`large`や
    /// `medium`が欠けている場合は、そのフィールドを省略した概要を返す。
    ///
    /// # 引数
    /// * `body` - JSONとして解釈済みの上流レスポンスボディ
    ///
    /// # 戻り値
    /// * `Ok(CategoryOverview)` - 抽出成功
    /// * `Err(CategoryExtractError)` - `result`が存在しない
    pub fn from_upstream(body: &Value) -> Result<Self, CategoryExtractError> {
        let result = match body.get("result") {
            None | Some(Value::Null) => return Err(CategoryExtractError::MissingResult),
            Some(result) => result,
        };

        Ok(Self {
            large: result.get("large").cloned(),
            medium: result.get("medium").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== 抽出テスト ====================

    /// largeとmediumのみが抽出され、他のフィールドは捨てられる
    #[test]
    fn test_from_upstream_extracts_large_and_medium_only() {
        let body = json!({
            "result": {
                "large": [{"categoryId": "30", "categoryName": "人気メニュー"}],
                "medium": [{"categoryId": "275", "categoryName": "牛肉"}],
                "small": [{"categoryId": "516", "categoryName": "牛丼"}],
            }
        });

        let overview = CategoryOverview::from_upstream(&body).unwrap();

        assert_eq!(
            overview.large,
            Some(json!([{"categoryId": "30", "categoryName": "人気メニュー"}]))
        );
        assert_eq!(
            overview.medium,
            Some(json!([{"categoryId": "275", "categoryName": "牛肉"}]))
        );
    }

    /// resultが存在しない場合は抽出エラー
    #[test]
    fn test_from_upstream_without_result_is_error() {
        let body = json!({"error": "wrong_parameter"});

        let result = CategoryOverview::from_upstream(&body);

        assert_eq!(result, Err(CategoryExtractError::MissingResult));
    }

    /// resultがnullの場合も抽出エラー
    #[test]
    fn test_from_upstream_with_null_result_is_error() {
        let body = json!({"result": null});

        let result = CategoryOverview::from_upstream(&body);

        assert_eq!(result, Err(CategoryExtractError::MissingResult));
    }

    /// largeやmediumが欠けていてもエラーにはならない
    #[test]
    fn test_from_upstream_with_missing_fields() {
        let body = json!({"result": {"large": []}});

        let overview = CategoryOverview::from_upstream(&body).unwrap();

        assert_eq!(overview.large, Some(json!([])));
        assert!(overview.medium.is_none());
    }

    // ==================== シリアライズテスト ====================

    /// 両フィールドが存在する場合のJSON形式
    #[test]
    fn test_serialize_with_both_fields() {
        let overview = CategoryOverview {
            large: Some(json!([{"categoryId": "30"}])),
            medium: Some(json!([{"categoryId": "275"}])),
        };

        let value = serde_json::to_value(&overview).unwrap();

        assert_eq!(
            value,
            json!({
                "large": [{"categoryId": "30"}],
                "medium": [{"categoryId": "275"}],
            })
        );
    }

    /// Noneのフィールドはシリアライズ時に省略される
    #[test]
    fn test_serialize_omits_none_fields() {
        let overview = CategoryOverview {
            large: None,
            medium: None,
        };

        let value = serde_json::to_value(&overview).unwrap();

        assert_eq!(value, json!({}));
    }

    // ==================== エラー表示テスト ====================

    #[test]
    fn test_extract_error_display() {
        let error = CategoryExtractError::MissingResult;
        assert!(error.to_string().contains("result"));
    }
}
