/// 商品取得ハンドラー
///
/// GETルートでLambdaが呼び出された際の処理を実行する。
/// pathParameters（無ければqueryStringParameters）からidを抽出し、
/// ストアへのポイント検索結果をレスポンスエンベロープに変換する。
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::application::request::{RequestEnvelope, RequestError};
use crate::application::response::ResponseEnvelope;
use crate::domain::Product;
use crate::infrastructure::{ProductRepository, RepositoryError};

/// 取得ハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GetProductError {
    /// リクエストの解釈に失敗
    #[error(transparent)]
    Request(#[from] RequestError),
    /// リポジトリ操作エラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 商品取得リクエストを処理するハンドラー
pub struct GetProductHandler<PR>
where
    PR: ProductRepository,
{
    /// 商品リポジトリ
    product_repo: PR,
}

impl<PR> GetProductHandler<PR>
where
    PR: ProductRepository,
{
    /// 新しいGetProductHandlerを作成
    pub fn new(product_repo: PR) -> Self {
        Self { product_repo }
    }

    /// 商品取得リクエストを処理
    ///
    /// # 処理フロー
    /// 1. イベントをRequestEnvelopeにデコード
    /// 2. idを抽出（pathParameters優先、無ければqueryStringParameters）
    /// 3. idがあればストアへポイント検索
    /// 4. 結果をレスポンスエンベロープに変換
    ///
    /// # 戻り値
    /// * 商品が見つかった場合は200と`{"product": ...}`
    /// * 商品が見つからない、またはidが抽出できない場合は404と`{"message": "Not Items Found"}`
    /// * 解釈エラー・ストアエラー時は400と`{"error": ...}`（ログにも出力）
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        match self.lookup(event).await {
            Ok(Some(product)) => ResponseEnvelope::ok_product(product),
            Ok(None) => ResponseEnvelope::not_found("Not Items Found"),
            Err(err) => {
                error!(error = %err, "商品取得に失敗");
                ResponseEnvelope::bad_request(err)
            }
        }
    }

    /// idを抽出してストアを検索する
    ///
    /// idが抽出できない場合は検索せずに`Ok(None)`を返す。
    async fn lookup(&self, event: &Value) -> Result<Option<Product>, GetProductError> {
        let envelope = RequestEnvelope::from_value(event)?;

        let Some(id) = envelope.product_id()? else {
            return Ok(None);
        };

        Ok(self.product_repo.get(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::product_repository::tests::MockProductRepository;
    use serde_json::json;

    /// テスト用のGetProductHandlerを作成
    fn create_test_handler() -> (GetProductHandler<MockProductRepository>, MockProductRepository)
    {
        let product_repo = MockProductRepository::new();
        let handler = GetProductHandler::new(product_repo.clone());
        (handler, product_repo)
    }

    // ストアに存在するidの取得が200と商品を返すテスト
    #[tokio::test]
    async fn test_get_found_returns_200_with_product() {
        let (handler, repo) = create_test_handler();
        repo.put(&Product::new(7, "Widget", 9.99)).await.unwrap();

        let response = handler.handle(&json!({"pathParameters": {"id": "7"}})).await;

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["product"]["id"], 7);
        assert_eq!(body["product"]["name"], "Widget");
        assert_eq!(body["product"]["price"], 9.99);
    }

    // ストアに存在しないidの取得が404を返すテスト
    #[tokio::test]
    async fn test_get_not_found_returns_404() {
        let (handler, _repo) = create_test_handler();

        let response = handler
            .handle(&json!({"pathParameters": {"id": "99"}}))
            .await;

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"message":"Not Items Found"}"#);
    }

    // idが抽出できない場合、ストア検索せずに404を返すテスト
    #[tokio::test]
    async fn test_get_without_id_returns_404_without_store_call() {
        let (handler, repo) = create_test_handler();

        let response = handler.handle(&json!({})).await;

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"message":"Not Items Found"}"#);
        assert_eq!(repo.get_calls(), 0);
    }

    // queryStringParametersのidでも取得できるテスト
    #[tokio::test]
    async fn test_get_by_query_parameter() {
        let (handler, repo) = create_test_handler();
        repo.put(&Product::new(12, "Bolt", 0.5)).await.unwrap();

        let response = handler
            .handle(&json!({"queryStringParameters": {"id": "12"}}))
            .await;

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["product"]["id"], 12);
    }

    // 両方にidがある場合、pathParametersのidが使われるテスト
    #[tokio::test]
    async fn test_get_path_id_takes_precedence() {
        let (handler, repo) = create_test_handler();
        repo.put(&Product::new(1, "FromPath", 1.0)).await.unwrap();
        repo.put(&Product::new(2, "FromQuery", 2.0)).await.unwrap();

        let response = handler
            .handle(&json!({
                "pathParameters": {"id": "1"},
                "queryStringParameters": {"id": "2"}
            }))
            .await;

        assert_eq!(response.status_code, 200);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["product"]["name"], "FromPath");
    }

    // 数値でないidが400を返すテスト（すべてのパスでstatusCodeが設定される）
    #[tokio::test]
    async fn test_get_invalid_id_returns_400() {
        let (handler, repo) = create_test_handler();

        let response = handler
            .handle(&json!({"pathParameters": {"id": "abc"}}))
            .await;

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("abc"));
        assert_eq!(repo.get_calls(), 0);
    }

    // ストアエラーが400を返すテスト
    #[tokio::test]
    async fn test_get_store_error_returns_400() {
        let (handler, repo) = create_test_handler();
        repo.set_next_error(RepositoryError::ReadError("DynamoDB unavailable".to_string()));

        let response = handler.handle(&json!({"pathParameters": {"id": "7"}})).await;

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Read error: DynamoDB unavailable");
    }
}
