/// 商品アップサートLambdaエントリポイント
///
/// API Gateway経由のPUTリクエストを処理し、bodyの商品を
/// DynamoDBのProductsテーブルへ上書き保存する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use product_api::application::{PutProductHandler, ResponseEnvelope};
use product_api::infrastructure::{DynamoDbConfig, DynamoProductRepository, init_logging};
use serde_json::Value;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. DynamoDB設定を環境から読み込み
/// 2. PutProductHandlerを使用してアップサートを処理
/// 3. すべてのパスでstatusCode付きのエンベロープを返却
async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    debug!("商品アップサートリクエスト受信");

    // DynamoDB設定を環境から読み込み
    let config = match DynamoDbConfig::from_env().await {
        Ok(config) => config,
        Err(err) => {
            // 設定エラーもエンベロープに変換して返却（未処理フォールトにしない）
            error!(error = %err, "DynamoDB設定読み込み失敗");
            return Ok(ResponseEnvelope::bad_request(err).to_value());
        }
    };

    // リポジトリを作成してハンドラーに注入
    let product_repo = DynamoProductRepository::new(
        config.client().clone(),
        config.products_table().to_string(),
    );
    let put_handler = PutProductHandler::new(product_repo);

    let response = put_handler.handle(&event.payload).await;

    info!(status_code = response.status_code, "商品アップサート完了");
    Ok(response.to_value())
}
