/// DynamoDB接続設定
///
/// テーブル名をプロセス全体の定数として持たず、
/// 環境から一度だけ読み込んでハンドラーに注入する。
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// DynamoDB設定のエラー型
#[derive(Debug, Error)]
pub enum DynamoDbConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// テーブル名とクライアントを持つDynamoDB設定
///
/// テーブル名は環境変数PRODUCTS_TABLEで設定する。
/// クライアントは設定読み込み時に一度だけ構築され、以後は参照で再利用する。
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// 商品テーブル名
    products_table: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、環境変数からテーブル名を読み取って新しいDynamoDbConfigを作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - PRODUCTS_TABLE: 商品用DynamoDBテーブル名
    pub async fn from_env() -> Result<Self, DynamoDbConfigError> {
        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        // AWS設定からDynamoDBクライアントを作成
        let client = DynamoDbClient::new(&aws_config);

        // 環境変数からテーブル名を読み込み
        let products_table = std::env::var("PRODUCTS_TABLE")
            .map_err(|_| DynamoDbConfigError::MissingEnvVar("PRODUCTS_TABLE".to_string()))?;

        Ok(Self {
            client,
            products_table,
        })
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, products_table: String) -> Self {
        Self {
            client,
            products_table,
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 商品テーブル名を取得
    pub fn products_table(&self) -> &str {
        &self.products_table
    }
}
