/// DynamoDBで商品を管理するための商品リポジトリ
///
/// Productsテーブルに対する単一キーのget/put/delete操作を提供する。
/// 範囲クエリやバッチ操作は行わない。
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::domain::Product;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// 取得したアイテムのデコードに失敗
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 商品永続化用トレイト
///
/// このトレイトは商品の永続化機能を抽象化し、
/// 異なる実装を可能にします（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// IDで商品を取得（ポイント検索）
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(Product))`
    /// * 見つからなかった場合は`Ok(None)`
    /// * 失敗時は`Err(RepositoryError)`
    async fn get(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    /// 商品を保存（上書きセマンティクス）
    ///
    /// 同じIDのアイテムが既に存在する場合は無条件に置き換える。
    /// 存在チェックも楽観的ロックも行わない（create-or-update）。
    async fn put(&self, product: &Product) -> Result<(), RepositoryError>;

    /// IDで商品を削除
    ///
    /// 存在しないIDの削除も成功として扱う（DynamoDBのdelete_itemの仕様通り）。
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// ProductRepositoryのDynamoDB実装
///
/// クライアントとテーブル名は構築時に注入され、
/// 呼び出しごとの再構築は行わない。
#[derive(Debug, Clone)]
pub struct DynamoProductRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 商品テーブル名
    table_name: String,
}

impl DynamoProductRepository {
    /// 新しいDynamoProductRepositoryを作成
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// 取得したDynamoDBアイテムをProductにデコード
    fn decode_item(
        item: &std::collections::HashMap<String, AttributeValue>,
    ) -> Result<Product, RepositoryError> {
        let id = item
            .get("id")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse::<i64>().ok())
            .ok_or_else(|| RepositoryError::SerializationError("Missing id field".to_string()))?;

        let name = item
            .get("name")
            .and_then(|v| v.as_s().ok())
            .ok_or_else(|| RepositoryError::SerializationError("Missing name field".to_string()))?
            .clone();

        let price = item
            .get("price")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse::<f64>().ok())
            .ok_or_else(|| {
                RepositoryError::SerializationError("Missing price field".to_string())
            })?;

        Ok(Product { id, name, price })
    }
}

#[async_trait]
impl ProductRepository for DynamoProductRepository {
    async fn get(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::N(id.to_string()))
            .send()
            .await
            .map_err(|e| RepositoryError::ReadError(e.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(Self::decode_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, product: &Product) -> Result<(), RepositoryError> {
        // id・name・priceの3フィールドのみを書き込む（無条件上書き）
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::N(product.id.to_string()))
            .item("name", AttributeValue::S(product.name.clone()))
            .item("price", AttributeValue::N(product.price.to_string()))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::N(id.to_string()))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.to_string()))?;

        Ok(())
    }
}
