/// 商品アップサートハンドラー
///
/// PUTルートでLambdaが呼び出された際の処理を実行する。
/// bodyをProductとしてデコードし、ストアへ無条件上書き保存する。
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::application::request::{RequestEnvelope, RequestError};
use crate::application::response::ResponseEnvelope;
use crate::infrastructure::{ProductRepository, RepositoryError};

/// アップサートハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PutProductError {
    /// リクエストの解釈に失敗
    #[error(transparent)]
    Request(#[from] RequestError),
    /// リポジトリ操作エラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 商品アップサートリクエストを処理するハンドラー
///
/// 同じidの商品が既に存在する場合は黙って置き換える（create-or-update）。
/// 存在チェックも楽観的ロックも行わない。
pub struct PutProductHandler<PR>
where
    PR: ProductRepository,
{
    /// 商品リポジトリ
    product_repo: PR,
}

impl<PR> PutProductHandler<PR>
where
    PR: ProductRepository,
{
    /// 新しいPutProductHandlerを作成
    pub fn new(product_repo: PR) -> Self {
        Self { product_repo }
    }

    /// 商品アップサートリクエストを処理
    ///
    /// # 処理フロー
    /// 1. イベントをRequestEnvelopeにデコード
    /// 2. bodyをProductにデコード
    /// 3. id・name・priceをストアへ上書き保存
    ///
    /// # 戻り値
    /// * 成功時は200と`{"message": "New Item created/updated"}`
    /// * body欠落・デコード失敗・ストアエラー時は400と`{"error": ...}`
    ///   （body欠落時はストア呼び出しを行わない）
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        match self.upsert(event).await {
            Ok(()) => ResponseEnvelope::ok_message("New Item created/updated"),
            Err(err) => {
                warn!(error = %err, "商品アップサートに失敗");
                ResponseEnvelope::bad_request(err)
            }
        }
    }

    /// bodyをデコードしてストアへ保存する
    async fn upsert(&self, event: &Value) -> Result<(), PutProductError> {
        let envelope = RequestEnvelope::from_value(event)?;
        let product = envelope.product()?;

        self.product_repo.put(&product).await?;
        Ok(())
    }
}
