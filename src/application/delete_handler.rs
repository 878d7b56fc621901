/// 商品削除ハンドラー
///
/// DELETEルートでLambdaが呼び出された際の処理を実行する。
/// pathParametersのidでストアから削除する。idが無い場合は
/// ストア呼び出しを行わず、どちらの場合も成功として報告する
/// （存在しないidの削除も成功、という元の契約を保持する）。
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::application::request::{RequestEnvelope, RequestError};
use crate::application::response::ResponseEnvelope;
use crate::infrastructure::{ProductRepository, RepositoryError};

/// 削除ハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeleteProductError {
    /// リクエストの解釈に失敗
    #[error(transparent)]
    Request(#[from] RequestError),
    /// リポジトリ操作エラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 商品削除リクエストを処理するハンドラー
pub struct DeleteProductHandler<PR>
where
    PR: ProductRepository,
{
    /// 商品リポジトリ
    product_repo: PR,
}

impl<PR> DeleteProductHandler<PR>
where
    PR: ProductRepository,
{
    /// 新しいDeleteProductHandlerを作成
    pub fn new(product_repo: PR) -> Self {
        Self { product_repo }
    }

    /// 商品削除リクエストを処理
    ///
    /// # 処理フロー
    /// 1. イベントをRequestEnvelopeにデコード
    /// 2. pathParametersからidを抽出（queryStringParametersは参照しない）
    /// 3. idがあればストアから削除、無ければ何もしない
    ///
    /// # 戻り値
    /// * idの有無にかかわらず成功時は200と`{"message": "Item Deleted"}`
    /// * 解釈エラー・ストアエラー時は400と`{"error": ...}`
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        match self.delete(event).await {
            Ok(()) => ResponseEnvelope::ok_message("Item Deleted"),
            Err(err) => {
                warn!(error = %err, "商品削除に失敗");
                ResponseEnvelope::bad_request(err)
            }
        }
    }

    /// idを抽出してストアから削除する
    ///
    /// idが抽出できない場合はストア呼び出しを行わず成功として扱う。
    async fn delete(&self, event: &Value) -> Result<(), DeleteProductError> {
        let envelope = RequestEnvelope::from_value(event)?;

        if let Some(id) = envelope.path_id()? {
            self.product_repo.delete(id).await?;
        }

        Ok(())
    }
}
