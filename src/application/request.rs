/// リクエストエンベロープ
///
/// API Gateway経由でLambdaに渡される受信ペイロードの型付き表現。
/// pathParameters / queryStringParameters / body の有無を
/// 実行時のキー探索ではなく型レベルのOptionで区別する。
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// リクエスト解釈のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    /// エンベロープ自体がデコードできない
    #[error("Malformed request envelope: {0}")]
    MalformedEnvelope(String),

    /// idが数値として解釈できない
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    /// bodyがProductとしてデコードできない
    #[error("Invalid product body: {0}")]
    InvalidBody(String),

    /// bodyフィールドが存在しない
    #[error("Missing request body")]
    MissingBody,
}

/// 受信リクエストエンベロープ
///
/// 受信JSON形状:
/// ```json
/// {
///   "pathParameters": { "id": "1" },
///   "queryStringParameters": { "id": "1" },
///   "body": "{\"id\":1,\"name\":\"Widget\",\"price\":9.99}"
/// }
/// ```
/// 3つのフィールドはいずれも省略可能。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEnvelope {
    /// パスパラメータ（例: /api/products/1）
    #[serde(rename = "pathParameters", default)]
    pub path_parameters: Option<HashMap<String, String>>,

    /// クエリ文字列パラメータ（例: /api/products?id=1）
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,

    /// リクエストボディ（JSONエンコードされた文字列）
    #[serde(default)]
    pub body: Option<String>,
}

impl RequestEnvelope {
    /// Lambdaイベントペイロードからエンベロープをデコード
    pub fn from_value(event: &Value) -> Result<Self, RequestError> {
        serde_json::from_value(event.clone())
            .map_err(|e| RequestError::MalformedEnvelope(e.to_string()))
    }

    /// 商品IDを抽出する
    ///
    /// pathParametersが存在する場合はそこだけを参照し、
    /// 存在しない場合のみqueryStringParametersにフォールバックする。
    /// どちらにもidが無い場合は`Ok(None)`。
    /// idが整数として解釈できない場合は`Err(RequestError::InvalidId)`。
    pub fn product_id(&self) -> Result<Option<i64>, RequestError> {
        let raw = match &self.path_parameters {
            Some(pps) => pps.get("id"),
            None => self
                .query_string_parameters
                .as_ref()
                .and_then(|qsp| qsp.get("id")),
        };

        raw.map(|s| Self::parse_id(s)).transpose()
    }

    /// pathParametersからのみ商品IDを抽出する（削除パス用）
    pub fn path_id(&self) -> Result<Option<i64>, RequestError> {
        self.path_parameters
            .as_ref()
            .and_then(|pps| pps.get("id"))
            .map(|s| Self::parse_id(s))
            .transpose()
    }

    /// bodyをProductとしてデコードする（アップサートパス用）
    ///
    /// bodyフィールドが無い場合は`Err(RequestError::MissingBody)`。
    pub fn product(&self) -> Result<crate::domain::Product, RequestError> {
        let body = self.body.as_ref().ok_or(RequestError::MissingBody)?;
        serde_json::from_str(body).map_err(|e| RequestError::InvalidBody(e.to_string()))
    }

    fn parse_id(raw: &str) -> Result<i64, RequestError> {
        raw.parse::<i64>()
            .map_err(|_| RequestError::InvalidId(raw.to_string()))
    }
}
