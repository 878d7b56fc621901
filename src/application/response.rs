/// レスポンスエンベロープ
///
/// API Gatewayに返す送信ペイロードの型付き表現。
/// すべてのパスでstatusCodeが必ず設定され、bodyは
/// `{product}` / `{message}` / `{error}` のいずれかちょうど1つを持つ。
use serde::Serialize;
use serde_json::Value;

use crate::domain::Product;

/// レスポンスボディの3つのバリアント
///
/// 外部タグ付きでシリアライズされるため、JSON形状は
/// `{"product": {...}}` / `{"message": "..."}` / `{"error": "..."}` になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseBody {
    /// 取得した商品（読み取り成功）
    Product(Product),
    /// 処理結果メッセージ（作成・更新・削除の確認、未検出通知）
    Message(String),
    /// エラー内容
    Error(String),
}

/// 送信レスポンスエンベロープ
///
/// 送信JSON形状: `{"statusCode": <integer>, "body": "<JSONエンコード文字列>"}`
/// bodyはJSONオブジェクトを文字列エンコードしたもの（API Gatewayの規約）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    /// HTTPステータスコード
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// 文字列エンコードされたJSONボディ
    pub body: String,
}

impl ResponseEnvelope {
    /// ステータスコードとボディバリアントからエンベロープを構築
    pub fn new(status_code: u16, body: ResponseBody) -> Self {
        // ResponseBodyは文字列と数値のみで構成されるためシリアライズは失敗しない
        let body = serde_json::to_string(&body).unwrap_or_default();
        Self { status_code, body }
    }

    /// 200 OKで商品を返すエンベロープ
    pub fn ok_product(product: Product) -> Self {
        Self::new(200, ResponseBody::Product(product))
    }

    /// 200 OKでメッセージを返すエンベロープ
    pub fn ok_message(message: &str) -> Self {
        Self::new(200, ResponseBody::Message(message.to_string()))
    }

    /// 404 Not Foundのエンベロープ
    pub fn not_found(message: &str) -> Self {
        Self::new(404, ResponseBody::Message(message.to_string()))
    }

    /// 400 Bad Requestでエラーを返すエンベロープ
    pub fn bad_request(error: impl std::fmt::Display) -> Self {
        Self::new(400, ResponseBody::Error(error.to_string()))
    }

    /// Lambdaランタイムに返すJSON値へ変換
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "statusCode": self.status_code,
            "body": self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // productバリアントのシリアライズ形状のテスト
    #[test]
    fn test_ok_product_shape() {
        let envelope = ResponseEnvelope::ok_product(Product::new(7, "Widget", 9.99));

        assert_eq!(envelope.status_code, 200);

        // bodyは文字列エンコードされたJSONオブジェクト
        let body: Value = serde_json::from_str(&envelope.body).unwrap();
        assert_eq!(body["product"]["id"], 7);
        assert_eq!(body["product"]["name"], "Widget");
        assert_eq!(body["product"]["price"], 9.99);
    }

    // messageバリアントのシリアライズ形状のテスト
    #[test]
    fn test_message_shape() {
        let envelope = ResponseEnvelope::not_found("Not Items Found");

        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.body, r#"{"message":"Not Items Found"}"#);
    }

    // errorバリアントのシリアライズ形状のテスト
    #[test]
    fn test_error_shape() {
        let envelope = ResponseEnvelope::bad_request("something broke");

        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.body, r#"{"error":"something broke"}"#);
    }

    // Lambdaに返すJSON値が期待するキーを持つテスト
    #[test]
    fn test_to_value_keys() {
        let envelope = ResponseEnvelope::ok_message("Item Deleted");
        let value = envelope.to_value();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], r#"{"message":"Item Deleted"}"#);
    }

    // ボディが常にちょうど1つのバリアントキーを持つテスト
    #[test]
    fn test_body_has_exactly_one_key() {
        for envelope in [
            ResponseEnvelope::ok_product(Product::new(1, "A", 1.0)),
            ResponseEnvelope::ok_message("ok"),
            ResponseEnvelope::bad_request("ng"),
        ] {
            let body: Value = serde_json::from_str(&envelope.body).unwrap();
            assert_eq!(body.as_object().unwrap().len(), 1);
        }
    }
}
