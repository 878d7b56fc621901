/// 商品エンティティ
///
/// DynamoDBのProductsテーブルに保存される商品を表す値オブジェクト。
/// リクエストごとに新しく構築され、キャッシュや構築後の変更は行わない。
use serde::{Deserialize, Serialize};

/// 商品
///
/// JSON形状: `{ "id": <integer>, "name": <string>, "price": <number> }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 商品ID（テーブルのパーティションキー）
    pub id: i64,
    /// 商品名
    pub name: String,
    /// 価格
    pub price: f64,
}

impl Product {
    /// 新しいProductを作成
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
