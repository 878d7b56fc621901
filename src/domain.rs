// ドメイン層モジュール
pub mod product;

// 再エクスポート
pub use product::Product;
