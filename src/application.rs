// アプリケーション層モジュール
pub mod delete_handler;
pub mod get_handler;
pub mod put_handler;
pub mod request;
pub mod response;

// 再エクスポート
pub use delete_handler::{DeleteProductError, DeleteProductHandler};
pub use get_handler::{GetProductError, GetProductHandler};
pub use put_handler::{PutProductError, PutProductHandler};
pub use request::{RequestEnvelope, RequestError};
pub use response::{ResponseBody, ResponseEnvelope};
