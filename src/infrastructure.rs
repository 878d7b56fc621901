// インフラストラクチャ層モジュール
pub mod config;
pub mod logging;
pub mod product_repository;

// 再エクスポート
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use logging::init_logging;
pub use product_repository::{DynamoProductRepository, ProductRepository, RepositoryError};
