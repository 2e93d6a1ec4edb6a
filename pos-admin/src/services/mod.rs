pub mod api_client;
pub mod metrics;
pub mod shop_client;

pub use api_client::ApiClient;
pub use shop_client::ShopClient;
