pub mod session;
pub mod shop;

pub use session::{AuthSession, ShopRef, SESSION_KEY};
pub use shop::ShopRecord;
