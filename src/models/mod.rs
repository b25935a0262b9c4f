mod attribute;
mod auth;
mod billboard;
mod category;
mod discount;
mod product;

pub use attribute::*;
pub use auth::*;
pub use billboard::*;
pub use category::*;
pub use discount::*;
pub use product::*;
