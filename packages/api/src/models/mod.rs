//! Data models shared by the server functions and the UI.

mod price;
mod product;
mod user;

pub use price::{parse_amount, Price};
pub use product::{is_image_type, NewProduct, Product, ProductForm, PRODUCT_CATEGORIES};
pub use user::{SessionUser, UserInfo, ADMIN_ROLE};
