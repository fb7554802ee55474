pub mod item;
pub mod product;
pub mod user;

pub use item::*;
pub use product::*;
pub use user::User;
