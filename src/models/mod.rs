pub mod cart;
pub mod product;

pub use cart::{ShoppingCart, ShoppingCartItem};
pub use product::Product;
