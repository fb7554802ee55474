use std::sync::Arc;

use crate::services::{ItemService, ProductService, UserService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
    pub users: Arc<UserService>,
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(items: ItemService, users: UserService, products: ProductService) -> Self {
        Self {
            items: Arc::new(items),
            users: Arc::new(users),
            products: Arc::new(products),
        }
    }
}
