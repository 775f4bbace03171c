use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    NewOrder, NewOrderItem, NewProduct, NewStore, NewUser, Order, OrderItem, Product, Store, User,
};

/// Lookup and insert operations for the catalog and the append-only order
/// log. No entity supports update or delete.
///
/// Handlers and sessions hold this as a trait object so the in-memory
/// backend can be swapped for a database-backed one without touching them.
pub trait Storage: Send + Sync {
    fn user(&self, id: i32) -> Option<User>;
    fn user_by_username(&self, username: &str) -> Option<User>;
    fn create_user(&self, user: NewUser) -> User;

    fn store(&self, id: i32) -> Option<Store>;
    fn store_by_qr_code(&self, qr_code: &str) -> Option<Store>;
    fn stores(&self) -> Vec<Store>;
    fn create_store(&self, store: NewStore) -> Store;

    fn product(&self, id: i32) -> Option<Product>;
    fn product_by_barcode(&self, barcode: &str) -> Option<Product>;
    fn products_by_category(&self, category: &str) -> Vec<Product>;
    fn recommended_products(&self, store_id: i32) -> Vec<Product>;
    fn related_products(&self, product_id: i32) -> Vec<Product>;
    fn products(&self) -> Vec<Product>;
    fn create_product(&self, product: NewProduct) -> Product;

    fn order(&self, id: i32) -> Option<Order>;
    fn order_by_number(&self, order_number: &str) -> Option<Order>;
    fn user_orders(&self, user_id: i32) -> Vec<Order>;
    fn create_order(&self, order: NewOrder) -> Order;

    fn order_items(&self, order_id: i32) -> Vec<OrderItem>;
    fn create_order_item(&self, item: NewOrderItem) -> OrderItem;
}

pub type SharedStorage = Arc<dyn Storage>;

/// Identity sequence starting at 1. Ids are never reused; nothing is ever
/// deleted, so this holds trivially.
struct IdSeq(i32);

impl Default for IdSeq {
    fn default() -> Self {
        Self(1)
    }
}

impl IdSeq {
    fn take(&mut self) -> i32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    stores: BTreeMap<i32, Store>,
    products: BTreeMap<i32, Product>,
    orders: BTreeMap<i32, Order>,
    order_items: BTreeMap<i32, OrderItem>,
    user_ids: IdSeq,
    store_ids: IdSeq,
    product_ids: IdSeq,
    order_ids: IdSeq,
    order_item_ids: IdSeq,
}

/// Process-wide in-memory backend. State does not survive restart.
#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemStorage {
    fn user(&self, id: i32) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    fn user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    fn create_user(&self, user: NewUser) -> User {
        let mut tables = self.write();
        let id = tables.user_ids.take();
        let user = User {
            id,
            username: user.username,
            password: user.password,
        };
        tables.users.insert(id, user.clone());
        user
    }

    fn store(&self, id: i32) -> Option<Store> {
        self.read().stores.get(&id).cloned()
    }

    fn store_by_qr_code(&self, qr_code: &str) -> Option<Store> {
        self.read()
            .stores
            .values()
            .find(|store| store.qr_code == qr_code)
            .cloned()
    }

    fn stores(&self) -> Vec<Store> {
        self.read().stores.values().cloned().collect()
    }

    fn create_store(&self, store: NewStore) -> Store {
        let mut tables = self.write();
        let id = tables.store_ids.take();
        let store = Store {
            id,
            name: store.name,
            branch: store.branch,
            qr_code: store.qr_code,
            layout: store.layout,
        };
        tables.stores.insert(id, store.clone());
        store
    }

    fn product(&self, id: i32) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }

    fn product_by_barcode(&self, barcode: &str) -> Option<Product> {
        self.read()
            .products
            .values()
            .find(|product| product.barcode == barcode)
            .cloned()
    }

    fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.read()
            .products
            .values()
            .filter(|product| product.category == category)
            .cloned()
            .collect()
    }

    fn recommended_products(&self, _store_id: i32) -> Vec<Product> {
        // Demo heuristic: the first few catalog entries.
        self.read().products.values().take(3).cloned().collect()
    }

    fn related_products(&self, product_id: i32) -> Vec<Product> {
        let tables = self.read();
        let Some(product) = tables.products.get(&product_id) else {
            return Vec::new();
        };
        tables
            .products
            .values()
            .filter(|p| p.category == product.category && p.id != product_id)
            .take(3)
            .cloned()
            .collect()
    }

    fn products(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    fn create_product(&self, product: NewProduct) -> Product {
        let mut tables = self.write();
        let id = tables.product_ids.take();
        let product = Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            price_per_unit: product.price_per_unit,
            unit: product.unit,
            weight: product.weight,
            image_url: product.image_url,
            discount: product.discount,
            category: product.category,
            barcode: product.barcode,
        };
        tables.products.insert(id, product.clone());
        product
    }

    fn order(&self, id: i32) -> Option<Order> {
        self.read().orders.get(&id).cloned()
    }

    fn order_by_number(&self, order_number: &str) -> Option<Order> {
        self.read()
            .orders
            .values()
            .find(|order| order.order_number == order_number)
            .cloned()
    }

    fn user_orders(&self, user_id: i32) -> Vec<Order> {
        self.read()
            .orders
            .values()
            .filter(|order| order.user_id == Some(user_id))
            .cloned()
            .collect()
    }

    fn create_order(&self, order: NewOrder) -> Order {
        let mut tables = self.write();
        let id = tables.order_ids.take();
        let order = Order {
            id,
            user_id: order.user_id,
            store_id: order.store_id,
            order_number: order.order_number,
            total_amount: order.total_amount,
            total_tax: order.total_tax,
            total_savings: order.total_savings,
            total_weight: order.total_weight,
            order_date: order.order_date,
            status: order.status,
        };
        tables.orders.insert(id, order.clone());
        order
    }

    fn order_items(&self, order_id: i32) -> Vec<OrderItem> {
        self.read()
            .order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect()
    }

    fn create_order_item(&self, item: NewOrderItem) -> OrderItem {
        let mut tables = self.write();
        let id = tables.order_item_ids.take();
        let item = OrderItem {
            id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
        };
        tables.order_items.insert(id, item.clone());
        item
    }
}
