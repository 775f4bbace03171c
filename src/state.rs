use crate::storage::SharedStorage;

#[derive(Clone)]
pub struct AppState {
    pub storage: SharedStorage,
}
