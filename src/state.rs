use crate::errors::TrackerError;
use crate::models::Store;
use crate::storage::StoreSaver;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Arc<Store>>>,
    saver: StoreSaver,
}

impl AppState {
    pub fn new(store: Arc<Store>, saver: StoreSaver) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            saver,
        }
    }

    pub async fn snapshot(&self) -> Arc<Store> {
        Arc::clone(&*self.store.lock().await)
    }

    pub async fn apply<F>(&self, mutation: F) -> Result<Arc<Store>, TrackerError>
    where
        F: FnOnce(&Store) -> Result<Store, TrackerError>,
    {
        let mut current = self.store.lock().await;
        let next = Arc::new(mutation(&current)?);
        *current = Arc::clone(&next);
        // queue under the lock so saves follow mutation order
        self.saver.save(Arc::clone(&next));
        Ok(next)
    }
}
