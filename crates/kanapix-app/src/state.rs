use kanapix_config::Config;
use kanapix_store::ImageStore;
use tokio::sync::RwLock;

use crate::session::Session;

pub struct AppState {
    pub config: RwLock<Config>,
    pub session: RwLock<Session>,
    pub store: ImageStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            session: RwLock::new(Session::new()),
            store: ImageStore::new(),
        }
    }
}
