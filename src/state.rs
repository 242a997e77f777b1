use crate::config::AppConfig;
use crate::history::HistoryStore;
use crate::storage::{FileStore, KeyValueStore};
use rand::{SeedableRng, rngs::StdRng};
use std::{io, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub history: Arc<Mutex<HistoryStore>>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, rng: StdRng) -> Self {
        let history = HistoryStore::load(Arc::clone(&store));
        Self {
            store,
            history: Arc::new(Mutex::new(history)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn from_config(config: &AppConfig) -> io::Result<Self> {
        let store = FileStore::open(&config.data_dir)?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::new(Arc::new(store), rng))
    }
}
