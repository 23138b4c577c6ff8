use crate::errors::AppError;
use crate::models::{DayEntries, Store};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::watch, task::JoinHandle};
use tracing::{error, info, warn};

pub async fn load_store(path: &Path, seed: &[String]) -> Store {
    let fallback = || Store::with_members(seed.iter().cloned());
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no data file at {}, starting fresh", path.display());
            return fallback();
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            return fallback();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => match store_from_value(&value) {
            Some(store) => store,
            None => {
                error!("data file has an unexpected shape, using defaults");
                fallback()
            }
        },
        Err(err) => {
            error!("failed to parse data file: {err}");
            fallback()
        }
    }
}

pub fn store_from_value(value: &Value) -> Option<Store> {
    let raw_members = value.get("members")?.as_array()?;
    let raw_records = value.get("records")?.as_object()?;

    let mut members: Vec<String> = Vec::with_capacity(raw_members.len());
    for raw in raw_members {
        let name = raw.as_str()?.trim();
        if name.is_empty() || members.iter().any(|member| member == name) {
            warn!("dropping blank or repeated member {raw}");
            continue;
        }
        members.push(name.to_string());
    }

    let mut entries: BTreeMap<String, DayEntries> = BTreeMap::new();
    for (date, raw_day) in raw_records {
        let Some(raw_day) = raw_day.as_object() else {
            warn!("dropping malformed records for {date}");
            continue;
        };
        let mut day = DayEntries::new();
        for (member, raw_chapters) in raw_day {
            let member = member.trim();
            let chapters = raw_chapters
                .as_u64()
                .filter(|chapters| *chapters >= 1)
                .and_then(|chapters| u32::try_from(chapters).ok());
            match chapters {
                Some(chapters) if members.iter().any(|name| name == member) => {
                    day.insert(member.to_string(), chapters);
                }
                _ => warn!("dropping record {date}/{member}={raw_chapters}"),
            }
        }
        if !day.is_empty() {
            entries.insert(date.clone(), day);
        }
    }

    Some(Store { members, entries })
}

pub async fn write_store(path: &Path, store: &Store) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let tmp = temp_path(path);
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[derive(Clone)]
pub struct StoreSaver {
    tx: Arc<watch::Sender<Arc<Store>>>,
}

impl StoreSaver {
    pub fn save(&self, store: Arc<Store>) {
        if self.tx.receiver_count() == 0 {
            warn!("store writer has stopped; change kept in memory only");
        }
        self.tx.send_replace(store);
    }
}

/// Starts the background writer. The task ends, after flushing any pending
/// store, once every [`StoreSaver`] clone has been dropped.
pub fn spawn_saver(path: PathBuf, initial: Arc<Store>) -> (StoreSaver, JoinHandle<()>) {
    let (tx, mut rx) = watch::channel(initial);
    let handle = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let store = rx.borrow_and_update().clone();
            if let Err(err) = write_store(&path, &store).await {
                error!("failed to persist store to {}: {}", path.display(), err.message);
            }
        }
    });
    (StoreSaver { tx: Arc::new(tx) }, handle)
}
