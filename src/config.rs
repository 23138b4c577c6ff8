use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/state.json";
pub const DEFAULT_MEMBERS: [&str; 3] = ["Alice", "Bob", "Carol"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub seed_members: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed_members: DEFAULT_MEMBERS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            match value.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => warn!("ignoring PORT={value:?}: {err}"),
            }
        }

        if let Some(path) = lookup("APP_DATA_PATH").filter(|path| !path.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(value) = lookup("TRACKER_MEMBERS") {
            let members = parse_member_list(&value);
            if members.is_empty() {
                warn!("ignoring empty TRACKER_MEMBERS");
            } else {
                config.seed_members = members;
            }
        }

        config
    }
}

fn parse_member_list(value: &str) -> Vec<String> {
    let mut members: Vec<String> = Vec::new();
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !members.iter().any(|member| member == name) {
            members.push(name.to_string());
        }
    }
    members
}
