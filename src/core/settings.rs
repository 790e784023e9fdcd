use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::Path,
};
use tracing::{info, warn};

use crate::error::Result;

pub const SETTINGS_PATH: &str = "core/settings.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub ipv4_addr: Ipv4Setting,
    pub port: U16Setting,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct U16Setting {
    pub name: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ipv4Setting {
    pub name: String,
    pub value: Ipv4Addr,
}

impl Settings {
    /// Reads settings from `path`. A missing file falls back to the
    /// defaults; an unreadable or malformed one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let mut buffer = Vec::new();
                let mut reader = BufReader::new(file);
                reader.read_to_end(&mut buffer)?;
                let settings = serde_json::from_slice::<Settings>(&buffer)?;
                info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                warn!(
                    "No settings file at {}, using defaults",
                    path.display()
                );
                Ok(Settings::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ipv4_addr.value, self.port.value))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            ipv4_addr: Ipv4Setting {
                name: "Ipv4 Address".to_string(),
                value: Ipv4Addr::new(127, 0, 0, 1),
            },
            port: U16Setting {
                name: "Port".to_string(),
                value: 4010,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use std::{env, fs, process};

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("folio-{}-{}.json", name, process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = env::temp_dir().join("folio-settings-that-does-not-exist.json");
        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.addr().to_string(), "127.0.0.1:4010");
    }

    #[test]
    fn reads_named_settings() {
        let path = scratch_file(
            "named",
            r#"{
                "ipv4_addr": { "name": "Ipv4 Address", "value": "0.0.0.0" },
                "port": { "name": "Port", "value": 8080 }
            }"#,
        );
        let settings = Settings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let result = Settings::load(env::temp_dir());

        assert!(matches!(result, Err(FolioError::Io(_))));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_file("malformed", r#"{ "port": 8080 }"#);
        let result = Settings::load(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(FolioError::Settings(_))));
    }
}
