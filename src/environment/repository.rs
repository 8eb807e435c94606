use crate::environment::types::UiConfig;

use serde::de::DeserializeOwned;
use serde_json::from_slice;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const UICONFIG_PATH: &str = "uiconfig.json";

/// Read-only access to the on-disk configuration. Session state is never
/// written back.
#[derive(Clone, Default, Debug)]
pub struct Repository {
    ui_config: Arc<UiConfig>,
}

impl Repository {
    pub fn new() -> Self {
        let Some(directory) = config_directory() else {
            log::debug!("No config directory, using default ui config");
            return Self::default();
        };
        Self::from_directory(&directory)
    }

    pub fn from_directory(directory: &Path) -> Self {
        let ui_config = match read(&directory.join(UICONFIG_PATH)) {
            Ok(Some(config)) => config,
            Ok(None) => UiConfig::default(),
            Err(e) => {
                log::error!("Could not load ui config: {e}");
                UiConfig::default()
            }
        };
        Self {
            ui_config: Arc::new(ui_config),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.ui_config
    }
}

fn read<T: DeserializeOwned>(data_path: &Path) -> Result<Option<T>, String> {
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn config_directory() -> Option<PathBuf> {
    use directories_next::ProjectDirs;
    ProjectDirs::from("com", "parrotprogress", "parrot")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}
