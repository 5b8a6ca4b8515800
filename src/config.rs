use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "liftbook";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("LIFTBOOK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            export_dir: env::var_os("LIFTBOOK_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        }
    }
}

/// `<documents>/liftbook`, or `./liftbook-data` when the platform has no
/// documents directory.
fn default_data_dir() -> PathBuf {
    dirs::document_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!("{APP_DIR}-data")))
}
