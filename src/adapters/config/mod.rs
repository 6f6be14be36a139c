mod loader;

pub use loader::{load_settings, DEFAULT_CONFIG_PATH};
