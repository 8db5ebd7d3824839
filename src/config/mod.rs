// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{config_path, load_config, load_config_from, COUNTRY_ENV};
pub use settings::{default_data_dir, Config, DEFAULT_DISPLAY_NAME};
