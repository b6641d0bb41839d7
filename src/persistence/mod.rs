pub mod config;
pub mod files;

pub use config::{init_config, load_config, AppConfig};
pub use files::{atomic_write, config_file, log_dir};
