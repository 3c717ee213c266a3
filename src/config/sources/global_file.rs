//! Global config file source (optional).

use crate::config::ConfigLoader;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match ConfigLoader::global_config_path() {
        Some(path) if path.is_file() => Ok(builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(false),
        )),
        _ => Ok(builder),
    }
}
