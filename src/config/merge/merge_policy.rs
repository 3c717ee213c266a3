//! Base builder carrying scalar defaults; sources are layered on top in precedence order.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("library.root", "projects")?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
