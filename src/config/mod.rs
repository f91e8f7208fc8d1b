mod loader;
mod model;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader};
pub use model::{
    BodyKind, Config, CustomLanguageConfig, DEFAULT_MAX_FILE_LINES, DEFAULT_MAX_FUNCTION_LINES,
    DEFAULT_TOP_N, ScannerConfig, ThresholdConfig,
};
