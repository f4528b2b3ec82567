mod loader;
mod model;
mod sources;
mod template;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    Config, DEFAULT_CHART_SCRIPT_URL, DEFAULT_DATALABELS_SCRIPT_URL, DEFAULT_MAX_INPUT_BYTES,
    DEFAULT_MIN_CANDIDATE_SPAN, DEFAULT_PALETTE, DEFAULT_THEME_STORAGE_KEY, ExtractConfig,
    PlaceholderConfig, PlaceholderData, RenderConfig,
};
pub use sources::{ConfigFiles, DiskFiles};
pub use template::generate_config_template;
pub use validation::validate_config_semantics;
