mod loader;
mod model;

pub use loader::load_config;
pub use model::{DEFAULT_BASE_URL, DEFAULT_CATALOG_PATH, MirrorConfig};
