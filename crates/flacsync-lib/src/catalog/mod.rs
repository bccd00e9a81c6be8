mod entry;
mod reader;

pub use entry::{CatalogEntry, EntrySummary};
pub use reader::Catalog;
