mod download;
mod types;

pub use download::Downloader;
pub use types::FetchOutcome;
