pub mod cache;
pub mod client;
pub mod error;
pub mod file;
pub mod provider;

pub use cache::SnapshotCache;
pub use client::{GoogleSheetsClient, SheetRanges};
pub use error::SourceError;
pub use file::JsonFileSource;
pub use provider::SheetSource;
