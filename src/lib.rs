pub mod config;
pub mod contents;
pub mod downloader;
pub mod errors;

pub use config::Config;
pub use contents::{parse, print_summary, summarize, PackageStatistics, Report};
pub use downloader::{decompress, Downloader};
pub use errors::{Error, ErrorKind, Result};
