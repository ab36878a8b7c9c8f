pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod fetch;
pub mod file_info;
pub mod trajectory;
pub mod webapp;

pub use client::{DataSourceClient, Listing, ListingEntry};
pub use error::FetchError;
pub use file_info::{get_file_info, FileDescriptor, FileRef};
