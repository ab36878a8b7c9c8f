//! CLI command handlers, one file per command.

mod frame;
mod info;
mod ls;
mod numframes;
mod path;
mod url;
mod webapp_url;

pub use frame::run_frame;
pub use info::run_info;
pub use ls::run_ls;
pub use numframes::run_numframes;
pub use path::run_path;
pub use url::run_url;
pub use webapp_url::run_webapp_url;
