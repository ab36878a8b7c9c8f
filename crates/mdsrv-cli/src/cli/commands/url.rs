//! `mdsrv url <file>` – print the whole-file content URL.

use mdsrv_core::DataSourceClient;

pub fn run_url(client: &DataSourceClient, file: &str) {
    println!("{}", client.get_url(file));
}
