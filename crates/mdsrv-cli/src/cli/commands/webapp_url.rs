//! `mdsrv webapp-url` – web application launch URL.

use mdsrv_core::webapp::webapp_url;

pub fn run_webapp_url(host: &str, port: u16, struc: Option<&str>, traj: Option<&str>) {
    println!("{}", webapp_url(host, port, struc, traj));
}
