//! `mdsrv info <file>` – show how a file reference is parsed.

use mdsrv_core::get_file_info;

pub fn run_info(file: &str) {
    let info = get_file_info(file);
    println!("path:       {}", info.path);
    println!("name:       {}", info.name);
    println!("base:       {}", info.base);
    println!("ext:        {}", info.ext);
    println!("dir:        {}", info.dir);
    println!(
        "compressed: {}",
        info.compressed.as_deref().unwrap_or("no")
    );
    println!("protocol:   {}", info.protocol.as_deref().unwrap_or("-"));
}
