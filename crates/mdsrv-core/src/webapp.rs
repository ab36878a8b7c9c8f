//! Launch URL of the bundled web application.

/// Builds `http://<host>:<port>/webapp`, preloading a structure (and a
/// trajectory on top of it) from the server's working-directory root.
///
/// A trajectory without a structure is ignored.
pub fn webapp_url(host: &str, port: u16, struc: Option<&str>, traj: Option<&str>) -> String {
    let mut url = format!("http://{}:{}/webapp", host, port);
    if let Some(struc) = struc.filter(|s| !s.is_empty()) {
        url.push_str("?struc=file://cwd/");
        url.push_str(struc);
        if let Some(traj) = traj.filter(|t| !t.is_empty()) {
            url.push_str("&traj=file://cwd/");
            url.push_str(traj);
        }
    }
    url
}
