//! Static front-end serving. The front end is an external collaborator;
//! when the configured directory exists it is mounted as the last-resort
//! handler so the API prefix always wins.

use actix_files::Files;
use actix_web::web;
use std::path::Path;

pub(crate) fn enabled(static_dir: &str) -> bool {
    !static_dir.is_empty() && Path::new(static_dir).is_dir()
}

pub(crate) fn configure_ui_routes(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.service(Files::new("/", static_dir).index_file("index.html"));
}
