pub mod config;
pub mod logging;
pub mod paths;

pub mod catalog;
pub mod http;
pub mod installer;
pub mod retry;
pub mod url_model;
