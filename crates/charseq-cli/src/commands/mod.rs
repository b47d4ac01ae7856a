pub mod config_loader;
pub mod dump;
pub mod exec;
pub mod logging;
pub mod session;
pub mod trace;

#[cfg(test)]
mod config_loader_tests;
