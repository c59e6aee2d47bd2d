pub mod bag;
pub mod brew;
pub mod config;
pub mod init;
pub mod log;
