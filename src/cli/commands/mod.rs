pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod summary;
