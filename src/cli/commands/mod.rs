pub mod backup;
pub mod config;
pub mod db;
pub mod entity;
pub mod history;
pub mod init;
pub mod log;
pub mod seed;
pub mod stats;
