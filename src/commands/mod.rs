pub mod analyze;
pub mod classify;
pub mod init_config;
pub mod orfs;
pub mod report;
pub mod stats;
