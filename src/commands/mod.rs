//! CLI commands for medrec

pub mod check;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod list;
pub mod recommend;
