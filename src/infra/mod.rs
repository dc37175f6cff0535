pub mod audit_log;
pub mod clock;
pub mod import;
