pub mod error_log;
pub mod interval;
pub mod zone;
