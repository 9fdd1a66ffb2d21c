pub mod error_log;
pub mod interval;
pub mod zone;

#[cfg(test)]
mod error_log_tests;
