//! Shared configuration, errors, and domain records for tzsync.

pub mod config;
pub mod error;
pub mod record;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod record_tests;
