//! Postgres persistence for tzsync: the full-refresh reference table, the
//! append-only interval history, and the error sink.

pub mod db;
pub mod error;
pub mod migrate;
pub mod model;
