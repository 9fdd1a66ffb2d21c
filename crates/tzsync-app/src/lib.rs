//! Run orchestration for the tzsync binary.

pub mod run;
