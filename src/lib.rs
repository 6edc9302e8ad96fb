//! Integration test harness for the linkint workspace.
//!
//! The tests under `tests/` exercise `linkint-core` and `linkint-memory`
//! together; this crate has no code of its own.
