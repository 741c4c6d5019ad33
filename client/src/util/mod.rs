//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys glue out of pages and components.

pub mod storage;
