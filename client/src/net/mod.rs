//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts gloo-net to `booking::Transport`; request building and
//! response decoding stay in the `booking` crate.

pub mod transport;
