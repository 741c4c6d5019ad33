//! Reusable UI components.

pub mod seat_map;
