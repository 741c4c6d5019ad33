//! Screen-level components.
//!
//! ARCHITECTURE
//! ============
//! Each page reads `AppContext`, renders one screen, and delegates state
//! changes to `state::actions`.

pub mod login;
pub mod movies;
pub mod shows;
