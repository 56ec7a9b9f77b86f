//! rinex-nav lib test modules
pub mod toolkit;
