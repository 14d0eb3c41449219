//! Database entities.

pub mod threads;
