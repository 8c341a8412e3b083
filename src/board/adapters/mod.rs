//! Adapter implementations of board ports.

pub mod memory;
