//! Plot utilities

pub mod colors;
