//! # Utilities

pub mod path_utils;
