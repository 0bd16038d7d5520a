//! Utility module

pub mod parse;
