//! Command handlers

pub mod minify;
