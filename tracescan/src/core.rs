// src/core.rs
pub mod scanner;
