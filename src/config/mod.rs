// src/config/mod.rs

pub mod variants;
