// src/components/mod.rs

pub mod card;
pub mod game_state;
pub mod stack;
