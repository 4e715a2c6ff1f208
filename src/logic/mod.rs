// src/logic/mod.rs
//! ゲームのルールまわり。盤面の状態は持たない、ただの関数たちだよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
pub mod variant;
