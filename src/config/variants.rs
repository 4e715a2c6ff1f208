// src/config/variants.rs
//! ゲームごとの盤面の形を決める定数だよ！
//! 枚数、スタックの数、配り方など。

use crate::components::card::{Suit, ALL_SUITS};

/// 組札を作るときのスートの順番。
pub const SUIT_ORDER: [Suit; 4] = ALL_SUITS;

pub const FOUNDATION_COUNT: usize = 4;

// --- Bisley ---
pub const BISLEY_DECK_SIZE: usize = 52;
pub const BISLEY_COLUMN_COUNT: usize = 13;
/// 各列に配る枚数。最初の4列は3枚、残り9列は4枚（A を抜いた48枚）。
pub const BISLEY_COLUMN_SIZES: [usize; BISLEY_COLUMN_COUNT] = [3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4];

// --- Besieged Fortress ---
pub const FORTRESS_DECK_SIZE: usize = 36;
pub const FORTRESS_ROW_COUNT: usize = 8;
pub const FORTRESS_ROW_SIZE: usize = 4;
