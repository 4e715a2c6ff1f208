// src/app/mod.rs
//! JavaScript から触る入り口だよ！ 中身は全部 GameSession に任せてる。

pub mod game_app;
