// src/lib.rs

//! ソリティア系ゲームのルールエンジンだよ🃏
//!
//! 表示（JS 側）とは切り離してあって、こっちが持つのは盤面とルールと履歴だけ。
//! 盤面が変わるたびにイベントで知らせる。
//!
//! - `components`: カード・スタックみたいな素材
//! - `logic`: ルール判定、配り方、山札づくり
//! - `game`: 盤面を動かす Game と、履歴込みの GameSession
//! - `app`: wasm-bindgen で JS に見せる入り口

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod logic;
pub mod protocol;

pub use components::card::{Card, CardId, Rank, Suit};
pub use components::game_state::GameStatus;
pub use components::stack::{CardStack, StackId, StackKind};
pub use error::{GameError, GameResult};
pub use event::{EventHandler, SubscriptionId};
pub use game::{Game, GameSession, History, MoveCommand};
pub use logic::variant::Variant;
pub use protocol::{CardMovedEvent, CardsDisposition};

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
