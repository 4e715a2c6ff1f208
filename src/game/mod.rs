// src/game/mod.rs
//! ゲームを動かす側。盤面・命令・履歴、それを束ねる Game とセッション。

pub mod board;
pub mod command;
pub mod engine;
pub mod history;
pub mod session;

pub use command::MoveCommand;
pub use engine::Game;
pub use history::History;
pub use session::GameSession;
