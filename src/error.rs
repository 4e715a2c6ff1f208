// src/error.rs
//! エンジン全体で使うエラー型だよ。
//!
//! どれも「呼び出し側が can_* で確認してから命令を出す」約束を破ったときに返るもの。
//! ユーザーに見せてリトライさせる種類のエラーじゃないよ。

use thiserror::Error;

use crate::components::card::CardId;
use crate::components::stack::StackId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// カードが動かせない、または移動先が受け付けない。
    /// `stack_id` が `None` なのは「指定された種類のスタックがどれも受け付けなかった」とき。
    #[error("illegal move: card {card_id} cannot go to {}", describe_target(.stack_id))]
    IllegalMove {
        card_id: CardId,
        stack_id: Option<StackId>,
    },

    #[error("card stack {stack_id} is empty")]
    EmptyStack { stack_id: StackId },

    #[error("no more commands in history")]
    NoHistory,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// イベントハンドラの中から命令を出そうとした。
    #[error("command issued from inside an event handler")]
    Reentrant,

    #[error("game is not started")]
    NotStarted,
}

fn describe_target(stack_id: &Option<StackId>) -> String {
    match stack_id {
        Some(id) => format!("stack {}", id),
        None => "any stack of the requested kinds".to_string(),
    }
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_card_and_stack() {
        let err = GameError::IllegalMove { card_id: 7, stack_id: Some(3) };
        assert_eq!(err.to_string(), "illegal move: card 7 cannot go to stack 3");

        let err = GameError::IllegalMove { card_id: 7, stack_id: None };
        assert!(err.to_string().ends_with("any stack of the requested kinds"));

        assert_eq!(
            GameError::InvalidInput("expected 36 cards, got 35".into()).to_string(),
            "invalid input: expected 36 cards, got 35"
        );
    }
}
