// src/game/command.rs

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::stack::StackId;

/// 1回分の移動の記録。ただのデータで、解釈するのは `Game::apply` / `Game::revert`。
///
/// 進める（apply）: `from_stack_id` → `to_stack_id`
/// 戻す（revert）: `to_stack_id` → `from_stack_id`（ルールは見ない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCommand {
    pub card_id: CardId,
    pub from_stack_id: StackId,
    pub to_stack_id: StackId,
}

impl MoveCommand {
    pub fn new(card_id: CardId, from_stack_id: StackId, to_stack_id: StackId) -> Self {
        Self { card_id, from_stack_id, to_stack_id }
    }

    /// 向きを逆にしたもの。
    pub fn inverse(&self) -> Self {
        Self::new(self.card_id, self.to_stack_id, self.from_stack_id)
    }
}
