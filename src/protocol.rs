// src/protocol.rs

// 表示レイヤー（JS 側）とやり取りするデータの形を定義するよ！💌
// 中身はただのデータ。serde で JSON にしてそのまま渡せるようにしてある。
use serde::{Deserialize, Serialize};

use crate::components::card::{CardId, Rank, Suit};
use crate::components::stack::{StackId, StackKind};

/// 1枚のカードの見え方。`is_interactable` はそのカードが今動かせる唯一のカードかどうか。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardDto {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub is_interactable: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardStackDto {
    pub id: StackId,
    pub kind: StackKind,
    pub cards: Vec<CardDto>,
}

/// 盤面全体のスナップショット。スタックは ID 順に並ぶよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardsDisposition {
    pub stacks: Vec<CardStackDto>,
}

impl CardsDisposition {
    pub fn stack(&self, stack_id: StackId) -> Option<&CardStackDto> {
        self.stacks.iter().find(|stack| stack.id == stack_id)
    }
}

/// カードが動いたよ、のお知らせ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMovedEvent {
    pub card_id: CardId,
    pub from_stack_id: StackId,
    pub to_stack_id: StackId,
}
