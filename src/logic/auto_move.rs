// src/logic/auto_move.rs
//! 「この種類のスタックのどれかへ」動かすときの行き先探しだよ！🪄

use itertools::Itertools;
use log::debug;

use crate::components::card::Card;
use crate::components::stack::{CardStack, StackId, StackKind};

/// `kinds` に入っている種類のスタックを ID 順に見て、`card` を受け付ける最初のものを返す。
/// すでにそのカードが入っているスタックは候補にしない。
pub fn find_target_stack<'a>(
    stacks: impl IntoIterator<Item = &'a CardStack>,
    card: &Card,
    kinds: &[StackKind],
) -> Option<StackId> {
    let found = stacks
        .into_iter()
        .filter(|stack| kinds.contains(&stack.kind()))
        .find(|stack| !stack.contains(card.id) && stack.can_accept(card))
        .map(CardStack::id);

    debug!("[AutoMove] {} -> [{}]: {:?}", card, kinds.iter().join(", "), found);
    found
}
