// src/game/board.rs

use std::collections::HashMap;

use crate::components::card::{Card, CardId};
use crate::components::stack::{CardStack, StackId};
use crate::error::{GameError, GameResult};
use crate::protocol::CardsDisposition;

/// 盤面。全スタックと「カード → スタック」の索引を持つよ。
///
/// 索引はスタックの中身から作れるもので、正はあくまでスタック側。
/// カードの中身を書き換えるのは `transfer` だけなので、索引もそこで一緒に直す。
#[derive(Debug, Clone)]
pub struct Board {
    stacks: Vec<CardStack>,
    card_index: HashMap<CardId, StackId>,
}

impl Board {
    pub fn new(mut stacks: Vec<CardStack>) -> Self {
        stacks.sort_by_key(CardStack::id);
        let card_index = stacks
            .iter()
            .flat_map(|stack| stack.cards().iter().map(move |card| (card.id, stack.id())))
            .collect();
        Self { stacks, card_index }
    }

    /// ID 順のスタック一覧。
    pub fn stacks(&self) -> &[CardStack] {
        &self.stacks
    }

    pub fn stack(&self, stack_id: StackId) -> Option<&CardStack> {
        self.position(stack_id).map(|index| &self.stacks[index])
    }

    /// カードが今いるスタック。
    pub fn stack_of(&self, card_id: CardId) -> Option<StackId> {
        self.card_index.get(&card_id).copied()
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.stack_of(card_id)
            .and_then(|stack_id| self.stack(stack_id))
            .and_then(|stack| stack.find(card_id))
    }

    pub fn is_available(&self, card_id: CardId) -> bool {
        self.stack_of(card_id)
            .and_then(|stack_id| self.stack(stack_id))
            .is_some_and(|stack| stack.is_available(card_id))
    }

    /// `from` の一番上のカードを `to` へ移す。
    ///
    /// 検査は全部先にやるので、失敗したときは盤面は何も変わっていない。
    /// `validate` が false のときは `to` のルールを見ない（undo/redo の再生）。
    pub fn transfer(&mut self, from: StackId, to: StackId, validate: bool) -> GameResult<Card> {
        let from_index = self.position(from).ok_or_else(|| unknown_stack(from))?;
        let to_index = self.position(to).ok_or_else(|| unknown_stack(to))?;

        let card = *self.stacks[from_index]
            .top()
            .ok_or(GameError::EmptyStack { stack_id: from })?;
        if from_index == to_index || (validate && !self.stacks[to_index].can_accept(&card)) {
            return Err(GameError::IllegalMove { card_id: card.id, stack_id: Some(to) });
        }

        let card = self.stacks[from_index].pop()?;
        self.stacks[to_index].push(card, false)?;
        self.card_index.insert(card.id, to);
        Ok(card)
    }

    pub fn disposition(&self) -> CardsDisposition {
        CardsDisposition { stacks: self.stacks.iter().map(CardStack::to_dto).collect() }
    }

    fn position(&self, stack_id: StackId) -> Option<usize> {
        self.stacks.binary_search_by_key(&stack_id, CardStack::id).ok()
    }
}

fn unknown_stack(stack_id: StackId) -> GameError {
    GameError::InvalidInput(format!("unknown stack {}", stack_id))
}
