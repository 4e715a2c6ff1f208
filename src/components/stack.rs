// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Suit};
use crate::error::{GameError, GameResult};
use crate::logic::rules;
use crate::protocol::{CardDto, CardStackDto};

/// スタックの ID。ゲームの中で一意だよ。
pub type StackId = u32;

/// スタックの種類だよ。種類ごとにルール（何を受け付けるか）が1つ決まる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// Bisley: A から上へ積む組札
    AceFoundation,
    /// Bisley: K から下へ積む組札
    KingFoundation,
    /// Bisley: 場札の列
    Column,
    /// Besieged Fortress: 組札
    Foundation,
    /// Besieged Fortress: 場札の行
    Row,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// カードを順番に積んだ入れ物。
///
/// カードはこのスタックだけが持つ（同じカードが2つのスタックに入ることはない）。
/// 一番上（最後の要素）のカードだけが動かせるよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStack {
    id: StackId,
    kind: StackKind,
    /// 組札のスート。場札は `None`。
    suit: Option<Suit>,
    cards: Vec<Card>,
}

impl CardStack {
    pub fn new(id: StackId, kind: StackKind, suit: Option<Suit>, cards: Vec<Card>) -> Self {
        Self { id, kind, suit, cards }
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 受け付けるかどうかの判定。種類ごとのルール表に任せるよ。
    /// もう中にいるカードは、一番上でなくても受け付けない。
    pub fn can_accept(&self, card: &Card) -> bool {
        !self.contains(card.id) && rules::can_accept(self.kind, self.suit, self.top(), card)
    }

    /// `card_id` がこのスタックの一番上にあって、引き抜ける種類なら true。
    pub fn is_available(&self, card_id: CardId) -> bool {
        rules::allows_withdrawal(self.kind) && self.top().is_some_and(|top| top.id == card_id)
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == card_id)
    }

    pub fn find(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    /// カードを一番上に積む。`validate` が false なのは undo/redo の再生だけ。
    pub fn push(&mut self, card: Card, validate: bool) -> GameResult<()> {
        if validate && !self.can_accept(&card) {
            return Err(GameError::IllegalMove { card_id: card.id, stack_id: Some(self.id) });
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn pop(&mut self) -> GameResult<Card> {
        self.cards.pop().ok_or(GameError::EmptyStack { stack_id: self.id })
    }

    pub fn to_dto(&self) -> CardStackDto {
        CardStackDto {
            id: self.id,
            kind: self.kind,
            cards: self
                .cards
                .iter()
                .map(|card| CardDto {
                    id: card.id,
                    suit: card.suit,
                    rank: card.rank,
                    is_interactable: self.is_available(card.id),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;

    fn card(id: CardId, suit: Suit, rank: Rank) -> Card {
        Card::new(id, suit, rank)
    }

    #[test]
    fn push_and_pop() {
        let mut column = CardStack::new(8, StackKind::Column, None, vec![card(1, Suit::Hearts, Rank::Five)]);

        column.push(card(2, Suit::Hearts, Rank::Six), true).unwrap();
        assert_eq!(column.top().map(|c| c.id), Some(2));

        let err = column.push(card(3, Suit::Spades, Rank::Seven), true).unwrap_err();
        assert_eq!(err, GameError::IllegalMove { card_id: 3, stack_id: Some(8) });

        // 検証なしなら何でも積める（undo 用）
        column.push(card(3, Suit::Spades, Rank::Seven), false).unwrap();
        assert_eq!(column.len(), 3);

        assert_eq!(column.pop().unwrap().id, 3);
        assert_eq!(column.pop().unwrap().id, 2);
        assert_eq!(column.pop().unwrap().id, 1);
        assert_eq!(column.pop().unwrap_err(), GameError::EmptyStack { stack_id: 8 });
    }

    #[test]
    fn availability_is_top_card_only() {
        let column = CardStack::new(
            8,
            StackKind::Column,
            None,
            vec![card(1, Suit::Hearts, Rank::Five), card(2, Suit::Clubs, Rank::Nine)],
        );
        assert!(column.is_available(2));
        assert!(!column.is_available(1));
        assert!(!column.is_available(99));
        assert!(column.contains(1));
        assert_eq!(column.find(1).map(|c| c.rank), Some(Rank::Five));
        assert!(column.find(99).is_none());

        let empty = CardStack::new(9, StackKind::Column, None, vec![]);
        assert!(!empty.is_available(1));
    }

    #[test]
    fn cards_already_inside_are_never_accepted() {
        // 列 [4♣, 3♣, 2♣]。3♣ は 2♣ の隣だけど、もう中にいる
        let mut column = CardStack::new(
            8,
            StackKind::Column,
            None,
            vec![card(4, Suit::Clubs, Rank::Four), card(3, Suit::Clubs, Rank::Three), card(2, Suit::Clubs, Rank::Two)],
        );
        let three = card(3, Suit::Clubs, Rank::Three);
        assert!(column.contains(3));
        assert!(!column.can_accept(&three));
        assert_eq!(
            column.push(three, true).unwrap_err(),
            GameError::IllegalMove { card_id: 3, stack_id: Some(8) }
        );
        assert_eq!(column.len(), 3);

        // 同じ面でも別のカードなら OK
        assert!(column.can_accept(&card(30, Suit::Clubs, Rank::Three)));
    }

    #[test]
    fn bisley_foundations_never_give_cards_back() {
        let foundation = CardStack::new(
            0,
            StackKind::AceFoundation,
            Some(Suit::Clubs),
            vec![card(1, Suit::Clubs, Rank::Ace), card(2, Suit::Clubs, Rank::Two)],
        );
        assert!(!foundation.is_available(2));
    }

    #[test]
    fn dto_marks_only_the_movable_card() {
        let row = CardStack::new(
            4,
            StackKind::Row,
            None,
            vec![card(1, Suit::Hearts, Rank::King), card(2, Suit::Clubs, Rank::Queen)],
        );
        let dto = row.to_dto();
        assert_eq!(dto.id, 4);
        assert_eq!(dto.kind, StackKind::Row);
        assert_eq!(
            dto.cards.iter().map(|c| c.is_interactable).collect::<Vec<_>>(),
            vec![false, true]
        );
    }
}
