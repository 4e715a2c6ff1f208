// src/logic/variant.rs
//! 遊べるゲームの種類と、それぞれの盤面の作り方（配り方）だよ。

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{CardStack, StackId, StackKind};
use crate::config::variants::*;
use crate::error::{GameError, GameResult};
use crate::logic::rules::{self, RankScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Bisley,
    BesiegedFortress,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Bisley => "bisley",
            Variant::BesiegedFortress => "besieged-fortress",
        }
    }

    pub fn deck_size(self) -> usize {
        match self {
            Variant::Bisley => BISLEY_DECK_SIZE,
            Variant::BesiegedFortress => FORTRESS_DECK_SIZE,
        }
    }

    pub fn rank_scale(self) -> RankScale {
        match self {
            Variant::Bisley => RankScale::Full,
            Variant::BesiegedFortress => RankScale::Short,
        }
    }

    /// 「組札のどれかへ」のときに探す種類。
    pub fn foundation_kinds(self) -> &'static [StackKind] {
        match self {
            Variant::Bisley => &[StackKind::AceFoundation, StackKind::KingFoundation],
            Variant::BesiegedFortress => &[StackKind::Foundation],
        }
    }

    /// 全部空になればクリア、という場札の種類。
    pub fn tableau_kind(self) -> StackKind {
        match self {
            Variant::Bisley => StackKind::Column,
            Variant::BesiegedFortress => StackKind::Row,
        }
    }

    pub fn is_finished<'a>(self, stacks: impl IntoIterator<Item = &'a CardStack>) -> bool {
        rules::check_win_condition(stacks, self.tableau_kind())
    }

    /// 山札を受け取って、このゲームの形にスタックを並べる。
    /// 返すスタックは ID 順（0 から連番）。
    pub fn deal(self, cards: Vec<Card>) -> GameResult<Vec<CardStack>> {
        self.validate(&cards)?;

        let (aces, rest): (Vec<Card>, Vec<Card>) = cards.into_iter().partition(Card::is_ace);
        let stacks = match self {
            Variant::Bisley => deal_bisley(&aces, rest),
            Variant::BesiegedFortress => deal_besieged_fortress(&aces, rest),
        };
        Ok(stacks)
    }

    fn validate(self, cards: &[Card]) -> GameResult<()> {
        if cards.len() != self.deck_size() {
            return Err(GameError::InvalidInput(format!(
                "invalid number of cards for {}: expected {}, got {}",
                self,
                self.deck_size(),
                cards.len()
            )));
        }

        if let Some(id) = cards.iter().map(|card| card.id).duplicates().next() {
            return Err(GameError::InvalidInput(format!("duplicate card id {}", id)));
        }

        let scale = self.rank_scale();
        if let Some(card) = cards.iter().find(|card| !scale.contains(card.rank)) {
            return Err(GameError::InvalidInput(format!("card {} is not part of the {} deck", card, self)));
        }

        for suit in SUIT_ORDER {
            let aces = cards.iter().filter(|card| card.is_ace() && card.suit == suit).count();
            if aces != 1 {
                return Err(GameError::InvalidInput(format!(
                    "expected exactly one ace of {}, got {}",
                    suit, aces
                )));
            }
        }
        Ok(())
    }
}

/// 0〜3: A 組札（スート順）、4〜7: K 組札（空）、8〜20: 列
fn deal_bisley(aces: &[Card], rest: Vec<Card>) -> Vec<CardStack> {
    let mut stacks = Vec::with_capacity(2 * FOUNDATION_COUNT + BISLEY_COLUMN_COUNT);

    for suit in SUIT_ORDER {
        let ace: Vec<Card> = aces.iter().copied().filter(|ace| ace.suit == suit).collect();
        stacks.push(CardStack::new(next_id(&stacks), StackKind::AceFoundation, Some(suit), ace));
    }
    for suit in SUIT_ORDER {
        stacks.push(CardStack::new(next_id(&stacks), StackKind::KingFoundation, Some(suit), Vec::new()));
    }

    let mut remaining = rest.into_iter();
    for size in BISLEY_COLUMN_SIZES {
        let cards: Vec<Card> = remaining.by_ref().take(size).collect();
        stacks.push(CardStack::new(next_id(&stacks), StackKind::Column, None, cards));
    }
    stacks
}

/// 0〜3: 組札（山札に出てきた A の順）、4〜11: 行
fn deal_besieged_fortress(aces: &[Card], rest: Vec<Card>) -> Vec<CardStack> {
    let mut stacks = Vec::with_capacity(FOUNDATION_COUNT + FORTRESS_ROW_COUNT);

    for ace in aces {
        stacks.push(CardStack::new(next_id(&stacks), StackKind::Foundation, Some(ace.suit), vec![*ace]));
    }
    for chunk in &rest.into_iter().chunks(FORTRESS_ROW_SIZE) {
        stacks.push(CardStack::new(next_id(&stacks), StackKind::Row, None, chunk.collect()));
    }
    stacks
}

fn next_id(stacks: &[CardStack]) -> StackId {
    stacks.len() as StackId
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Variant::Bisley, Variant::BesiegedFortress]
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| GameError::InvalidInput(format!("unknown variant '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::logic::deck::{create_full_deck, create_short_deck};

    #[test]
    fn bisley_layout() {
        let stacks = Variant::Bisley.deal(create_full_deck()).unwrap();

        assert_eq!(stacks.len(), 21);
        for (index, stack) in stacks.iter().enumerate() {
            assert_eq!(stack.id() as usize, index, "ID は 0 からの連番のはず");
        }
        for (stack, suit) in stacks[0..4].iter().zip(SUIT_ORDER) {
            assert_eq!(stack.kind(), StackKind::AceFoundation);
            assert_eq!(stack.suit(), Some(suit));
            assert_eq!(stack.cards().len(), 1);
            assert_eq!(stack.cards()[0].rank, Rank::Ace);
            assert_eq!(stack.cards()[0].suit, suit);
        }
        for (stack, suit) in stacks[4..8].iter().zip(SUIT_ORDER) {
            assert_eq!(stack.kind(), StackKind::KingFoundation);
            assert_eq!(stack.suit(), Some(suit));
            assert!(stack.is_empty());
        }
        let sizes: Vec<usize> = stacks[8..].iter().map(CardStack::len).collect();
        assert_eq!(sizes, BISLEY_COLUMN_SIZES.to_vec());
        assert!(stacks[8..].iter().all(|s| s.kind() == StackKind::Column));
    }

    #[test]
    fn bisley_deals_non_aces_in_deck_order() {
        let deck = create_full_deck();
        let expected: Vec<Card> = deck.iter().copied().filter(|c| !c.is_ace()).collect();
        let stacks = Variant::Bisley.deal(deck).unwrap();

        let dealt: Vec<Card> = stacks[8..].iter().flat_map(|s| s.cards().to_vec()).collect();
        assert_eq!(dealt, expected);
    }

    #[test]
    fn besieged_fortress_layout_follows_ace_order() {
        let mut deck = create_short_deck();
        // スペードの A を先頭に持ってくる
        let spade_ace = deck.iter().position(|c| c.is_ace() && c.suit == Suit::Spades).unwrap();
        deck.swap(0, spade_ace);

        let stacks = Variant::BesiegedFortress.deal(deck).unwrap();

        assert_eq!(stacks.len(), 12);
        assert_eq!(stacks[0].suit(), Some(Suit::Spades));
        assert!(stacks[0..4].iter().all(|s| s.kind() == StackKind::Foundation && s.len() == 1));
        assert!(stacks[4..].iter().all(|s| s.kind() == StackKind::Row && s.len() == FORTRESS_ROW_SIZE));
    }

    #[test]
    fn wrong_card_count_is_invalid_input() {
        let mut deck = create_short_deck();
        deck.pop();
        let err = Variant::BesiegedFortress.deal(deck).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(ref message) if message.contains("expected 36, got 35")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut deck = create_full_deck();
        deck[1].id = deck[0].id;
        assert!(matches!(Variant::Bisley.deal(deck), Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn off_scale_ranks_are_rejected() {
        let mut deck = create_short_deck();
        // 6 を 2 にすり替え
        let six = deck.iter().position(|c| c.rank == Rank::Six).unwrap();
        deck[six].rank = Rank::Two;
        assert!(matches!(Variant::BesiegedFortress.deal(deck), Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn missing_ace_is_rejected() {
        let mut deck = create_full_deck();
        let ace = deck.iter().position(Card::is_ace).unwrap();
        deck[ace].rank = Rank::King;
        assert!(matches!(Variant::Bisley.deal(deck), Err(GameError::InvalidInput(_))));
    }

    #[test]
    fn variant_names_round_trip() {
        for variant in [Variant::Bisley, Variant::BesiegedFortress] {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.name()));
        }
        assert!("klondike".parse::<Variant>().is_err());
    }
}
