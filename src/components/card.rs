// src/components/card.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// カードの ID。ゲーム中ずっと変わらない一意な番号だよ。
pub type CardId = u32;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順は Clubs, Diamonds, Hearts, Spades。組札を作るときもこの順番！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// カードの色（赤か黒か）だよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    pub fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    /// 表記用の一文字 (c, d, h, s)。
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| GameError::InvalidInput(format!("unknown suit '{}'", s)))
    }
}

/// カードのランク（数字）だよ！ A, 2, 3, ..., K
///
/// 数値としては A=1 ... K=13。短いデッキでの「隣り合い」は
/// `logic::rules::common::RankScale` が決めるので、ここは素直な順番だけ持つよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// 36枚デッキ（A, 6〜K）で使うランク。
pub const SHORT_DECK_RANKS: [Rank; 9] = [
    Rank::Ace,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        ALL_RANKS.iter().copied().find(|rank| rank.symbol() == symbol)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Rank {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| GameError::InvalidInput(format!("unknown rank '{}'", s)))
    }
}

/// カードそのものだよ！🃏 一度作ったら変わらない値。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank }
    }

    /// "Th" みたいな表記からカードを作る。ID は呼び出し側が決めるよ。
    pub fn parse(id: CardId, notation: &str) -> Result<Self, GameError> {
        let mut chars = notation.chars();
        let (rank, suit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (Rank::from_symbol(r), Suit::from_symbol(s)),
            _ => (None, None),
        };
        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Self::new(id, suit, rank)),
            _ => Err(GameError::InvalidInput(format!("unknown card notation '{}'", notation))),
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_notation_round_trip() {
        let card = Card::new(10, Suit::Hearts, Rank::Ten);
        assert_eq!(card.to_string(), "Th");
        assert_eq!(Card::parse(10, "Th").unwrap(), card);
        assert_eq!(Card::parse(1, "Ac").unwrap().suit, Suit::Clubs);
    }

    #[test]
    fn bad_notation_is_invalid_input() {
        for bad in ["", "T", "1h", "Tx", "Thh"] {
            assert!(
                matches!(Card::parse(1, bad), Err(GameError::InvalidInput(_))),
                "'{}' は読めないはず",
                bad
            );
        }
        assert!("x".parse::<Suit>().is_err());
        assert!("10".parse::<Rank>().is_err());
        assert_eq!("Q".parse::<Rank>().unwrap(), Rank::Queen);
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Hearts.color(), CardColor::Red);
        assert_eq!(Suit::Diamonds.color(), CardColor::Red);
        assert_eq!(Suit::Clubs.color(), CardColor::Black);
        assert_eq!(Suit::Spades.color(), CardColor::Black);
    }
}
