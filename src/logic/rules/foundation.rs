//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::{is_one_higher, is_one_lower, RankScale};
use crate::components::card::{Card, Rank, Suit};

/// Bisley の A 組札。A から上へ同じスートで積む。
/// A は最初から置いてあるので、空のときは何も受け付けないよ。
pub fn can_push_to_ace_foundation(suit: Option<Suit>, top: Option<&Card>, card: &Card) -> bool {
    let result = match top {
        Some(top) => Some(card.suit) == suit && is_one_higher(RankScale::Full, card.rank, top.rank),
        None => false,
    };
    debug!("[Foundation Rule] {} onto ace foundation ({:?}) -> {}", card, top.map(|c| c.to_string()), result);
    result
}

/// Bisley の K 組札。空なら同じスートの K だけ、あとは1つずつ下へ。
pub fn can_push_to_king_foundation(suit: Option<Suit>, top: Option<&Card>, card: &Card) -> bool {
    if Some(card.suit) != suit {
        return false;
    }
    match top {
        None => card.rank == Rank::King,
        Some(top) => is_one_lower(RankScale::Full, card.rank, top.rank),
    }
}

/// Besieged Fortress の組札。同じスートで短いデッキのものさしで1つ上。
/// A を引き抜かれて空になったときは、そのスートの A だけ戻せる。
pub fn can_push_to_fortress_foundation(suit: Option<Suit>, top: Option<&Card>, card: &Card) -> bool {
    if Some(card.suit) != suit {
        return false;
    }
    match top {
        None => card.is_ace(),
        Some(top) => is_one_higher(RankScale::Short, card.rank, top.rank),
    }
}
