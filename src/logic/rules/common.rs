//! ルール判定で共通して使うヘルパーを置くよ。

use serde::{Deserialize, Serialize};

use crate::components::card::Rank;

/// ランクの「隣り合い」を測るものさしだよ。
///
/// - `Full`: A=1, 2=2, ..., K=13
/// - `Short`: 36枚デッキ用。A=1, 6=2, 7=3, ..., K=9（A と 6 が隣り合う！）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankScale {
    Full,
    Short,
}

impl RankScale {
    /// このものさしでの位置。ものさしに載らないランクは `None`。
    pub fn position(self, rank: Rank) -> Option<i8> {
        let value = rank.value() as i8;
        match self {
            RankScale::Full => Some(value),
            RankScale::Short => match rank {
                Rank::Ace => Some(1),
                Rank::Two | Rank::Three | Rank::Four | Rank::Five => None,
                _ => Some(value - 4),
            },
        }
    }

    pub fn contains(self, rank: Rank) -> bool {
        self.position(rank).is_some()
    }
}

/// `left - right` をものさしの上で計算する。どちらかが載らなければ `None`。
pub fn rank_difference(scale: RankScale, left: Rank, right: Rank) -> Option<i8> {
    Some(scale.position(left)? - scale.position(right)?)
}

/// `card` が `top` のちょうど1つ上？
pub(crate) fn is_one_higher(scale: RankScale, card: Rank, top: Rank) -> bool {
    rank_difference(scale, card, top) == Some(1)
}

/// `card` が `top` のちょうど1つ下？
pub(crate) fn is_one_lower(scale: RankScale, card: Rank, top: Rank) -> bool {
    rank_difference(scale, card, top) == Some(-1)
}
