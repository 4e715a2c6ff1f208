// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::components::card::{Card, CardId, Rank, ALL_RANKS, SHORT_DECK_RANKS};
use crate::config::variants::SUIT_ORDER;
use crate::logic::variant::Variant;

/// 52枚のデッキを作るよ！🃏 ID は 1 から、スート順・ランク昇順。
pub fn create_full_deck() -> Vec<Card> {
    create_cards(&ALL_RANKS)
}

/// 36枚のデッキ（A, 6〜K）。
pub fn create_short_deck() -> Vec<Card> {
    create_cards(&SHORT_DECK_RANKS)
}

/// ゲームの種類に合ったデッキ（まだシャッフルしてない）。
pub fn create_deck(variant: Variant) -> Vec<Card> {
    match variant {
        Variant::Bisley => create_full_deck(),
        Variant::BesiegedFortress => create_short_deck(),
    }
}

fn create_cards(ranks: &[Rank]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(SUIT_ORDER.len() * ranks.len());
    let mut id: CardId = 1;
    for suit in SUIT_ORDER {
        for &rank in ranks {
            deck.push(Card::new(id, suit, rank));
            id += 1;
        }
    }
    deck
}

/// カードデッキをシャッフルする。
pub fn shuffle_deck(deck: &mut [Card]) {
    let mut rng = thread_rng();
    shuffle_deck_with(deck, &mut rng);
}

/// 乱数生成器を指定してシャッフル。テストでシードを固定したいとき用。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
