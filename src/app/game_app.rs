// src/app/game_app.rs

use std::rc::Rc;

use js_sys::{Error, Function};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::card::{Card, CardId};
use crate::components::stack::{StackId, StackKind};
use crate::error::GameError;
use crate::event::SubscriptionId;
use crate::game::session::GameSession;
use crate::logic::variant::Variant;

/// JS 側に渡すアプリ本体。
///
/// 盤面は JSON 文字列で渡すよ（`CardsDisposition` の形）。
/// 失敗した命令は `Error` を投げる。
///
/// JS のリスナーが例外を投げても、ここで受け止めてログに出すだけ。
/// 残りのリスナーへの通知も、呼び出した命令もそのまま最後まで進む。
/// Rust 側の `EventHandler` 同士のあいだでは panic はそのまま伝わるので、ここだけ違う。
/// 購読 ID は JS の number（u32）。
#[wasm_bindgen]
pub struct SolitaireApp {
    session: Rc<GameSession>,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// `"bisley"` か `"besieged-fortress"`。
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str) -> Result<SolitaireApp, JsValue> {
        let variant: Variant = variant.parse().map_err(to_js_error)?;
        info!("SolitaireApp: created for {}", variant);
        Ok(Self { session: Rc::new(GameSession::new(variant)) })
    }

    pub fn variant(&self) -> String {
        self.session.variant().to_string()
    }

    pub fn start_shuffled(&self) -> Result<(), JsValue> {
        self.session.start_shuffled().map_err(to_js_error)
    }

    /// `[{"id":1,"suit":"Clubs","rank":"Ace"}, ...]` の形の山札で始める。
    pub fn start_with_cards_json(&self, cards_json: &str) -> Result<(), JsValue> {
        let cards: Vec<Card> = serde_json::from_str(cards_json)
            .map_err(|e| to_js_error(GameError::InvalidInput(e.to_string())))?;
        self.session.start(cards).map_err(to_js_error)
    }

    /// `["Ac", "Th", ...]` みたいな表記の山札で始める。ID は 1 から順に振るよ。
    pub fn start_with_notation(&self, notation: Vec<String>) -> Result<(), JsValue> {
        let cards = notation
            .iter()
            .zip(1..)
            .map(|(text, id)| Card::parse(id, text))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_js_error)?;
        self.session.start(cards).map_err(to_js_error)
    }

    pub fn disposition_json(&self) -> Result<String, JsValue> {
        let disposition = self.session.disposition().map_err(to_js_error)?;
        serde_json::to_string(&disposition).map_err(|e| {
            error!("SolitaireApp: failed to serialize disposition: {}", e);
            JsValue::from(Error::new(&e.to_string()))
        })
    }

    pub fn can_move_card(&self, card_id: CardId) -> bool {
        self.session.can_move_card(card_id)
    }

    pub fn can_move_card_to_stack(&self, card_id: CardId, stack_id: StackId) -> bool {
        self.session.can_move_card_to_stack(card_id, stack_id)
    }

    pub fn can_move_card_to_card(&self, card_id: CardId, target_card_id: CardId) -> bool {
        self.session.can_move_card_to_card(card_id, target_card_id)
    }

    pub fn can_move_card_to_any_foundation(&self, card_id: CardId) -> bool {
        self.session.can_move_card_to_any_foundation(card_id)
    }

    /// `kinds` は `["Column", "Row"]` みたいな JSON 配列。
    pub fn can_move_card_to_any_of_kinds(&self, card_id: CardId, kinds_json: &str) -> Result<bool, JsValue> {
        let kinds = parse_kinds(kinds_json)?;
        Ok(self.session.can_move_card_to_any_of_kinds(card_id, &kinds))
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn move_card_to_stack(&self, card_id: CardId, stack_id: StackId) -> Result<(), JsValue> {
        self.session.move_card_to_stack(card_id, stack_id).map_err(to_js_error)
    }

    pub fn move_card_to_card(&self, card_id: CardId, target_card_id: CardId) -> Result<(), JsValue> {
        self.session.move_card_to_card(card_id, target_card_id).map_err(to_js_error)
    }

    pub fn move_card_to_any_foundation(&self, card_id: CardId) -> Result<(), JsValue> {
        self.session.move_card_to_any_foundation(card_id).map_err(to_js_error)
    }

    pub fn move_card_to_any_of_kinds(&self, card_id: CardId, kinds_json: &str) -> Result<(), JsValue> {
        let kinds = parse_kinds(kinds_json)?;
        self.session.move_card_to_any_of_kinds(card_id, &kinds).map_err(to_js_error)
    }

    pub fn undo(&self) -> Result<(), JsValue> {
        self.session.undo().map_err(to_js_error)
    }

    pub fn redo(&self) -> Result<(), JsValue> {
        self.session.redo().map_err(to_js_error)
    }

    /// `callback(eventJson)` で呼ばれる。返り値は購読 ID。
    pub fn on_card_moved(&self, callback: Function) -> SubscriptionId {
        self.session.on_card_moved().subscribe(move |event| match serde_json::to_string(event) {
            Ok(json) => call_js(&callback, Some(JsValue::from_str(&json))),
            Err(e) => error!("SolitaireApp: failed to serialize card-moved event: {}", e),
        })
    }

    pub fn on_game_finished(&self, callback: Function) -> SubscriptionId {
        self.session.on_game_finished().subscribe(move |_| call_js(&callback, None))
    }

    pub fn on_history_changed(&self, callback: Function) -> SubscriptionId {
        self.session.on_history_changed().subscribe(move |_| call_js(&callback, None))
    }

    pub fn unsubscribe_card_moved(&self, id: SubscriptionId) -> bool {
        self.session.on_card_moved().unsubscribe(id)
    }

    pub fn unsubscribe_game_finished(&self, id: SubscriptionId) -> bool {
        self.session.on_game_finished().unsubscribe(id)
    }

    pub fn unsubscribe_history_changed(&self, id: SubscriptionId) -> bool {
        self.session.on_history_changed().unsubscribe(id)
    }
}

impl SolitaireApp {
    /// Rust 側から同じセッションを触りたいとき用。
    pub fn session(&self) -> Rc<GameSession> {
        Rc::clone(&self.session)
    }
}

fn parse_kinds(kinds_json: &str) -> Result<Vec<StackKind>, JsValue> {
    serde_json::from_str(kinds_json).map_err(|e| to_js_error(GameError::InvalidInput(e.to_string())))
}

// JS のコールバックが投げても、Rust 側の通知は最後まで続ける
fn call_js(callback: &Function, argument: Option<JsValue>) {
    let result = match argument {
        Some(argument) => callback.call1(&JsValue::NULL, &argument),
        None => callback.call0(&JsValue::NULL),
    };
    if let Err(e) = result {
        error!("SolitaireApp: listener threw: {:?}", e);
    }
}

fn to_js_error(err: GameError) -> JsValue {
    JsValue::from(Error::new(&err.to_string()))
}
