// src/game/session.rs

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use rand::Rng;

use crate::components::card::{Card, CardId};
use crate::components::game_state::GameStatus;
use crate::components::stack::{StackId, StackKind};
use crate::error::{GameError, GameResult};
use crate::event::EventHandler;
use crate::game::command::MoveCommand;
use crate::game::engine::Game;
use crate::game::history::History;
use crate::logic::deck;
use crate::logic::variant::Variant;
use crate::protocol::{CardMovedEvent, CardsDisposition};

/// 遊ぶ側から見た入り口。今のゲームと履歴と、3つの通知先をまとめて持つよ。
///
/// 通知先はセッションが持っていて、`start` で新しいゲームを作るたびに同じものを渡す。
/// だから購読は新しいゲームになっても生きたまま。
#[derive(Debug)]
pub struct GameSession {
    variant: Variant,
    game: RefCell<Option<Rc<Game>>>,
    history: History<MoveCommand>,
    on_card_moved: EventHandler<CardMovedEvent>,
    on_game_finished: EventHandler<()>,
}

impl GameSession {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            game: RefCell::new(None),
            history: History::new(),
            on_card_moved: EventHandler::new(),
            on_game_finished: EventHandler::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn on_card_moved(&self) -> &EventHandler<CardMovedEvent> {
        &self.on_card_moved
    }

    pub fn on_game_finished(&self) -> &EventHandler<()> {
        &self.on_game_finished
    }

    pub fn on_history_changed(&self) -> &EventHandler<()> {
        self.history.on_history_changed()
    }

    /// 渡されたカードで新しいゲームを始める。
    /// カードがおかしければ今のゲームも履歴もそのまま。
    pub fn start(&self, cards: Vec<Card>) -> GameResult<()> {
        self.ensure_idle()?;
        let game = Game::with_events(
            self.variant,
            cards,
            self.on_card_moved.clone(),
            self.on_game_finished.clone(),
        )?;
        *self.game.borrow_mut() = Some(Rc::new(game));
        self.history.clear()?;
        info!("GameSession: new {} game 🎉", self.variant);
        Ok(())
    }

    pub fn start_shuffled(&self) -> GameResult<()> {
        let mut cards = deck::create_deck(self.variant);
        deck::shuffle_deck(&mut cards);
        self.start(cards)
    }

    pub fn start_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GameResult<()> {
        let mut cards = deck::create_deck(self.variant);
        deck::shuffle_deck_with(&mut cards, rng);
        self.start(cards)
    }

    pub fn is_started(&self) -> bool {
        self.game.borrow().is_some()
    }

    // --- 問い合わせ ---

    pub fn disposition(&self) -> GameResult<CardsDisposition> {
        Ok(self.game()?.disposition())
    }

    pub fn status(&self) -> GameResult<GameStatus> {
        Ok(self.game()?.status())
    }

    pub fn can_move_card(&self, card_id: CardId) -> bool {
        self.game().is_ok_and(|game| game.can_move(card_id))
    }

    pub fn can_move_card_to_stack(&self, card_id: CardId, stack_id: StackId) -> bool {
        self.game().is_ok_and(|game| game.can_move_to_stack(card_id, stack_id))
    }

    /// `target_card_id` が今いるスタックへ動かせるか。
    pub fn can_move_card_to_card(&self, card_id: CardId, target_card_id: CardId) -> bool {
        self.game().is_ok_and(|game| {
            game.stack_of(target_card_id)
                .is_some_and(|stack_id| game.can_move_to_stack(card_id, stack_id))
        })
    }

    pub fn can_move_card_to_any_foundation(&self, card_id: CardId) -> bool {
        self.can_move_card_to_any_of_kinds(card_id, self.variant.foundation_kinds())
    }

    pub fn can_move_card_to_any_of_kinds(&self, card_id: CardId, kinds: &[StackKind]) -> bool {
        self.game().is_ok_and(|game| game.can_move_to_any_of_kinds(card_id, kinds))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_finished(&self) -> bool {
        self.game().is_ok_and(|game| game.is_finished())
    }

    // --- 命令 ---

    pub fn move_card_to_stack(&self, card_id: CardId, stack_id: StackId) -> GameResult<()> {
        self.ensure_idle()?;
        let command = self.game()?.move_to_stack(card_id, stack_id)?;
        self.history.push(command)
    }

    pub fn move_card_to_card(&self, card_id: CardId, target_card_id: CardId) -> GameResult<()> {
        self.ensure_idle()?;
        let game = self.game()?;
        let stack_id = game
            .stack_of(target_card_id)
            .ok_or(GameError::IllegalMove { card_id, stack_id: None })?;
        let command = game.move_to_stack(card_id, stack_id)?;
        self.history.push(command)
    }

    pub fn move_card_to_any_foundation(&self, card_id: CardId) -> GameResult<()> {
        self.move_card_to_any_of_kinds(card_id, self.variant.foundation_kinds())
    }

    pub fn move_card_to_any_of_kinds(&self, card_id: CardId, kinds: &[StackKind]) -> GameResult<()> {
        self.ensure_idle()?;
        let command = self.game()?.move_to_any_of_kinds(card_id, kinds)?;
        self.history.push(command)
    }

    /// 1手戻す。
    pub fn undo(&self) -> GameResult<()> {
        self.ensure_idle()?;
        let game = self.game()?;
        let command = self.history.undo()?;
        if let Err(err) = game.revert(&command) {
            error!("GameSession: failed to undo {:?}: {}", command, err);
            self.history.redo()?;
            return Err(err);
        }
        Ok(())
    }

    /// 戻した手をやり直す。
    pub fn redo(&self) -> GameResult<()> {
        self.ensure_idle()?;
        let game = self.game()?;
        let command = self.history.redo()?;
        if let Err(err) = game.apply(&command) {
            error!("GameSession: failed to redo {:?}: {}", command, err);
            self.history.undo()?;
            return Err(err);
        }
        Ok(())
    }

    fn game(&self) -> GameResult<Rc<Game>> {
        self.game.borrow().clone().ok_or(GameError::NotStarted)
    }

    fn ensure_idle(&self) -> GameResult<()> {
        if self.on_card_moved.is_dispatching()
            || self.on_game_finished.is_dispatching()
            || self.history.on_history_changed().is_dispatching()
        {
            return Err(GameError::Reentrant);
        }
        Ok(())
    }
}
