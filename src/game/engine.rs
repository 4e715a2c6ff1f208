// src/game/engine.rs

use std::cell::{Cell, RefCell};

use log::{debug, info, warn};

use crate::components::card::{Card, CardId, Suit};
use crate::components::game_state::GameStatus;
use crate::components::stack::{StackId, StackKind};
use crate::error::{GameError, GameResult};
use crate::event::EventHandler;
use crate::game::board::Board;
use crate::game::command::MoveCommand;
use crate::logic::auto_move::find_target_stack;
use crate::logic::variant::Variant;
use crate::protocol::{CardMovedEvent, CardsDisposition};

/// 1回分のゲーム。盤面と、移動の段取り（検査 → 移動 → 通知 → クリア判定）を受け持つよ。
///
/// メソッドは全部 `&self`。イベントハンドラが `Rc<Game>` を持っていて
/// 通知の途中で呼び返してきても、問い合わせは答えるし、命令は `Reentrant` で断る。
#[derive(Debug)]
pub struct Game {
    variant: Variant,
    board: RefCell<Board>,
    status: Cell<GameStatus>,
    on_card_moved: EventHandler<CardMovedEvent>,
    on_game_finished: EventHandler<()>,
}

impl Game {
    pub fn new(variant: Variant, cards: Vec<Card>) -> GameResult<Self> {
        Self::with_events(variant, cards, EventHandler::new(), EventHandler::new())
    }

    /// 通知先を外から渡して作る。セッションはこれで同じハンドラを使い回すよ。
    pub fn with_events(
        variant: Variant,
        cards: Vec<Card>,
        on_card_moved: EventHandler<CardMovedEvent>,
        on_game_finished: EventHandler<()>,
    ) -> GameResult<Self> {
        let stacks = variant.deal(cards)?;
        info!("Game: {} started with {} stacks", variant, stacks.len());
        Ok(Self {
            variant,
            board: RefCell::new(Board::new(stacks)),
            status: Cell::new(GameStatus::Playing),
            on_card_moved,
            on_game_finished,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn status(&self) -> GameStatus {
        self.status.get()
    }

    pub fn on_card_moved(&self) -> &EventHandler<CardMovedEvent> {
        &self.on_card_moved
    }

    pub fn on_game_finished(&self) -> &EventHandler<()> {
        &self.on_game_finished
    }

    // --- 問い合わせ（副作用なし） ---

    /// どこかのスタックでそのカードが動かせる状態か。
    pub fn can_move(&self, card_id: CardId) -> bool {
        self.board.borrow().is_available(card_id)
    }

    pub fn can_move_to_stack(&self, card_id: CardId, stack_id: StackId) -> bool {
        let board = self.board.borrow();
        if !board.is_available(card_id) {
            return false;
        }
        match (board.card(card_id), board.stack(stack_id)) {
            (Some(card), Some(target)) => !target.contains(card_id) && target.can_accept(card),
            _ => false,
        }
    }

    pub fn can_move_to_any_of_kinds(&self, card_id: CardId, kinds: &[StackKind]) -> bool {
        self.find_target(card_id, kinds).is_some()
    }

    /// クリア条件を今の盤面で判定する。
    pub fn is_finished(&self) -> bool {
        self.variant.is_finished(self.board.borrow().stacks())
    }

    pub fn disposition(&self) -> CardsDisposition {
        self.board.borrow().disposition()
    }

    pub fn stack_of(&self, card_id: CardId) -> Option<StackId> {
        self.board.borrow().stack_of(card_id)
    }

    pub fn card(&self, card_id: CardId) -> Option<Card> {
        self.board.borrow().card(card_id).copied()
    }

    /// そのスートの組札（`kinds` のうち最初に見つかったもの）。
    pub fn foundation_of(&self, suit: Suit, kinds: &[StackKind]) -> Option<StackId> {
        self.board
            .borrow()
            .stacks()
            .iter()
            .find(|stack| kinds.contains(&stack.kind()) && stack.suit() == Some(suit))
            .map(|stack| stack.id())
    }

    // --- 命令 ---

    /// カードを指定のスタックへ動かして、その移動の記録を返す。
    pub fn move_to_stack(&self, card_id: CardId, stack_id: StackId) -> GameResult<MoveCommand> {
        self.ensure_idle()?;
        if !self.can_move_to_stack(card_id, stack_id) {
            warn!("Game: rejected move of card {} to stack {}", card_id, stack_id);
            return Err(GameError::IllegalMove { card_id, stack_id: Some(stack_id) });
        }
        let source = self
            .stack_of(card_id)
            .ok_or(GameError::IllegalMove { card_id, stack_id: Some(stack_id) })?;

        let command = MoveCommand::new(card_id, source, stack_id);
        self.perform(&command, true)?;
        Ok(command)
    }

    /// `kinds` の中で受け付けてくれる最初のスタック（ID 順）へ動かす。
    pub fn move_to_any_of_kinds(&self, card_id: CardId, kinds: &[StackKind]) -> GameResult<MoveCommand> {
        self.ensure_idle()?;
        match self.find_target(card_id, kinds) {
            Some(target) => self.move_to_stack(card_id, target),
            None => {
                warn!("Game: no stack of {:?} accepts card {}", kinds, card_id);
                Err(GameError::IllegalMove { card_id, stack_id: None })
            }
        }
    }

    /// 記録を前向きに再生する（redo）。ルールは見ないよ。
    pub fn apply(&self, command: &MoveCommand) -> GameResult<()> {
        self.ensure_idle()?;
        self.perform(command, false)
    }

    /// 記録を逆向きに再生する（undo）。ついさっきまでそこにあったカードなので、ルールは見ない。
    pub fn revert(&self, command: &MoveCommand) -> GameResult<()> {
        self.ensure_idle()?;
        self.perform(&command.inverse(), false)
    }

    fn perform(&self, command: &MoveCommand, validate: bool) -> GameResult<()> {
        {
            let mut board = self.board.borrow_mut();
            let top = board
                .stack(command.from_stack_id)
                .and_then(|stack| stack.top())
                .map(|card| card.id);
            if top != Some(command.card_id) {
                return Err(GameError::IllegalMove {
                    card_id: command.card_id,
                    stack_id: Some(command.to_stack_id),
                });
            }
            board.transfer(command.from_stack_id, command.to_stack_id, validate)?;
        }
        debug!(
            "Game: card {} moved {} -> {}",
            command.card_id, command.from_stack_id, command.to_stack_id
        );

        // 通知の間は盤面を借りていない
        self.on_card_moved.trigger(&CardMovedEvent {
            card_id: command.card_id,
            from_stack_id: command.from_stack_id,
            to_stack_id: command.to_stack_id,
        });
        self.check_finished();
        Ok(())
    }

    /// Playing → Finished に変わった瞬間だけ通知する。
    fn check_finished(&self) {
        if self.status.get().is_finished() || !self.is_finished() {
            return;
        }
        self.status.set(GameStatus::Finished);
        info!("Game: {} finished! 🏆", self.variant);
        self.on_game_finished.trigger(&());
    }

    fn find_target(&self, card_id: CardId, kinds: &[StackKind]) -> Option<StackId> {
        let board = self.board.borrow();
        if !board.is_available(card_id) {
            return None;
        }
        let card = board.card(card_id)?;
        find_target_stack(board.stacks(), card, kinds)
    }

    fn ensure_idle(&self) -> GameResult<()> {
        if self.on_card_moved.is_dispatching() || self.on_game_finished.is_dispatching() {
            return Err(GameError::Reentrant);
        }
        Ok(())
    }
}
