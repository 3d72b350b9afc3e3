use pairfollow::{
    Card, Difficulty, DiscardResult, DiscardSelector, DrawResult, Game, GameOptions, GameState,
    HandOrder, HandView, Player, PlayerKind, PlayerSpec, Rank, StepResult, Suit, TableView,
    WinEvent,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser tables keep cards in the order they were drawn.
fn browser_options() -> GameOptions {
    GameOptions::default().with_hand_order(HandOrder::Insertion)
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    seats: Vec<PlayerSpec>,
    viewer: Option<usize>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(browser_options(), u64::from(seed)),
            seats: Vec::new(),
            viewer: None,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(browser_options(), u64::from(seed));
        self.seats.clear();
        self.viewer = None;
    }

    /// Adds a human seat for the next game and returns its index. The first
    /// human seat becomes the viewer.
    pub fn add_human(&mut self, name: String) -> u32 {
        let index = self.seats.len();
        self.seats.push(PlayerSpec::human(name));
        if self.viewer.is_none() {
            self.viewer = Some(index);
        }
        index as u32
    }

    pub fn add_cpu(&mut self, name: String, difficulty: &str) -> Result<u32, JsValue> {
        let difficulty = difficulty.parse::<Difficulty>().map_err(js_err)?;
        self.seats.push(PlayerSpec::cpu(name, difficulty));
        Ok(self.seats.len() as u32 - 1)
    }

    pub fn set_viewer(&mut self, viewer: Option<u32>) {
        self.viewer = viewer.map(|index| index as usize);
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.game.new_game(self.seats.clone()).map_err(js_err)
    }

    pub fn rematch(&self) -> Result<(), JsValue> {
        self.game.rematch().map_err(js_err)
    }

    pub fn is_cpu_turn(&self) -> bool {
        self.game.is_cpu_turn()
    }

    pub fn draw(&self) -> Result<JsValue, JsValue> {
        let player = self.require_seat()?;
        let result = self.game.submit_draw(player).map_err(js_err)?;
        to_js_value(&JsOutcome::from_draw(player, result))
    }

    pub fn discard(&self, index: u32) -> Result<JsValue, JsValue> {
        let player = self.require_seat()?;
        self.finish_discard(player, DiscardSelector::Index(index as usize))
    }

    pub fn discard_rank(&self, label: &str) -> Result<JsValue, JsValue> {
        let player = self.require_seat()?;
        let rank = label.parse::<Rank>().map_err(js_err)?;
        self.finish_discard(player, DiscardSelector::Rank(rank))
    }

    /// Plays one phase of a CPU turn. Call from a timer to pace CPU play.
    pub fn step(&self) -> Result<JsValue, JsValue> {
        let Some(player) = self.game.current_player() else {
            return Err(JsValue::from_str("the game is not in progress"));
        };
        let outcome = match self.game.step().map_err(js_err)? {
            StepResult::Draw(result) => JsOutcome::from_draw(player, result),
            StepResult::Discard(result) => JsOutcome::from_discard(player, result),
        };
        to_js_value(&outcome)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.view(self.viewer)))
    }
}

impl WasmGame {
    /// Commands from the page act for the viewer's seat only. Whose turn it
    /// is stays for the engine to decide.
    fn require_seat(&self) -> Result<usize, JsValue> {
        acting_seat(self.viewer, &self.game.players()).map_err(JsValue::from_str)
    }

    fn finish_discard(&self, player: usize, selector: DiscardSelector) -> Result<JsValue, JsValue> {
        let result = self.game.submit_discard(player, selector).map_err(js_err)?;
        to_js_value(&JsOutcome::from_discard(player, result))
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    current_player: Option<u32>,
    winner: Option<u32>,
    players: Vec<JsPlayer>,
    pot_top: Option<JsCard>,
    pot_count: u32,
    deck_count: u32,
}

impl From<TableView> for Snapshot {
    fn from(view: TableView) -> Self {
        Self {
            state: state_to_str(view.state),
            current_player: view.current_player.map(|index| index as u32),
            winner: view.state.winner().map(|index| index as u32),
            players: view
                .players
                .into_iter()
                .map(|player| JsPlayer {
                    name: player.name,
                    cpu: difficulty_to_str(player.kind),
                    card_count: player.hand.len() as u32,
                    cards: match player.hand {
                        HandView::Visible(cards) => Some(cards.into_iter().map(card_to_js).collect()),
                        HandView::Hidden(_) => None,
                    },
                    has_won: player.has_won,
                    wins: player.wins,
                })
                .collect(),
            pot_top: view.pot_top.map(card_to_js),
            pot_count: view.pot_count as u32,
            deck_count: view.deck_count as u32,
        }
    }
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    cpu: Option<&'static str>,
    card_count: u32,
    cards: Option<Vec<JsCard>>,
    has_won: bool,
    wins: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    red: bool,
}

#[derive(Serialize)]
struct JsOutcome {
    player: u32,
    action: &'static str,
    card: Option<JsCard>,
    recycled: bool,
    next_player: Option<u32>,
    win: Option<JsWin>,
}

impl JsOutcome {
    fn from_draw(player: usize, result: DrawResult) -> Self {
        match result {
            DrawResult::Drawn { card, recycled } => Self {
                player: player as u32,
                action: "draw",
                card: Some(card_to_js(card)),
                recycled,
                next_player: None,
                win: None,
            },
            DrawResult::Won(event) => Self::won(player, "draw", event),
        }
    }

    fn from_discard(player: usize, result: DiscardResult) -> Self {
        match result {
            DiscardResult::Discarded { card, next_player } => Self {
                player: player as u32,
                action: "discard",
                card: Some(card_to_js(card)),
                recycled: false,
                next_player: Some(next_player as u32),
                win: None,
            },
            DiscardResult::Won(event) => Self::won(player, "discard", event),
        }
    }

    fn won(player: usize, action: &'static str, event: WinEvent) -> Self {
        Self {
            player: player as u32,
            action,
            card: None,
            recycled: false,
            next_player: None,
            win: Some(JsWin::from(event)),
        }
    }
}

#[derive(Serialize)]
struct JsWin {
    winner: u32,
    cards: Vec<JsCard>,
    pair: &'static str,
    run: [&'static str; 2],
    used_pot_top: bool,
    wins: u32,
}

impl From<WinEvent> for JsWin {
    fn from(event: WinEvent) -> Self {
        Self {
            winner: event.player_index as u32,
            cards: event.cards.into_iter().map(card_to_js).collect(),
            pair: event.combination.pair.label(),
            run: [
                event.combination.run.0.label(),
                event.combination.run.1.label(),
            ],
            used_pot_top: event.used_pot_top,
            wins: event.wins,
        }
    }
}

fn acting_seat(viewer: Option<usize>, players: &[Player]) -> Result<usize, &'static str> {
    let seat = viewer.ok_or("no human seat is viewing the table")?;
    match players.get(seat) {
        Some(player) if player.is_cpu() => Err("a CPU seat is played with step()"),
        Some(_) => Ok(seat),
        None => Err("the viewer is not seated"),
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        red: card.suit.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn difficulty_to_str(kind: PlayerKind) -> Option<&'static str> {
    match kind {
        PlayerKind::Human => None,
        PlayerKind::Cpu(Difficulty::Easy) => Some("Easy"),
        PlayerKind::Cpu(Difficulty::Hard) => Some("Hard"),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::WaitingForPlayers => "WaitingForPlayers",
        GameState::AwaitingDraw(_) => "AwaitingDraw",
        GameState::AwaitingDiscard(_) => "AwaitingDiscard",
        GameState::Won(_) => "Won",
        GameState::Exhausted => "Exhausted",
        GameState::Halted => "Halted",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
