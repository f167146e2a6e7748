use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::events::{self, GameEvent};
use crate::market::{self, GrowthModifier, ModifierRegistry};
use crate::save::SaveManager;
use crate::state::{ActiveEffect, GameState, NewsItem, TRADE_LOT};
use crate::upgrades::{self, Upgrade};

/// The simulation engine. Owns the current state snapshot, the static
/// catalogs, and the RNG; a single mutator at a time drives it through
/// `tick` and the player actions. Observers read the snapshot via `state`
/// and use `version` to detect changes.
pub struct Game {
    state: GameState,
    version: u64,
    events: Vec<GameEvent>,
    upgrades: HashMap<&'static str, Upgrade>,
    modifiers: ModifierRegistry,
    saves: SaveManager,
    rng: StdRng,
}

impl Game {
    pub fn new(saves: SaveManager) -> Self {
        Self::from_state(saves, GameState::default())
    }

    pub fn from_state(saves: SaveManager, state: GameState) -> Self {
        Self {
            state,
            version: 0,
            events: events::catalog(),
            upgrades: upgrades::catalog()
                .into_iter()
                .map(|upgrade| (upgrade.id, upgrade))
                .collect(),
            modifiers: ModifierRegistry::default(),
            saves,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_events(mut self, events: Vec<GameEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn with_upgrades(mut self, upgrades: Vec<Upgrade>) -> Self {
        self.upgrades = upgrades
            .into_iter()
            .map(|upgrade| (upgrade.id, upgrade))
            .collect();
        self
    }

    pub fn register_modifier(&mut self, source_id: impl Into<String>, modifier: GrowthModifier) {
        self.modifiers.register(source_id, modifier);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn upgrade_catalog(&self) -> impl Iterator<Item = &Upgrade> {
        self.upgrades.values()
    }

    /// Advance the simulation by one step: tick down effects, give every
    /// event a chance to fire, recompute the growth rate, and append the
    /// next candle.
    pub fn tick(&mut self) {
        self.tick_effects();
        self.check_events();

        let growth_rate = self.modifiers.growth_rate(&self.state.active_effects);
        let last_close = self.state.last_close().unwrap_or(1.0);
        let candle = market::next_candle(last_close, growth_rate, &mut self.rng);

        self.state.push_candle(candle);
        self.state.historical_candle_count += 1;
        self.state.current_growth_rate = growth_rate;
        self.version += 1;
        debug!(
            candle = self.state.historical_candle_count,
            close = candle.close,
            growth_rate,
            "tick"
        );
    }

    fn tick_effects(&mut self) {
        if self.state.active_effects.is_empty() {
            return;
        }
        for effect in &mut self.state.active_effects {
            effect.duration_remaining = effect.duration_remaining.saturating_sub(1);
        }
        self.state
            .active_effects
            .retain(|effect| effect.duration_remaining > 0);
    }

    fn check_events(&mut self) {
        for event in &self.events {
            if event.is_one_time && self.state.triggered_one_time_event_ids.contains(event.id) {
                continue;
            }
            if !event.conditions_met(&self.state) {
                continue;
            }
            if !self.rng.gen_bool(event.trigger_chance) {
                continue;
            }

            self.state.push_news(NewsItem {
                event_id: event.id.to_string(),
                headline: event.headline.to_string(),
                timestamp: self.state.historical_candle_count,
            });
            if !event.is_dummy {
                if let Some(effect) = &event.effect {
                    self.state.active_effects.push(ActiveEffect {
                        source_id: event.id.to_string(),
                        duration_remaining: effect.duration_in_candles,
                    });
                }
            }
            if event.is_one_time {
                self.state
                    .triggered_one_time_event_ids
                    .insert(event.id.to_string());
            }
            info!(event = event.id, "news: {}", event.headline);
        }
    }

    /// Buy one lot of coins at the latest close. Returns false (and leaves
    /// the state untouched) when cash is short.
    pub fn buy(&mut self) -> bool {
        let Some(price) = self.state.last_close() else {
            return false;
        };
        let cost = TRADE_LOT as f64 * price;
        let portfolio = &mut self.state.player_portfolio;
        if portfolio.cash + 1e-6 >= cost {
            portfolio.cash -= cost;
            portfolio.coins += TRADE_LOT;
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Sell one lot of coins at the latest close.
    pub fn sell(&mut self) -> bool {
        let Some(price) = self.state.last_close() else {
            return false;
        };
        let portfolio = &mut self.state.player_portfolio;
        if portfolio.coins >= TRADE_LOT {
            portfolio.coins -= TRADE_LOT;
            portfolio.cash += TRADE_LOT as f64 * price;
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Validate and apply an upgrade purchase: the ID must exist, the
    /// upgrade must not be owned yet, its dependency (if any) must be owned,
    /// and cash must cover the cost. Any failure is a silent no-op.
    pub fn purchase_upgrade(&mut self, id: &str) -> bool {
        let Some(upgrade) = self.upgrades.get(id) else {
            return false;
        };
        if self.state.purchased_upgrade_ids.contains(id) {
            return false;
        }
        if let Some(dependency) = upgrade.depends_on {
            if !self.state.purchased_upgrade_ids.contains(dependency) {
                return false;
            }
        }
        if self.state.player_portfolio.cash + 1e-6 < upgrade.cost {
            return false;
        }

        self.state.player_portfolio.cash -= upgrade.cost;
        self.state.purchased_upgrade_ids.insert(upgrade.id.to_string());
        if upgrade.effect_duration_in_candles > 0 {
            self.state.active_effects.push(ActiveEffect {
                source_id: upgrade.id.to_string(),
                duration_remaining: upgrade.effect_duration_in_candles,
            });
        }
        self.version += 1;
        true
    }

    /// Restore from the save file. A missing or unreadable save falls back
    /// to a fresh default state.
    pub fn load_game(&mut self) {
        self.state = match self.saves.load() {
            Ok(Some(state)) => state,
            Ok(None) => GameState::default(),
            Err(err) => {
                warn!("discarding unreadable save: {err}");
                GameState::default()
            }
        };
        self.version += 1;
    }

    /// Delete any saved game and reset to the default state.
    pub fn new_game(&mut self) {
        if let Err(err) = self.saves.delete() {
            warn!("failed to delete save file: {err}");
        }
        self.state = GameState::default();
        self.version += 1;
    }

    /// Persist the current snapshot. Fire-and-forget: failures are logged,
    /// never surfaced.
    pub fn save(&self) {
        if let Err(err) = self.saves.save(&self.state) {
            warn!("failed to save game: {err}");
        }
    }
}
