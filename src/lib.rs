//! Simulation core of an idle crypto-trading game: a randomized candle
//! market, a tech tree of timed upgrades, and a probabilistic news-event
//! system, driven by a single periodic tick.

pub mod events;
pub mod game;
pub mod market;
pub mod save;
pub mod state;
pub mod upgrades;

pub use events::{EffectKind, EventEffect, GameEvent, TriggerCondition};
pub use game::Game;
pub use market::{GrowthModifier, ModifierRegistry};
pub use save::{SAVE_FILE_NAME, SaveError, SaveManager};
pub use state::{
    ActiveEffect, BASE_GROWTH_RATE, CANDLE_HISTORY_LIMIT, CandleData, GameState, NEWS_FEED_LIMIT,
    NewsItem, PlayerPortfolio, TRADE_LOT,
};
pub use upgrades::{Upgrade, UpgradeCategory};
