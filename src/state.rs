use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

pub const CANDLE_HISTORY_LIMIT: usize = 30;
pub const NEWS_FEED_LIMIT: usize = 50;
pub const BASE_GROWTH_RATE: f64 = 0.65;
pub const TRADE_LOT: u64 = 100;

/// Total circulating coin supply used to derive the market cap from the
/// latest close.
pub const COIN_SUPPLY: f64 = 100_000_000.0;

/// One OHLC price sample for a single simulation tick. Immutable once
/// appended to the candle history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleData {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPortfolio {
    pub cash: f64,
    pub coins: u64,
}

/// A timed modifier currently influencing the simulation, keyed by the
/// upgrade or event that spawned it. Dropped once its duration runs out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEffect {
    pub source_id: String,
    pub duration_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub event_id: String,
    pub headline: String,
    /// Historical candle count at the moment this item was generated.
    pub timestamp: u64,
}

/// The full saveable game state. This is the only aggregate that crosses the
/// persistence boundary; everything else (catalogs, modifier rules) is
/// static data rebuilt at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_portfolio: PlayerPortfolio,
    pub candle_history: VecDeque<CandleData>,
    pub historical_candle_count: u64,
    pub purchased_upgrade_ids: HashSet<String>,
    pub active_effects: Vec<ActiveEffect>,
    pub news_feed: VecDeque<NewsItem>,
    pub triggered_one_time_event_ids: HashSet<String>,
    pub current_growth_rate: f64,
}

impl Default for GameState {
    fn default() -> Self {
        let mut candle_history = VecDeque::new();
        candle_history.push_back(CandleData {
            open: 1.0,
            high: 1.03,
            low: 0.97,
            close: 1.0,
        });
        Self {
            player_portfolio: PlayerPortfolio {
                cash: 2000.0,
                coins: 10_000,
            },
            candle_history,
            historical_candle_count: 1,
            purchased_upgrade_ids: HashSet::new(),
            active_effects: Vec::new(),
            news_feed: VecDeque::new(),
            triggered_one_time_event_ids: HashSet::new(),
            current_growth_rate: BASE_GROWTH_RATE,
        }
    }
}

impl GameState {
    pub fn last_close(&self) -> Option<f64> {
        self.candle_history.back().map(|candle| candle.close)
    }

    pub fn market_cap(&self) -> f64 {
        self.last_close().unwrap_or(0.0) * COIN_SUPPLY
    }

    pub fn push_candle(&mut self, candle: CandleData) {
        self.candle_history.push_back(candle);
        while self.candle_history.len() > CANDLE_HISTORY_LIMIT {
            self.candle_history.pop_front();
        }
    }

    pub fn push_news(&mut self, item: NewsItem) {
        self.news_feed.push_front(item);
        self.news_feed.truncate(NEWS_FEED_LIMIT);
    }
}
