//! Static news-event catalog and trigger-condition evaluation.
//!
//! Every tick each event not yet permanently spent gets one chance to fire:
//! all of its trigger conditions must hold (logical AND), then a single draw
//! against its per-tick chance decides. An event with no conditions can
//! never fire.

use crate::state::GameState;
use crate::upgrades::RD_POS_CONSENSUS;

#[derive(Debug, Clone, PartialEq)]
pub enum TriggerCondition {
    Always,
    MarketCapAbove(f64),
    CandleCountAbove(u64),
    UpgradePurchased(&'static str),
    /// No hype state exists in the simulation; always evaluates false, so
    /// events gated on it are permanently disabled.
    HypeScoreAbove(f64),
    /// Same as `HypeScoreAbove`: permanently disabled.
    InterestRateAbove(f64),
}

impl TriggerCondition {
    pub fn holds(&self, state: &GameState) -> bool {
        match self {
            TriggerCondition::Always => true,
            TriggerCondition::MarketCapAbove(threshold) => state.market_cap() >= *threshold,
            TriggerCondition::CandleCountAbove(count) => state.historical_candle_count > *count,
            TriggerCondition::UpgradePurchased(id) => {
                state.purchased_upgrade_ids.contains(*id)
            }
            TriggerCondition::HypeScoreAbove(_) | TriggerCondition::InterestRateAbove(_) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    PriceTrend,
    Hype,
    NegativeEventChance,
    InstitutionalTrust,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventEffect {
    pub kind: EffectKind,
    pub value: f64,
    pub duration_in_candles: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub id: &'static str,
    pub headline: &'static str,
    pub trigger_conditions: Vec<TriggerCondition>,
    /// Per-tick probability once all conditions hold.
    pub trigger_chance: f64,
    /// Flavor-only events add a news item but never an active effect.
    pub is_dummy: bool,
    /// If true the event is recorded after firing and never fires again.
    pub is_one_time: bool,
    pub effect: Option<EventEffect>,
}

impl GameEvent {
    pub fn conditions_met(&self, state: &GameState) -> bool {
        if self.trigger_conditions.is_empty() {
            return false;
        }
        self.trigger_conditions.iter().all(|c| c.holds(state))
    }
}

pub fn catalog() -> Vec<GameEvent> {
    vec![
        // Flavor tweets that keep the feed alive.
        GameEvent {
            id: "dummy_1",
            headline: "Can't believe the season finale of 'Galaxy Raiders' ended like that! #spoilers",
            trigger_conditions: vec![TriggerCondition::Always],
            trigger_chance: 0.1,
            is_dummy: true,
            is_one_time: false,
            effect: None,
        },
        GameEvent {
            id: "dummy_2",
            headline: "Is it just me or is coffee tasting extra good today? #caffeine",
            trigger_conditions: vec![TriggerCondition::Always],
            trigger_chance: 0.1,
            is_dummy: true,
            is_one_time: false,
            effect: None,
        },
        GameEvent {
            id: "dummy_3",
            headline: "Planning my vacation for next year. Any recommendations?",
            trigger_conditions: vec![TriggerCondition::Always],
            trigger_chance: 0.1,
            is_dummy: true,
            is_one_time: false,
            effect: None,
        },
        GameEvent {
            id: "crisis_interest_rate",
            headline: "Global Central Banks unite to raise interest rates to 5% to combat persistent inflation. Analysts expect a market downturn.",
            trigger_conditions: vec![TriggerCondition::InterestRateAbove(5.0)],
            trigger_chance: 0.1,
            is_dummy: false,
            is_one_time: false,
            effect: Some(EventEffect {
                kind: EffectKind::PriceTrend,
                value: -0.10,
                duration_in_candles: 200,
            }),
        },
        GameEvent {
            id: "hype_celeb_tweet",
            headline: "Just heard about $YOUR_ASSET... looks intriguing. Might have to pick some up. 👀 #crypto #altcoin",
            trigger_conditions: vec![TriggerCondition::MarketCapAbove(10_000_000.0)],
            trigger_chance: 0.02,
            is_dummy: false,
            is_one_time: false,
            effect: Some(EventEffect {
                kind: EffectKind::Hype,
                value: 50.0,
                duration_in_candles: 0,
            }),
        },
        GameEvent {
            id: "review_pos_update",
            headline: "TechFront Magazine publishes a glowing review of YourAsset, praising its recent 'PoS Update' as a 'major leap forward in efficiency and security'.",
            trigger_conditions: vec![TriggerCondition::UpgradePurchased(RD_POS_CONSENSUS)],
            trigger_chance: 0.2,
            is_dummy: false,
            is_one_time: true,
            effect: Some(EventEffect {
                kind: EffectKind::InstitutionalTrust,
                value: 0.15,
                duration_in_candles: 150,
            }),
        },
        GameEvent {
            id: "panic_flash_crash",
            headline: "BREAKING: Unexplained server outage at a major exchange has triggered a flash crash across the entire market! Trading paused.",
            trigger_conditions: vec![TriggerCondition::Always],
            trigger_chance: 0.005,
            is_dummy: false,
            is_one_time: false,
            effect: Some(EventEffect {
                kind: EffectKind::PriceTrend,
                value: -0.30,
                duration_in_candles: 25,
            }),
        },
    ]
}
