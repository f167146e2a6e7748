//! Candle generation and growth-rate aggregation.

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;

use crate::state::{ActiveEffect, BASE_GROWTH_RATE, CandleData};
use crate::upgrades::RD_POS_CONSENSUS;

const GREEN_CHANCE: f64 = 0.70;
const DRAMATIC_CHANCE: f64 = 0.15;
const DRAMATIC_MULTIPLIER: f64 = 3.5;
const NORMAL_MULTIPLIER: f64 = 0.8;
const WICK_NOISE: f64 = 0.03;
const PRICE_FLOOR: f64 = 0.1;

/// Generate the next candle from the previous close and a growth bias.
///
/// Green with 70% probability; a rare dramatic move scales the magnitude
/// x3.5 instead of x0.8. The close never drops below the price floor, and
/// the wicks widen the open/close extremes by up to 3%.
pub fn next_candle(previous_close: f64, growth_bias: f64, rng: &mut StdRng) -> CandleData {
    let open = previous_close;
    let is_green = rng.gen_bool(GREEN_CHANCE);
    let is_dramatic = rng.gen_bool(DRAMATIC_CHANCE);
    let roll: f64 = rng.gen_range(0.0..1.0);
    let change = growth_bias
        * if is_dramatic {
            (roll - 0.3) * DRAMATIC_MULTIPLIER
        } else {
            (roll - 0.45) * NORMAL_MULTIPLIER
        };
    let close = if is_green {
        open + change.abs()
    } else {
        open - change.abs()
    };
    let close = close.max(PRICE_FLOOR);
    let high = open.max(close) * (1.0 + rng.gen_range(0.0..WICK_NOISE));
    let low = open.min(close) * (1.0 - rng.gen_range(0.0..WICK_NOISE));
    CandleData {
        open,
        high,
        low,
        close,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrowthModifier {
    Multiply(f64),
    Add(f64),
}

/// Maps an effect-source ID (upgrade or event) to the growth-rate modifier
/// it contributes while active. Populated at startup; the default carries
/// the single catalog rule.
#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    rules: HashMap<String, GrowthModifier>,
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(RD_POS_CONSENSUS, GrowthModifier::Multiply(1.20));
        registry
    }
}

impl ModifierRegistry {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn register(&mut self, source_id: impl Into<String>, modifier: GrowthModifier) {
        self.rules.insert(source_id.into(), modifier);
    }

    /// Fold the active effects over the base rate. Effects without a
    /// registered rule contribute nothing.
    pub fn growth_rate(&self, effects: &[ActiveEffect]) -> f64 {
        effects
            .iter()
            .fold(BASE_GROWTH_RATE, |rate, effect| {
                match self.rules.get(&effect.source_id) {
                    Some(GrowthModifier::Multiply(factor)) => rate * factor,
                    Some(GrowthModifier::Add(bonus)) => rate + bonus,
                    None => rate,
                }
            })
    }
}
