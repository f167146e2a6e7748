use marketmaker::market::{self, GrowthModifier, ModifierRegistry};
use marketmaker::state::ActiveEffect;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn effect(id: &str, duration: u32) -> ActiveEffect {
    ActiveEffect {
        source_id: id.to_string(),
        duration_remaining: duration,
    }
}

mod candle_generation {
    use super::*;

    #[test]
    fn creation_invariant_holds_across_seeds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut close = 1.0;
            for _ in 0..200 {
                let candle = market::next_candle(close, 0.65, &mut rng);
                assert_eq!(candle.open, close);
                assert!(candle.low <= candle.open.min(candle.close));
                assert!(candle.high >= candle.open.max(candle.close));
                close = candle.close;
            }
        }
    }

    #[test]
    fn close_never_drops_below_the_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        // An oversized bias forces red candles far below zero before clamping.
        for _ in 0..500 {
            let candle = market::next_candle(0.1, 50.0, &mut rng);
            assert!(candle.close >= 0.1);
        }
    }

    #[test]
    fn wick_noise_stays_within_three_percent() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let candle = market::next_candle(10.0, 0.65, &mut rng);
            let body_high = candle.open.max(candle.close);
            let body_low = candle.open.min(candle.close);
            assert!(candle.high <= body_high * 1.03);
            assert!(candle.low >= body_low * 0.97);
        }
    }
}

mod growth_rate {
    use super::*;

    #[test]
    fn base_rate_with_no_effects() {
        let registry = ModifierRegistry::default();
        assert!((registry.growth_rate(&[]) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn default_registry_carries_the_pos_consensus_rule() {
        let registry = ModifierRegistry::default();
        let rate = registry.growth_rate(&[effect("rd_pos_consensus", 10)]);
        assert!((rate - 0.65 * 1.20).abs() < 1e-12);
    }

    #[test]
    fn unknown_sources_contribute_nothing() {
        let registry = ModifierRegistry::default();
        let rate = registry.growth_rate(&[effect("mystery", 10)]);
        assert!((rate - 0.65).abs() < 1e-12);
    }

    #[test]
    fn additive_and_multiplicative_rules_fold_together() {
        let mut registry = ModifierRegistry::empty();
        registry.register("boost", GrowthModifier::Add(0.15));
        registry.register("double", GrowthModifier::Multiply(2.0));
        let rate = registry.growth_rate(&[effect("boost", 5), effect("double", 5)]);
        assert!((rate - (0.65 + 0.15) * 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_registry_ignores_every_effect() {
        let registry = ModifierRegistry::empty();
        let rate = registry.growth_rate(&[effect("rd_pos_consensus", 10)]);
        assert!((rate - 0.65).abs() < 1e-12);
    }
}
