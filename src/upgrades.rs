//! Static upgrade catalog for the development tree. Loaded once at startup
//! and never mutated; only the purchased-ID set lives in the game state.

pub const RD_POS_CONSENSUS: &str = "rd_pos_consensus";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeCategory {
    Marketing,
    ResearchAndDevelopment,
    Compliance,
}

#[derive(Debug, Clone)]
pub struct Upgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: UpgradeCategory,
    pub cost: f64,
    pub effect_description: &'static str,
    /// 0 for instant or permanent upgrades.
    pub effect_duration_in_candles: u32,
    /// Upgrade that must already be owned before this one can be bought.
    pub depends_on: Option<&'static str>,
}

pub fn catalog() -> Vec<Upgrade> {
    vec![
        Upgrade {
            id: RD_POS_CONSENSUS,
            name: "PoS Consensus Update",
            description: "Refactor the core protocol for efficiency and scalability.",
            category: UpgradeCategory::ResearchAndDevelopment,
            cost: 2_000_000.0,
            effect_description: "+20% base price growth for 100 candles.",
            effect_duration_in_candles: 100,
            depends_on: None,
        },
        Upgrade {
            id: "rd_quantum_encryption",
            name: "Quantum Encryption",
            description: "Implement next-generation security to deter attackers.",
            category: UpgradeCategory::ResearchAndDevelopment,
            cost: 5_000_000.0,
            effect_description: "-50% chance of negative hack/scandal events for 200 candles.",
            effect_duration_in_candles: 200,
            depends_on: Some(RD_POS_CONSENSUS),
        },
        Upgrade {
            id: "rd_layer2_scaling",
            name: "Layer-2 Scaling Solution",
            description: "Boost network throughput and reduce transaction costs.",
            category: UpgradeCategory::ResearchAndDevelopment,
            cost: 3_500_000.0,
            effect_description: "+15% background Hype generation for 150 candles.",
            effect_duration_in_candles: 150,
            depends_on: Some(RD_POS_CONSENSUS),
        },
        Upgrade {
            id: "mkt_social_blitz",
            name: "Social Media Blitz",
            description: "Flood social platforms with targeted advertisements and influencer posts.",
            category: UpgradeCategory::Marketing,
            cost: 750_000.0,
            effect_description: "Instant +50 Hype and increased retail interest for 80 candles.",
            effect_duration_in_candles: 80,
            depends_on: None,
        },
        Upgrade {
            id: "mkt_viral_meme",
            name: "Viral \"Meme\" Campaign",
            description: "Attempt to capture the chaotic energy of the internet. High risk, high reward.",
            category: UpgradeCategory::Marketing,
            cost: 1_000_000.0,
            effect_description: "70% chance of +40 Hype for 100 candles, 30% chance of a small negative 'Cringe' event.",
            effect_duration_in_candles: 100,
            depends_on: Some("mkt_social_blitz"),
        },
        Upgrade {
            id: "mkt_stadium_rights",
            name: "Stadium Naming Rights",
            description: "Put our name on a major sports stadium for massive brand recognition.",
            category: UpgradeCategory::Marketing,
            cost: 12_000_000.0,
            effect_description: "Triggers a 'Mainstream Mania' event for 20 candles.",
            effect_duration_in_candles: 20,
            depends_on: Some("mkt_viral_meme"),
        },
        Upgrade {
            id: "cmp_offshore_foundation",
            name: "Offshore Foundation Setup",
            description: "Establish a legal entity in a jurisdiction with more 'flexible' financial laws.",
            category: UpgradeCategory::Compliance,
            cost: 1_500_000.0,
            effect_description: "-50% transaction taxes for 300 candles, but slightly increases chance of 'Scandal' events.",
            effect_duration_in_candles: 300,
            depends_on: None,
        },
        Upgrade {
            id: "cmp_ex_regulator",
            name: "Hire Ex-Regulator",
            description: "Bring on a former regulator as a consultant for their invaluable insight and connections.",
            category: UpgradeCategory::Compliance,
            cost: 3_000_000.0,
            effect_description: "Grants one-time use ability to nullify a 'Regulatory Crackdown' event.",
            effect_duration_in_candles: 0,
            depends_on: Some("cmp_offshore_foundation"),
        },
        Upgrade {
            id: "cmp_sandbox_approval",
            name: "Regulatory Sandbox Approval",
            description: "Work with regulators to gain approval for our technology in a controlled environment.",
            category: UpgradeCategory::Compliance,
            cost: 4_500_000.0,
            effect_description: "Greatly increases Institutional Trust and provides immunity to minor negative regulatory news for 250 candles.",
            effect_duration_in_candles: 250,
            depends_on: Some("cmp_ex_regulator"),
        },
    ]
}
