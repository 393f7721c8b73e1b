use serde::{Deserialize, Serialize};

/// Items allowed before any upgrade is required.
pub const FREE_ITEM_LIMIT: u64 = 15;

/// Paid tiers offered when the wardrobe outgrows its current limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeTier {
    Pro,
    Premium,
}

impl UpgradeTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pro => "Pro",
            Self::Premium => "Premium",
        }
    }

    pub fn price_usd(&self) -> u32 {
        match self {
            Self::Pro => 10,
            Self::Premium => 20,
        }
    }

    /// Item limit granted by this tier.
    pub fn item_limit(&self) -> u64 {
        match self {
            Self::Pro => 100,
            Self::Premium => 500,
        }
    }

    /// Translation key of the purchase prompt for this tier.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Pro => "upgradeToProMessage",
            Self::Premium => "upgradeToPremiumMessage",
        }
    }
}

/// Result of the tier gate for a given item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Open,
    Requires(UpgradeTier),
}

impl Gate {
    pub fn for_item_count(count: u64) -> Self {
        if count < FREE_ITEM_LIMIT {
            Gate::Open
        } else if count < UpgradeTier::Pro.item_limit() {
            Gate::Requires(UpgradeTier::Pro)
        } else {
            Gate::Requires(UpgradeTier::Premium)
        }
    }
}

/// What the caller shows when a save is blocked by the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpgradeOffer {
    pub current_count: u64,
    pub required_tier: UpgradeTier,
    pub price_usd: u32,
    pub new_limit: u64,
}

impl UpgradeOffer {
    pub fn new(current_count: u64, tier: UpgradeTier) -> Self {
        Self {
            current_count,
            required_tier: tier,
            price_usd: tier.price_usd(),
            new_limit: tier.item_limit(),
        }
    }
}
