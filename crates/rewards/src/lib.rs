//! Loyalty accrual: stars per purchase, tier promotion, and the ice-cream
//! punch card.

use serde::{Deserialize, Serialize};

use porfirio_core::MoneyCents;

/// Stars a Green member needs to reach Gold. Promotion resets the balance.
pub const GOLD_PROMOTION_STARS: u32 = 200;
/// Stars a Gold member trades for one free drink.
pub const GOLD_FREE_DRINK_STARS: u32 = 100;
/// Scoops on the punch card that buy a free ice cream.
pub const SCOOP_REDEEM_COUNT: u32 = 6;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RewardsError {
    #[error("not enough scoops: have {have}, need {need}")]
    NotEnoughScoops { have: u32, need: u32 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Green,
    Gold,
}

/// What one accrual produced beyond the balance change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardOutcome {
    pub promoted_to_gold: bool,
    pub free_drinks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardsAccount {
    pub stars: u32,
    pub scoops: u32,
    pub tier: Tier,
}

impl Default for RewardsAccount {
    fn default() -> Self {
        Self { stars: 0, scoops: 0, tier: Tier::Green }
    }
}

impl RewardsAccount {
    /// Accrue stars and scoops, applying tier rules.
    ///
    /// Promotion is evaluated before Gold drink conversion, so the accrual
    /// that promotes a member starts their Gold balance at zero and never
    /// awards a drink in the same call.
    pub fn apply(&mut self, stars_add: u32, scoops_add: u32) -> RewardOutcome {
        let mut outcome = RewardOutcome::default();
        self.stars += stars_add;
        self.scoops += scoops_add;
        if self.tier == Tier::Green && self.stars >= GOLD_PROMOTION_STARS {
            self.tier = Tier::Gold;
            self.stars = 0;
            outcome.promoted_to_gold = true;
        }
        if self.tier == Tier::Gold {
            outcome.free_drinks = self.stars / GOLD_FREE_DRINK_STARS;
            self.stars %= GOLD_FREE_DRINK_STARS;
        }
        outcome
    }

    pub fn can_redeem_scoop(&self) -> bool {
        self.scoops >= SCOOP_REDEEM_COUNT
    }

    pub fn redeem_scoop(&mut self) -> Result<(), RewardsError> {
        if !self.can_redeem_scoop() {
            return Err(RewardsError::NotEnoughScoops {
                have: self.scoops,
                need: SCOOP_REDEEM_COUNT,
            });
        }
        self.scoops -= SCOOP_REDEEM_COUNT;
        Ok(())
    }
}

/// One star per 10 pesos spent.
pub fn stars_for_purchase(total_cents: MoneyCents) -> u32 {
    if total_cents <= 0 {
        return 0;
    }
    (total_cents / 1_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_members_accrue_stars() {
        let mut acct = RewardsAccount::default();
        let outcome = acct.apply(45, 0);
        assert_eq!(acct.stars, 45);
        assert_eq!(acct.tier, Tier::Green);
        assert_eq!(outcome, RewardOutcome::default());
    }

    #[test]
    fn promotion_resets_stars_and_awards_no_drink() {
        let mut acct = RewardsAccount { stars: 180, scoops: 0, tier: Tier::Green };
        let outcome = acct.apply(30, 0);
        assert!(outcome.promoted_to_gold);
        assert_eq!(outcome.free_drinks, 0);
        assert_eq!(acct.tier, Tier::Gold);
        assert_eq!(acct.stars, 0);
    }

    #[test]
    fn gold_members_convert_hundreds_to_drinks() {
        let mut acct = RewardsAccount { stars: 90, scoops: 0, tier: Tier::Gold };
        let outcome = acct.apply(130, 0);
        assert_eq!(outcome.free_drinks, 2);
        assert_eq!(acct.stars, 20);
        assert!(!outcome.promoted_to_gold);
    }

    #[test]
    fn punch_card_redeems_six_scoops() {
        let mut acct = RewardsAccount { stars: 0, scoops: 7, tier: Tier::Green };
        assert!(acct.can_redeem_scoop());
        acct.redeem_scoop().unwrap();
        assert_eq!(acct.scoops, 1);
        assert_eq!(
            acct.redeem_scoop(),
            Err(RewardsError::NotEnoughScoops { have: 1, need: 6 })
        );
    }

    #[test]
    fn stars_follow_whole_tens_of_pesos() {
        assert_eq!(stars_for_purchase(0), 0);
        assert_eq!(stars_for_purchase(-5_000), 0);
        assert_eq!(stars_for_purchase(999), 0);
        assert_eq!(stars_for_purchase(1_000), 1);
        assert_eq!(stars_for_purchase(19_700), 19);
    }
}
