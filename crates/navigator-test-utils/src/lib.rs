//! Testing utilities for the Career Navigator workspace
//!
//! Shared configs, navigators and record builders.

#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use navigator_core::{
    Achievement, AchievementMetadata, Milestone, Navigator, NavigatorConfig, ProgressEntry,
    RewardType, ServiceId,
};

/// Seed used when a test does not care which one
pub const TEST_SEED: u64 = 0x5EED;

/// Wallet that matches no fixture
pub const STRANGER_WALLET: &str = "addr1_test_stranger";

/// No latency, fixed seed, payments always succeed
pub fn instant_config() -> NavigatorConfig {
    NavigatorConfig::instant()
        .with_seed(TEST_SEED)
        .with_payment_success_rate(1.0)
}

pub fn setup_test_navigator() -> Navigator {
    Navigator::new(instant_config()).unwrap()
}

/// Navigator already connected to `wallet`
pub async fn connected_navigator(wallet: &str) -> Navigator {
    let mut navigator = setup_test_navigator();
    navigator.connect(wallet).await.unwrap();
    navigator
}

/// Pay for every service in catalog order
pub async fn unlock_all_services(navigator: &mut Navigator) {
    for id in ServiceId::ALL {
        navigator.pay(id).await.unwrap();
    }
}

pub fn create_test_milestone(id: &str, completed: bool) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: format!("Milestone {id}"),
        description: "Test milestone".to_string(),
        target_date: "2025-06-01".to_string(),
        completed,
        verification_steps: vec!["Do the thing".to_string()],
        reward_type: Some(RewardType::Nft),
    }
}

pub fn create_test_achievement(id: &str, category: &str) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: format!("Achievement {id}"),
        description: "Test achievement".to_string(),
        date_earned: "2025-01-01".to_string(),
        nft_hash: None,
        verified: false,
        metadata: AchievementMetadata {
            category: category.to_string(),
            level: "Beginner".to_string(),
            skills: Vec::new(),
        },
    }
}

/// Progress entry stamped `minutes` after a fixed epoch
pub fn create_progress_entry_at(milestone_id: &str, minutes: i64) -> ProgressEntry {
    let epoch: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut entry = ProgressEntry::now(milestone_id, 100, format!("tx_test_{minutes}"));
    entry.timestamp = epoch + Duration::minutes(minutes);
    entry
}
