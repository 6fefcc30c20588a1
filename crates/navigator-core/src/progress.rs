//! Read models for the dashboard, progress tracker and achievement gallery

use crate::types::{Achievement, ExperienceLevel, Milestone, ProgressEntry, Roadmap};
use indexmap::IndexMap;
use serde::Serialize;

/// Entries shown in the recent-activity list
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Milestone completion for a roadmap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// Rounded completion percentage; 0 for an empty roadmap
    pub percentage: u8,
}

impl ProgressSummary {
    /// Summarize a roadmap's milestones
    #[must_use]
    pub fn from_roadmap(roadmap: &Roadmap) -> Self {
        let completed = roadmap.completed_count();
        let total = roadmap.milestones.len();
        let percentage = if total == 0 {
            0
        } else {
            let rounded = (completed * 100 + total / 2) / total;
            u8::try_from(rounded.min(100)).unwrap_or(100)
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Newest entries first, at most `limit`
#[must_use]
pub fn recent_progress(entries: &[ProgressEntry], limit: usize) -> Vec<&ProgressEntry> {
    let mut recent: Vec<_> = entries.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(limit);
    recent
}

/// Milestones not yet completed, in roadmap order
#[must_use]
pub fn pending_milestones(roadmap: &Roadmap) -> Vec<&Milestone> {
    roadmap.milestones.iter().filter(|m| !m.completed).collect()
}

/// Achievements keyed by category, categories in first-seen order
#[must_use]
pub fn group_achievements_by_category(
    achievements: &[Achievement],
) -> IndexMap<&str, Vec<&Achievement>> {
    let mut groups: IndexMap<&str, Vec<&Achievement>> = IndexMap::new();
    for achievement in achievements {
        groups
            .entry(achievement.metadata.category.as_str())
            .or_default()
            .push(achievement);
    }
    groups
}

/// Headline counts for the achievement gallery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AchievementStats {
    pub total: usize,
    pub verified: usize,
    /// Achievements carrying an NFT reference
    pub minted: usize,
    pub categories: usize,
}

impl AchievementStats {
    #[must_use]
    pub fn from_achievements(achievements: &[Achievement]) -> Self {
        Self {
            total: achievements.len(),
            verified: achievements.iter().filter(|a| a.verified).count(),
            minted: achievements.iter().filter(|a| a.nft_hash.is_some()).count(),
            categories: group_achievements_by_category(achievements).len(),
        }
    }
}

/// Achievements earned at one level against that level's cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: ExperienceLevel,
    pub earned: usize,
    pub cap: usize,
    /// Rounded, capped at 100
    pub percentage: u8,
}

/// Achievements a level can display before its bar is full
#[inline]
#[must_use]
pub fn level_cap(level: ExperienceLevel) -> usize {
    match level {
        ExperienceLevel::Beginner => 5,
        ExperienceLevel::Intermediate => 8,
        ExperienceLevel::Advanced => 10,
    }
}

/// Per-level achievement progress, beginner first.
///
/// Levels are matched case-insensitively against `metadata.level`.
#[must_use]
pub fn level_progress(achievements: &[Achievement]) -> [LevelProgress; 3] {
    [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ]
    .map(|level| {
        let earned = achievements
            .iter()
            .filter(|a| a.metadata.level.eq_ignore_ascii_case(level.as_str()))
            .count();
        let cap = level_cap(level);
        let rounded = ((earned * 100 + cap / 2) / cap).min(100);
        LevelProgress {
            level,
            earned,
            cap,
            percentage: u8::try_from(rounded).unwrap_or(100),
        }
    })
}

/// Explorer link for a transaction or NFT reference
#[inline]
#[must_use]
pub fn explorer_url(base: &str, reference: &str) -> String {
    format!("{base}{reference}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXPLORER_BASE_URL;
    use crate::fixtures;
    use crate::types::FixtureId;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn beginner_summary() {
        let roadmap = &fixtures::lookup_by_fixture(FixtureId::Beginner).roadmap;
        let summary = ProgressSummary::from_roadmap(roadmap);
        assert_eq!(
            summary,
            ProgressSummary {
                completed: 2,
                total: 5,
                percentage: 40
            }
        );
        assert!(!summary.is_finished());
    }

    #[test]
    fn empty_roadmap_is_zero_percent() {
        let mut roadmap = fixtures::lookup_by_fixture(FixtureId::Beginner).roadmap.clone();
        roadmap.milestones.clear();
        let summary = ProgressSummary::from_roadmap(&roadmap);
        assert_eq!(summary.percentage, 0);
        assert!(!summary.is_finished());
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let now = Utc::now();
        let entries: Vec<_> = (0..8)
            .map(|i| {
                let mut entry = ProgressEntry::now(format!("m-{i}"), 100, format!("tx_{i}"));
                entry.timestamp = now + Duration::minutes(i);
                entry
            })
            .collect();

        let recent = recent_progress(&entries, DEFAULT_RECENT_LIMIT);
        let ids: Vec<_> = recent.iter().map(|e| e.milestone_id.as_str()).collect();
        assert_eq!(ids, vec!["m-7", "m-6", "m-5", "m-4", "m-3"]);
    }

    #[test]
    fn pending_keeps_roadmap_order() {
        let roadmap = &fixtures::lookup_by_fixture(FixtureId::Beginner).roadmap;
        let pending: Vec<_> = pending_milestones(roadmap).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            pending,
            vec!["milestone-beginner-3", "milestone-beginner-4", "milestone-beginner-5"]
        );
    }

    #[test]
    fn achievements_grouped_in_first_seen_order() {
        let achievements = &fixtures::lookup_by_fixture(FixtureId::Advanced).achievements;
        let groups = group_achievements_by_category(achievements);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, achievements.len());

        let first = achievements[0].metadata.category.as_str();
        assert_eq!(groups.keys().next().copied(), Some(first));
    }

    #[test]
    fn achievement_stats_for_advanced_fixture() {
        let achievements = &fixtures::lookup_by_fixture(FixtureId::Advanced).achievements;
        let stats = AchievementStats::from_achievements(achievements);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.verified, achievements.iter().filter(|a| a.verified).count());
        assert_eq!(stats.minted, achievements.iter().filter(|a| a.nft_hash.is_some()).count());
        assert_eq!(stats.categories, group_achievements_by_category(achievements).len());
    }

    #[test]
    fn unverified_and_unminted_are_not_counted() {
        let mut achievements = fixtures::lookup_by_fixture(FixtureId::Beginner).achievements.clone();
        for achievement in &mut achievements {
            achievement.verified = false;
            achievement.nft_hash = None;
        }
        let stats = AchievementStats::from_achievements(&achievements);
        assert_eq!((stats.verified, stats.minted), (0, 0));
        assert_eq!(AchievementStats::from_achievements(&[]), AchievementStats::default());
    }

    #[test]
    fn level_progress_is_capped() {
        let template = fixtures::lookup_by_fixture(FixtureId::Beginner).achievements[0].clone();
        let with_level = |level: &str| {
            let mut a = template.clone();
            a.metadata.level = level.to_string();
            a
        };
        let mut achievements: Vec<_> = (0..6).map(|_| with_level("Beginner")).collect();
        achievements.push(with_level("intermediate"));

        let [beginner, intermediate, advanced] = level_progress(&achievements);
        assert_eq!((beginner.earned, beginner.cap, beginner.percentage), (6, 5, 100));
        assert_eq!((intermediate.earned, intermediate.cap, intermediate.percentage), (1, 8, 13));
        assert_eq!((advanced.earned, advanced.cap, advanced.percentage), (0, 10, 0));
        assert_eq!(advanced.level, ExperienceLevel::Advanced);
    }

    #[test]
    fn explorer_link() {
        assert_eq!(
            explorer_url(DEFAULT_EXPLORER_BASE_URL, "tx_1_abc"),
            "https://cardanoscan.io/transaction/tx_1_abc"
        );
    }
}
