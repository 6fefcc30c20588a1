//! Core types for the navigator
//!
//! Defines the records that flow between the fixture store, the session and
//! the simulated backend:
//! - User profiles and assessments
//! - Roadmaps, milestones and opportunities
//! - Achievements and progress entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Experience tier derived from wallet activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New to the ecosystem
    Beginner,
    /// Has shipped something
    Intermediate,
    /// Leads projects
    Advanced,
}

impl ExperienceLevel {
    /// Classify wallet activity.
    ///
    /// `count > 100 && score > 50` is advanced, `count > 50 || score > 30` is
    /// intermediate, anything else is beginner.
    #[inline]
    #[must_use]
    pub fn from_activity(transaction_count: u32, complexity_score: u8) -> Self {
        if transaction_count > 100 && complexity_score > 50 {
            Self::Advanced
        } else if transaction_count > 50 || complexity_score > 30 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roadmap length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    /// Three months
    #[serde(rename = "3-month")]
    ThreeMonth,
    /// Six months
    #[serde(rename = "6-month")]
    SixMonth,
    /// Twelve months
    #[serde(rename = "12-month")]
    TwelveMonth,
}

impl Timeline {
    /// All timelines in display order
    pub const ALL: [Timeline; 3] = [Self::ThreeMonth, Self::SixMonth, Self::TwelveMonth];

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeMonth => "3-month",
            Self::SixMonth => "6-month",
            Self::TwelveMonth => "12-month",
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::SixMonth
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown timeline '{s}' (expected 3-month, 6-month or 12-month)"))
    }
}

/// Reward attached to a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    /// Achievement NFT
    Nft,
    /// Mobile data eSIM
    Esim,
    /// NFT and eSIM
    Both,
}

/// Kind of learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Reference docs
    Documentation,
    /// Step-by-step guide
    Tutorial,
    /// Structured course
    Course,
    /// Tool or community venue
    Tool,
}

/// Identity of a pre-authored demo user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureId {
    /// Beginner demo user
    #[serde(rename = "user_beginner_001")]
    Beginner,
    /// Intermediate demo user
    #[serde(rename = "user_intermediate_002")]
    Intermediate,
    /// Advanced demo user
    #[serde(rename = "user_advanced_003")]
    Advanced,
}

impl FixtureId {
    /// All fixtures in canonical order
    pub const ALL: [FixtureId; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// User id of the fixture profile
    #[inline]
    #[must_use]
    pub fn user_id(&self) -> &'static str {
        match self {
            Self::Beginner => "user_beginner_001",
            Self::Intermediate => "user_intermediate_002",
            Self::Advanced => "user_advanced_003",
        }
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_id())
    }
}

/// The connected user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Connected wallet
    pub wallet_address: String,
    /// Experience tier
    pub experience_level: ExperienceLevel,
    /// Skill tags
    pub technical_skills: Vec<String>,
    /// Interest tags
    pub interests: Vec<String>,
    /// Free-text learning style
    pub learning_style: String,
    /// Free-text career path
    pub preferred_career_path: String,
    /// Skills assessment finished
    pub assessment_complete: bool,
    /// Roadmap generated
    pub roadmap_generated: bool,
    /// Catalyst guidance received
    pub catalyst_guidance_received: bool,
}

impl UserProfile {
    /// Fresh profile for a wallet with no history
    #[must_use]
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            id: format!("user_{}", Ulid::new().to_string().to_lowercase()),
            wallet_address: wallet_address.into(),
            experience_level: ExperienceLevel::Beginner,
            technical_skills: Vec::new(),
            interests: Vec::new(),
            learning_style: String::new(),
            preferred_career_path: String::new(),
            assessment_complete: false,
            roadmap_generated: false,
            catalyst_guidance_received: false,
        }
    }

    /// Overwrite derived fields from a finished assessment
    pub fn apply_assessment(&mut self, assessment: &Assessment) {
        self.experience_level = assessment.experience_level;
        self.technical_skills = assessment.technical_skills.clone();
        self.interests = assessment.interests.clone();
        self.learning_style = assessment.learning_style.clone();
        self.preferred_career_path = assessment.preferred_career_path.clone();
        self.assessment_complete = true;
    }
}

/// Result of wallet analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Experience tier
    pub experience_level: ExperienceLevel,
    /// Skill tags
    pub technical_skills: Vec<String>,
    /// Interest tags
    pub interests: Vec<String>,
    /// Learning style label
    pub learning_style: String,
    /// Career path label
    pub preferred_career_path: String,
    /// Observed transactions
    pub transaction_count: u32,
    /// Activity complexity, 0-100
    pub complexity_score: u8,
    /// Recommended next steps
    pub next_steps: Vec<String>,
    /// Demo user this assessment was produced for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<FixtureId>,
}

/// Personalized learning plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Length of the plan
    pub timeline: Timeline,
    /// Ordered milestones
    pub milestones: Vec<Milestone>,
    /// Learning resources
    pub resources: Vec<Resource>,
    /// Funding rounds matching the user
    pub catalyst_opportunities: Vec<CatalystOpportunity>,
    /// Open bounties
    pub bounty_opportunities: Vec<BountyOpportunity>,
    /// Wallet integration tips
    pub begin_wallet_tips: Vec<String>,
}

impl Roadmap {
    /// Find a milestone by id
    #[inline]
    #[must_use]
    pub fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Number of completed milestones
    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }
}

/// A completable unit of a roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_date: String,
    pub completed: bool,
    pub verification_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_type: Option<RewardType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub url: String,
    pub description: String,
    pub difficulty: ExperienceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalystOpportunity {
    pub id: String,
    pub title: String,
    pub category: String,
    pub funding_amount: String,
    pub deadline: String,
    pub match_score: u8,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyOpportunity {
    pub id: String,
    pub title: String,
    pub reward: String,
    pub deadline: String,
    pub skills_required: Vec<String>,
    pub description: String,
}

/// Earned credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_earned: String,
    /// Reference of the minted NFT, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft_hash: Option<String>,
    pub verified: bool,
    pub metadata: AchievementMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementMetadata {
    pub category: String,
    pub level: String,
    pub skills: Vec<String>,
}

/// Append-only record of progress against a milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// Referenced milestone (not validated)
    pub milestone_id: String,
    /// When the progress was recorded
    pub timestamp: DateTime<Utc>,
    /// Completion, 0-100
    pub percentage: u8,
    /// Reference returned by the ledger
    pub transaction_hash: String,
}

impl ProgressEntry {
    /// Entry stamped with the current time
    #[must_use]
    pub fn now(milestone_id: impl Into<String>, percentage: u8, transaction_hash: impl Into<String>) -> Self {
        Self {
            milestone_id: milestone_id.into(),
            timestamp: Utc::now(),
            percentage: percentage.min(100),
            transaction_hash: transaction_hash.into(),
        }
    }

    /// Whether the milestone was fully completed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percentage == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_level_thresholds() {
        assert_eq!(ExperienceLevel::from_activity(101, 51), ExperienceLevel::Advanced);
        assert_eq!(ExperienceLevel::from_activity(100, 99), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_activity(51, 0), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_activity(10, 31), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_activity(50, 30), ExperienceLevel::Beginner);
    }

    #[test]
    fn timeline_wire_names() {
        assert_eq!(serde_json::to_string(&Timeline::ThreeMonth).unwrap(), "\"3-month\"");
        assert_eq!("12-month".parse::<Timeline>().unwrap(), Timeline::TwelveMonth);
        assert!("9-month".parse::<Timeline>().is_err());
    }

    #[test]
    fn fixture_id_serializes_as_user_id() {
        let json = serde_json::to_string(&FixtureId::Intermediate).unwrap();
        assert_eq!(json, "\"user_intermediate_002\"");
    }

    #[test]
    fn new_profile_is_blank() {
        let user = UserProfile::new("addr_test1");
        assert!(user.id.starts_with("user_"));
        assert_eq!(user.experience_level, ExperienceLevel::Beginner);
        assert!(user.technical_skills.is_empty());
        assert!(!user.assessment_complete);
        assert!(!user.roadmap_generated);
    }

    #[test]
    fn progress_entry_clamps_percentage() {
        let entry = ProgressEntry::now("m-1", 150, "tx_1");
        assert_eq!(entry.percentage, 100);
        assert!(entry.is_complete());
    }

    #[test]
    fn milestone_wire_shape() {
        let milestone = Milestone {
            id: "m-1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            target_date: "2025-02-15".to_string(),
            completed: false,
            verification_steps: vec![],
            reward_type: Some(RewardType::Esim),
        };
        let value = serde_json::to_value(&milestone).unwrap();
        assert_eq!(value["targetDate"], "2025-02-15");
        assert_eq!(value["rewardType"], "esim");
    }
}
