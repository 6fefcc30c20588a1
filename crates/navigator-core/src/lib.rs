//! Navigator Core - wallet-gated career guidance
//!
//! The engine behind the Career Navigator demo:
//! - Static demo fixtures for three wallet tiers
//! - A session container holding the connected user and derived records
//! - Simulated remote operations (analysis, roadmaps, progress, payments)
//! - Guided flow and payment state machines
//! - A controller that drives the paid flows end to end
//!
//! # Example
//!
//! ```rust,ignore
//! use navigator_core::prelude::*;
//!
//! # async fn example() -> Result<(), NavigatorError> {
//! let mut navigator = Navigator::new(NavigatorConfig::instant())?;
//! navigator.connect(navigator_core::fixtures::BEGINNER_WALLET).await?;
//!
//! navigator.pay(ServiceId::SkillsAssessment).await?;
//! let assessment = navigator.run_assessment().await?;
//!
//! navigator.pay(ServiceId::RoadmapGeneration).await?;
//! let roadmap = navigator.generate_roadmap(Timeline::SixMonth).await?;
//!
//! println!("{} with {} milestones", assessment.experience_level, roadmap.milestones.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod flow;
pub mod navigator;
pub mod progress;
pub mod remote;
pub mod services;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use config::{LatencyConfig, NavigatorConfig, DEFAULT_EXPLORER_BASE_URL};
pub use error::{ConfigError, FlowError, NavigatorError, RemoteError, Result};
pub use fixtures::{DemoData, ADVANCED_WALLET, BEGINNER_WALLET, INTERMEDIATE_WALLET};
pub use flow::{FlowKind, FlowState, GuidedFlow, PaymentStatus};
pub use navigator::{Navigator, PAYMENT_FAILED_MESSAGE};
pub use progress::{AchievementStats, LevelProgress, ProgressSummary, DEFAULT_RECENT_LIMIT};
pub use remote::{MockRemote, RemoteOperations};
pub use services::{format_price, Service, ServiceCatalog, ServiceId, CURRENCY};
pub use session::Session;
pub use types::{
    Achievement, AchievementMetadata, Assessment, BountyOpportunity, CatalystOpportunity,
    ExperienceLevel, FixtureId, Milestone, ProgressEntry, Resource, ResourceType, RewardType,
    Roadmap, Timeline, UserProfile,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Navigator Core
    pub use crate::{
        Assessment, FlowKind, FlowState, Navigator, NavigatorConfig, NavigatorError,
        PaymentStatus, RemoteOperations, Roadmap, ServiceId, Session, Timeline, UserProfile,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
