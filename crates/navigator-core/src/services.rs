//! Paid service catalog
//!
//! The three services a connected user can buy, their prices, and the
//! simulated marketplace agent that registers the navigator and verifies
//! payments.

use crate::config::{simulate_latency, LatencyConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency every service is priced in
pub const CURRENCY: &str = "ADA";

/// Service identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    /// On-chain skills assessment
    SkillsAssessment,
    /// Personalized career roadmap
    RoadmapGeneration,
    /// Project Catalyst guidance
    CatalystGuidance,
}

impl ServiceId {
    /// All services in catalog order
    pub const ALL: [ServiceId; 3] = [
        Self::SkillsAssessment,
        Self::RoadmapGeneration,
        Self::CatalystGuidance,
    ];

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkillsAssessment => "skills-assessment",
            Self::RoadmapGeneration => "roadmap-generation",
            Self::CatalystGuidance => "catalyst-guidance",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A purchasable service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: &'static str,
    pub description: &'static str,
    /// Price in [`CURRENCY`]
    pub price: f64,
    pub currency: &'static str,
}

impl Service {
    /// Display price, e.g. `1.5 ADA`
    #[inline]
    #[must_use]
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

static SERVICES: [Service; 3] = [
    Service {
        id: ServiceId::SkillsAssessment,
        name: "On-Chain Skills Assessment",
        description: "Analyze your wallet activity to determine experience level and skills",
        price: 0.5,
        currency: CURRENCY,
    },
    Service {
        id: ServiceId::RoadmapGeneration,
        name: "Personalized Career Roadmap",
        description: "Get a detailed learning path with milestones and resources",
        price: 1.5,
        currency: CURRENCY,
    },
    Service {
        id: ServiceId::CatalystGuidance,
        name: "Project Catalyst Guidance",
        description: "Specialized support for Catalyst proposal creation and submission",
        price: 3.0,
        currency: CURRENCY,
    },
];

/// Format a price the way the storefront shows it (`3 ADA`, `0.5 ADA`)
#[inline]
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price} {CURRENCY}")
}

/// Service catalog and marketplace agent
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    latency: LatencyConfig,
}

impl ServiceCatalog {
    /// Create catalog with simulated agent latency
    #[inline]
    #[must_use]
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    /// All services in catalog order
    #[inline]
    #[must_use]
    pub fn services(&self) -> &'static [Service] {
        &SERVICES
    }

    /// Look up a service
    #[inline]
    #[must_use]
    pub fn get(&self, id: ServiceId) -> &'static Service {
        match id {
            ServiceId::SkillsAssessment => &SERVICES[0],
            ServiceId::RoadmapGeneration => &SERVICES[1],
            ServiceId::CatalystGuidance => &SERVICES[2],
        }
    }

    /// Look up a service by its wire name
    #[must_use]
    pub fn get_by_str(&self, id: &str) -> Option<&'static Service> {
        id.parse::<ServiceId>().ok().map(|id| self.get(id))
    }

    /// Register the navigator with the marketplace
    pub async fn register(&self) -> bool {
        simulate_latency(self.latency.register_ms).await;
        tracing::info!("Career navigator registered with service marketplace");
        true
    }

    /// Verify a payment transaction for a service
    pub async fn verify_payment(&self, service: ServiceId, transaction_hash: &str) -> bool {
        simulate_latency(self.latency.verify_ms).await;
        tracing::debug!(%service, transaction_hash, "Payment verified");
        true
    }
}
