//! Simulated remote operations
//!
//! Stands in for the backend that would analyze wallets, synthesize roadmaps,
//! record progress on-chain, mint achievement NFTs and capture payments. Each
//! call waits for a configured latency and then resolves from the fixture
//! store or from seeded randomness.
//!
//! Every operation returns `Result<_, RemoteError>` so callers must handle
//! the failure branch even though [`MockRemote`] itself never fails.

use crate::config::{simulate_latency, NavigatorConfig};
use crate::error::RemoteError;
use crate::fixtures::{self, bounty, catalyst, milestone, resource};
use crate::services::ServiceId;
use crate::types::{
    Achievement, Assessment, BountyOpportunity, CatalystOpportunity, ExperienceLevel,
    ResourceType, RewardType, Roadmap, Timeline,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Skill vocabulary sampled by wallet analysis
pub const SKILL_VOCABULARY: [&str; 9] = [
    "Smart Contracts",
    "DeFi",
    "NFTs",
    "Governance",
    "Staking",
    "Plutus",
    "Aiken",
    "MeshJS",
    "Begin Wallet",
];

/// Interest vocabulary sampled by wallet analysis
pub const INTEREST_VOCABULARY: [&str; 6] = [
    "DeFi Development",
    "NFT Projects",
    "Governance Participation",
    "Education",
    "Infrastructure",
    "Mobile Apps",
];

pub const LEARNING_STYLES: [&str; 4] = ["Visual", "Hands-on", "Reading", "Collaborative"];

pub const CAREER_PATHS: [&str; 5] = [
    "Smart Contract Developer",
    "DeFi Protocol Designer",
    "Cardano Educator",
    "dApp Developer",
    "Blockchain Consultant",
];

const SKILL_RETENTION: f64 = 0.4;
const INTEREST_RETENTION: f64 = 0.5;

const GENERIC_NEXT_STEPS: [&str; 4] = [
    "Generate personalized learning roadmap",
    "Explore Project Catalyst opportunities",
    "Join Cardano developer community",
    "Start with MeshJS tutorials",
];

const REF_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Backend operations consumed by the guided flows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteOperations: Send + Sync {
    /// Derive an assessment from wallet activity
    async fn analyze_wallet(&self, wallet: &str) -> Result<Assessment, RemoteError>;

    /// Build a roadmap for an assessment
    async fn generate_roadmap(
        &self,
        assessment: &Assessment,
        timeline: Timeline,
    ) -> Result<Roadmap, RemoteError>;

    /// Record milestone progress; returns the transaction reference
    async fn record_progress(
        &self,
        milestone_id: &str,
        percentage: u8,
        wallet: &str,
    ) -> Result<String, RemoteError>;

    /// Capture a payment; `Ok(false)` means declined
    async fn process_payment(
        &self,
        amount: f64,
        wallet: &str,
        service: ServiceId,
    ) -> Result<bool, RemoteError>;

    /// Mint an NFT for an achievement; returns the NFT reference
    async fn mint_achievement_nft(
        &self,
        achievement: &Achievement,
        wallet: &str,
    ) -> Result<String, RemoteError>;
}

/// Simulated backend driven by fixtures and seeded randomness
#[derive(Debug)]
pub struct MockRemote {
    config: NavigatorConfig,
    rng: Mutex<StdRng>,
}

impl MockRemote {
    /// Create a simulated backend
    #[must_use]
    pub fn new(config: NavigatorConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    fn random_assessment(&self) -> Assessment {
        let mut rng = self.rng.lock();

        let transaction_count = rng.random_range(10..1010);
        let complexity_score = rng.random_range(0..100);
        let technical_skills = SKILL_VOCABULARY
            .iter()
            .filter(|_| rng.random_bool(SKILL_RETENTION))
            .map(|s| (*s).to_string())
            .collect();
        let interests = INTEREST_VOCABULARY
            .iter()
            .filter(|_| rng.random_bool(INTEREST_RETENTION))
            .map(|s| (*s).to_string())
            .collect();
        let learning_style = LEARNING_STYLES[rng.random_range(0..LEARNING_STYLES.len())];
        let career_path = CAREER_PATHS[rng.random_range(0..CAREER_PATHS.len())];

        Assessment {
            experience_level: ExperienceLevel::from_activity(transaction_count, complexity_score),
            technical_skills,
            interests,
            learning_style: learning_style.to_string(),
            preferred_career_path: career_path.to_string(),
            transaction_count,
            complexity_score,
            next_steps: GENERIC_NEXT_STEPS.iter().map(|s| (*s).to_string()).collect(),
            fixture: None,
        }
    }

    /// Opaque reference like `tx_1705123456789_k3j9x0a1b`
    fn reference(&self, prefix: &str) -> String {
        let suffix: String = {
            let mut rng = self.rng.lock();
            (0..9)
                .map(|_| char::from(REF_ALPHABET[rng.random_range(0..REF_ALPHABET.len())]))
                .collect()
        };
        format!("{prefix}_{}_{suffix}", chrono::Utc::now().timestamp_millis())
    }
}

impl Default for MockRemote {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}

#[async_trait]
impl RemoteOperations for MockRemote {
    async fn analyze_wallet(&self, wallet: &str) -> Result<Assessment, RemoteError> {
        simulate_latency(self.config.latency.analyze_ms).await;

        if let Some(demo) = fixtures::lookup_by_wallet(wallet) {
            tracing::debug!(fixture = %demo.fixture, "Returning fixture assessment");
            return Ok(demo.assessment.clone());
        }

        let assessment = self.random_assessment();
        tracing::debug!(
            transaction_count = assessment.transaction_count,
            complexity_score = assessment.complexity_score,
            level = %assessment.experience_level,
            "Synthesized wallet assessment"
        );
        Ok(assessment)
    }

    async fn generate_roadmap(
        &self,
        assessment: &Assessment,
        timeline: Timeline,
    ) -> Result<Roadmap, RemoteError> {
        simulate_latency(self.config.latency.roadmap_ms).await;

        if let Some(fixture) = assessment.fixture {
            tracing::debug!(%fixture, %timeline, "Returning fixture roadmap");
            let mut roadmap = fixtures::lookup_by_fixture(fixture).roadmap.clone();
            roadmap.timeline = timeline;
            return Ok(roadmap);
        }

        Ok(generic_roadmap(timeline))
    }

    async fn record_progress(
        &self,
        milestone_id: &str,
        percentage: u8,
        wallet: &str,
    ) -> Result<String, RemoteError> {
        simulate_latency(self.config.latency.progress_ms).await;
        let tx = self.reference("tx");
        tracing::debug!(milestone_id, percentage, wallet, tx = %tx, "Progress recorded");
        Ok(tx)
    }

    async fn process_payment(
        &self,
        amount: f64,
        wallet: &str,
        service: ServiceId,
    ) -> Result<bool, RemoteError> {
        simulate_latency(self.config.latency.payment_ms).await;

        let approved = fixtures::is_demo_wallet(wallet)
            || self.rng.lock().random::<f64>() < self.config.payment_success_rate;
        tracing::debug!(amount, %service, approved, "Payment processed");
        Ok(approved)
    }

    async fn mint_achievement_nft(
        &self,
        achievement: &Achievement,
        wallet: &str,
    ) -> Result<String, RemoteError> {
        simulate_latency(self.config.latency.mint_ms).await;
        let nft = self.reference("nft");
        tracing::debug!(achievement = %achievement.id, wallet, nft = %nft, "Achievement minted");
        Ok(nft)
    }
}

/// Funding rounds offered with the generic roadmap
#[must_use]
pub fn catalyst_opportunities() -> Vec<CatalystOpportunity> {
    vec![
        catalyst(
            "catalyst-1",
            "Developer Tools & Infrastructure",
            "Development",
            "$50,000 - $200,000",
            "2025-03-01",
            85,
            &["Technical expertise", "Open source commitment", "Community engagement"],
        ),
        catalyst(
            "catalyst-2",
            "Education & Onboarding",
            "Education",
            "$25,000 - $100,000",
            "2025-02-15",
            72,
            &["Educational background", "Content creation", "Cardano knowledge"],
        ),
    ]
}

/// Bounties offered with the generic roadmap
#[must_use]
pub fn bounty_opportunities() -> Vec<BountyOpportunity> {
    vec![
        bounty(
            "bounty-1",
            "MeshJS Tutorial Creation",
            "500 ADA",
            "2025-02-28",
            &["JavaScript", "MeshJS", "Technical Writing"],
            "Create comprehensive tutorials for MeshJS framework",
        ),
        bounty(
            "bounty-2",
            "Begin Wallet Integration Guide",
            "300 ADA",
            "2025-03-15",
            &["Mobile Development", "Begin Wallet", "Documentation"],
            "Write integration guide for Begin Wallet features",
        ),
    ]
}

/// Three-milestone roadmap for wallets without a fixture
#[must_use]
pub fn generic_roadmap(timeline: Timeline) -> Roadmap {
    Roadmap {
        timeline,
        milestones: vec![
            milestone(
                "milestone-1",
                "Complete Cardano Fundamentals",
                "Learn core concepts of Cardano blockchain and its unique features",
                "2025-02-15",
                false,
                &["Pass Cardano fundamentals quiz", "Set up wallet", "Make first transaction"],
                RewardType::Esim,
            ),
            milestone(
                "milestone-2",
                "First Smart Contract Deployment",
                "Deploy your first smart contract on Cardano testnet",
                "2025-03-15",
                false,
                &["Write simple contract", "Deploy to testnet", "Interact with contract"],
                RewardType::Nft,
            ),
            milestone(
                "milestone-3",
                "Project Catalyst Participation",
                "Submit your first Project Catalyst proposal",
                "2025-04-15",
                false,
                &["Research active rounds", "Prepare proposal", "Submit application"],
                RewardType::Both,
            ),
        ],
        resources: vec![
            resource(
                "Cardano Developer Portal",
                ResourceType::Documentation,
                "https://developers.cardano.org",
                "Official Cardano development resources",
                ExperienceLevel::Beginner,
            ),
            resource(
                "MeshJS Framework",
                ResourceType::Tool,
                "https://meshjs.dev",
                "TypeScript framework for Cardano development",
                ExperienceLevel::Intermediate,
            ),
            resource(
                "Aiken Smart Contract Language",
                ResourceType::Documentation,
                "https://aiken-lang.org",
                "Modern smart contract language for Cardano",
                ExperienceLevel::Advanced,
            ),
        ],
        catalyst_opportunities: catalyst_opportunities(),
        bounty_opportunities: bounty_opportunities(),
        begin_wallet_tips: vec![
            "Use Begin Wallet metadata to track learning progress".to_string(),
            "Leverage eSIM rewards for mobile development".to_string(),
            "Integrate rating system for peer feedback".to_string(),
        ],
    }
}
