//! Demo fixture store
//!
//! Pre-authored data for three demo wallets (beginner, intermediate,
//! advanced) so every flow can run without a backend. The table is built once
//! and never mutated; lookups hand out references or clones.

use crate::types::{
    Achievement, AchievementMetadata, Assessment, BountyOpportunity, CatalystOpportunity,
    ExperienceLevel, FixtureId, Milestone, ProgressEntry, Resource, ResourceType, RewardType,
    Roadmap, Timeline, UserProfile,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Wallet of the beginner demo user
pub const BEGINNER_WALLET: &str =
    "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3jcu5d8ps7zex2k2xt3uqxgjqnnj0vs2f4z";
/// Wallet of the intermediate demo user
pub const INTERMEDIATE_WALLET: &str =
    "addr1q9f7qk8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x8v9n4x";
/// Wallet of the advanced demo user
pub const ADVANCED_WALLET: &str =
    "addr1qy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7qqy8ac7q";

/// Everything known about one demo user
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub fixture: FixtureId,
    pub profile: UserProfile,
    pub assessment: Assessment,
    pub roadmap: Roadmap,
    pub achievements: Vec<Achievement>,
    pub progress_entries: Vec<ProgressEntry>,
}

static DEMO_DATA: Lazy<[DemoData; 3]> = Lazy::new(|| [beginner(), intermediate(), advanced()]);

/// Look up demo data by wallet identifier
#[must_use]
pub fn lookup_by_wallet(wallet: &str) -> Option<&'static DemoData> {
    DEMO_DATA.iter().find(|d| d.profile.wallet_address == wallet)
}

/// Look up demo data by fixture identity
#[must_use]
pub fn lookup_by_fixture(fixture: FixtureId) -> &'static DemoData {
    match fixture {
        FixtureId::Beginner => &DEMO_DATA[0],
        FixtureId::Intermediate => &DEMO_DATA[1],
        FixtureId::Advanced => &DEMO_DATA[2],
    }
}

/// Demo wallets in canonical order
#[inline]
#[must_use]
pub fn list_known_wallets() -> [&'static str; 3] {
    [BEGINNER_WALLET, INTERMEDIATE_WALLET, ADVANCED_WALLET]
}

/// Whether the wallet belongs to a demo user
#[inline]
#[must_use]
pub fn is_demo_wallet(wallet: &str) -> bool {
    list_known_wallets().contains(&wallet)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn profile(
    fixture: FixtureId,
    wallet: &str,
    level: ExperienceLevel,
    skills: &[&str],
    interests: &[&str],
    learning_style: &str,
    career_path: &str,
    catalyst_guidance_received: bool,
) -> UserProfile {
    UserProfile {
        id: fixture.user_id().to_string(),
        wallet_address: wallet.to_string(),
        experience_level: level,
        technical_skills: strings(skills),
        interests: strings(interests),
        learning_style: learning_style.to_string(),
        preferred_career_path: career_path.to_string(),
        assessment_complete: true,
        roadmap_generated: true,
        catalyst_guidance_received,
    }
}

fn assessment_for(profile: &UserProfile, fixture: FixtureId, count: u32, score: u8, next_steps: &[&str]) -> Assessment {
    Assessment {
        experience_level: profile.experience_level,
        technical_skills: profile.technical_skills.clone(),
        interests: profile.interests.clone(),
        learning_style: profile.learning_style.clone(),
        preferred_career_path: profile.preferred_career_path.clone(),
        transaction_count: count,
        complexity_score: score,
        next_steps: strings(next_steps),
        fixture: Some(fixture),
    }
}

pub(crate) fn milestone(
    id: &str,
    title: &str,
    description: &str,
    target_date: &str,
    completed: bool,
    steps: &[&str],
    reward: RewardType,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        target_date: target_date.to_string(),
        completed,
        verification_steps: strings(steps),
        reward_type: Some(reward),
    }
}

pub(crate) fn resource(
    title: &str,
    resource_type: ResourceType,
    url: &str,
    description: &str,
    difficulty: ExperienceLevel,
) -> Resource {
    Resource {
        title: title.to_string(),
        resource_type,
        url: url.to_string(),
        description: description.to_string(),
        difficulty,
    }
}

pub(crate) fn catalyst(
    id: &str,
    title: &str,
    category: &str,
    funding: &str,
    deadline: &str,
    match_score: u8,
    requirements: &[&str],
) -> CatalystOpportunity {
    CatalystOpportunity {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        funding_amount: funding.to_string(),
        deadline: deadline.to_string(),
        match_score,
        requirements: strings(requirements),
    }
}

pub(crate) fn bounty(
    id: &str,
    title: &str,
    reward: &str,
    deadline: &str,
    skills: &[&str],
    description: &str,
) -> BountyOpportunity {
    BountyOpportunity {
        id: id.to_string(),
        title: title.to_string(),
        reward: reward.to_string(),
        deadline: deadline.to_string(),
        skills_required: strings(skills),
        description: description.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn achievement(
    id: &str,
    title: &str,
    description: &str,
    date_earned: &str,
    nft_hash: &str,
    category: &str,
    level: &str,
    skills: &[&str],
) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date_earned: date_earned.to_string(),
        nft_hash: Some(nft_hash.to_string()),
        verified: true,
        metadata: AchievementMetadata {
            category: category.to_string(),
            level: level.to_string(),
            skills: strings(skills),
        },
    }
}

fn progress(milestone_id: &str, timestamp: &str, percentage: u8, tx: &str) -> ProgressEntry {
    ProgressEntry {
        milestone_id: milestone_id.to_string(),
        timestamp: at(timestamp),
        percentage,
        transaction_hash: tx.to_string(),
    }
}

fn beginner() -> DemoData {
    use ExperienceLevel::{Beginner, Intermediate};

    let fixture = FixtureId::Beginner;
    let profile = profile(
        fixture,
        BEGINNER_WALLET,
        Beginner,
        &["Basic Wallet Usage", "ADA Staking"],
        &["DeFi Development", "Education"],
        "Visual",
        "Smart Contract Developer",
        false,
    );
    let assessment = assessment_for(
        &profile,
        fixture,
        23,
        15,
        &[
            "Complete Cardano fundamentals course",
            "Set up development environment",
            "Learn MeshJS basics",
            "Join Cardano developer community",
        ],
    );
    let roadmap = Roadmap {
        timeline: Timeline::SixMonth,
        milestones: vec![
            milestone(
                "milestone-beginner-1",
                "Cardano Fundamentals Mastery",
                "Complete comprehensive understanding of Cardano blockchain architecture, consensus mechanism, and core concepts",
                "2025-03-15",
                true,
                &[
                    "Pass Cardano fundamentals assessment with 85%+ score",
                    "Set up Cardano wallet and perform basic transactions",
                    "Understand UTXO model and eUTXO extensions",
                ],
                RewardType::Esim,
            ),
            milestone(
                "milestone-beginner-2",
                "Development Environment Setup",
                "Establish complete development environment for Cardano smart contract development",
                "2025-04-01",
                true,
                &[
                    "Install and configure Cardano node",
                    "Set up MeshJS development environment",
                    "Deploy first Hello World contract to testnet",
                ],
                RewardType::Nft,
            ),
            milestone(
                "milestone-beginner-3",
                "First Smart Contract Deployment",
                "Successfully deploy and interact with your first smart contract on Cardano testnet",
                "2025-05-01",
                false,
                &[
                    "Write simple vesting contract using Aiken",
                    "Deploy contract to Cardano testnet",
                    "Create frontend interaction using MeshJS",
                    "Document the development process",
                ],
                RewardType::Both,
            ),
            milestone(
                "milestone-beginner-4",
                "Community Engagement",
                "Actively participate in Cardano developer community and contribute to ecosystem",
                "2025-06-15",
                false,
                &[
                    "Join Cardano Stack Exchange and answer 5 questions",
                    "Contribute to open source Cardano project",
                    "Attend virtual Cardano developer meetup",
                    "Share learning journey on social media",
                ],
                RewardType::Esim,
            ),
            milestone(
                "milestone-beginner-5",
                "Project Catalyst Readiness",
                "Prepare for first Project Catalyst proposal submission",
                "2025-07-30",
                false,
                &[
                    "Complete Catalyst Academy course",
                    "Draft initial project proposal",
                    "Get community feedback on proposal idea",
                    "Understand Catalyst voting process",
                ],
                RewardType::Nft,
            ),
        ],
        resources: vec![
            resource(
                "Cardano Developer Portal",
                ResourceType::Documentation,
                "https://developers.cardano.org",
                "Official comprehensive guide to Cardano development",
                Beginner,
            ),
            resource(
                "MeshJS Getting Started",
                ResourceType::Tutorial,
                "https://meshjs.dev/guides/getting-started",
                "Step-by-step guide to building with MeshJS",
                Beginner,
            ),
            resource(
                "Aiken Language Tutorial",
                ResourceType::Course,
                "https://aiken-lang.org/getting-started",
                "Learn Aiken smart contract language from basics",
                Intermediate,
            ),
            resource(
                "Cardano Stack Exchange",
                ResourceType::Tool,
                "https://cardano.stackexchange.com",
                "Community Q&A platform for Cardano developers",
                Beginner,
            ),
        ],
        catalyst_opportunities: vec![
            catalyst(
                "catalyst-beginner-1",
                "Developer Tools & Infrastructure",
                "Development",
                "$25,000 - $75,000",
                "2025-03-01",
                78,
                &["Basic technical skills", "Clear project scope", "Community benefit"],
            ),
            catalyst(
                "catalyst-beginner-2",
                "Education & Onboarding",
                "Education",
                "$10,000 - $50,000",
                "2025-02-15",
                85,
                &[
                    "Educational content creation",
                    "Beginner-friendly approach",
                    "Measurable outcomes",
                ],
            ),
        ],
        bounty_opportunities: vec![
            bounty(
                "bounty-beginner-1",
                "Beginner Tutorial Series",
                "200 ADA",
                "2025-03-30",
                &["Technical Writing", "Basic Cardano Knowledge"],
                "Create beginner-friendly tutorial series for new Cardano developers",
            ),
            bounty(
                "bounty-beginner-2",
                "MeshJS Code Examples",
                "150 ADA",
                "2025-04-15",
                &["JavaScript", "MeshJS", "Documentation"],
                "Contribute practical code examples to MeshJS documentation",
            ),
        ],
        begin_wallet_tips: strings(&[
            "Use Begin Wallet metadata to track your learning milestones",
            "Leverage eSIM rewards for mobile development testing",
            "Rate completed tutorials using Begin Wallet rating system",
            "Share progress updates through Begin Wallet social features",
        ]),
    };
    let achievements = vec![
        achievement(
            "achievement-beginner-1",
            "First Steps in Cardano",
            "Successfully completed Cardano fundamentals assessment and set up first wallet",
            "2025-01-15",
            "nft_1705123456_abc123def",
            "Education",
            "Beginner",
            &["Wallet Management", "Basic Transactions"],
        ),
        achievement(
            "achievement-beginner-2",
            "Development Environment Master",
            "Successfully configured complete Cardano development environment",
            "2025-01-28",
            "nft_1706234567_def456ghi",
            "Development",
            "Beginner",
            &["Environment Setup", "Tool Configuration"],
        ),
    ];
    let progress_entries = vec![
        progress("milestone-beginner-1", "2025-01-15T10:30:00Z", 100, "tx_1705123456_progress_001"),
        progress("milestone-beginner-2", "2025-01-28T14:45:00Z", 100, "tx_1706234567_progress_002"),
        progress("milestone-beginner-3", "2025-02-05T09:15:00Z", 65, "tx_1707345678_progress_003"),
    ];

    DemoData {
        fixture,
        profile,
        assessment,
        roadmap,
        achievements,
        progress_entries,
    }
}

fn intermediate() -> DemoData {
    use ExperienceLevel::{Advanced, Intermediate};

    let fixture = FixtureId::Intermediate;
    let profile = profile(
        fixture,
        INTERMEDIATE_WALLET,
        Intermediate,
        &["Smart Contracts", "MeshJS", "NFTs", "Governance", "Begin Wallet"],
        &["NFT Projects", "Governance Participation", "Mobile Apps"],
        "Hands-on",
        "dApp Developer",
        true,
    );
    let assessment = assessment_for(
        &profile,
        fixture,
        156,
        67,
        &[
            "Build first production dApp",
            "Contribute to open source projects",
            "Apply for Project Catalyst funding",
            "Mentor other developers",
        ],
    );
    let roadmap = Roadmap {
        timeline: Timeline::SixMonth,
        milestones: vec![
            milestone(
                "milestone-intermediate-1",
                "Production dApp Development",
                "Build and deploy a full-featured decentralized application on Cardano mainnet",
                "2025-03-01",
                true,
                &[
                    "Design comprehensive dApp architecture",
                    "Implement smart contracts with proper testing",
                    "Create responsive frontend with MeshJS integration",
                    "Deploy to mainnet with proper security audits",
                ],
                RewardType::Both,
            ),
            milestone(
                "milestone-intermediate-2",
                "NFT Marketplace Creation",
                "Develop a fully functional NFT marketplace with advanced features",
                "2025-04-15",
                true,
                &[
                    "Implement NFT minting and trading functionality",
                    "Add royalty distribution system",
                    "Integrate with multiple wallet providers",
                    "Implement advanced search and filtering",
                ],
                RewardType::Nft,
            ),
            milestone(
                "milestone-intermediate-3",
                "Open Source Contribution",
                "Make significant contributions to major Cardano ecosystem projects",
                "2025-05-30",
                false,
                &[
                    "Identify high-impact open source project",
                    "Submit 3+ meaningful pull requests",
                    "Help with code reviews and issue triage",
                    "Maintain contribution for 2+ months",
                ],
                RewardType::Esim,
            ),
            milestone(
                "milestone-intermediate-4",
                "Project Catalyst Proposal",
                "Successfully submit and present Project Catalyst funding proposal",
                "2025-06-15",
                false,
                &[
                    "Research and validate project idea",
                    "Create detailed proposal with budget breakdown",
                    "Present to community and gather feedback",
                    "Submit proposal for Catalyst voting",
                ],
                RewardType::Both,
            ),
            milestone(
                "milestone-intermediate-5",
                "Developer Mentorship",
                "Mentor junior developers and contribute to community growth",
                "2025-07-30",
                false,
                &[
                    "Mentor 2+ junior developers",
                    "Create educational content or workshops",
                    "Participate in developer community events",
                    "Help organize local Cardano meetups",
                ],
                RewardType::Nft,
            ),
        ],
        resources: vec![
            resource(
                "Advanced MeshJS Patterns",
                ResourceType::Documentation,
                "https://meshjs.dev/guides/advanced",
                "Advanced patterns and best practices for MeshJS development",
                Intermediate,
            ),
            resource(
                "Cardano Improvement Proposals",
                ResourceType::Documentation,
                "https://cips.cardano.org",
                "Stay updated with latest Cardano protocol improvements",
                Advanced,
            ),
            resource(
                "Plutus Pioneer Program",
                ResourceType::Course,
                "https://plutus-pioneer-program.readthedocs.io",
                "Comprehensive smart contract development course",
                Advanced,
            ),
            resource(
                "Cardano Developer Community",
                ResourceType::Tool,
                "https://discord.gg/cardano-developers",
                "Active Discord community for Cardano developers",
                Intermediate,
            ),
        ],
        catalyst_opportunities: vec![
            catalyst(
                "catalyst-intermediate-1",
                "DeFi & Financial Services",
                "DeFi",
                "$75,000 - $200,000",
                "2025-03-01",
                88,
                &["Proven development experience", "DeFi expertise", "Security focus"],
            ),
            catalyst(
                "catalyst-intermediate-2",
                "NFT & Digital Assets",
                "NFTs",
                "$50,000 - $150,000",
                "2025-02-15",
                92,
                &["NFT platform experience", "Creative vision", "Technical implementation"],
            ),
        ],
        bounty_opportunities: vec![
            bounty(
                "bounty-intermediate-1",
                "Advanced dApp Architecture Guide",
                "800 ADA",
                "2025-03-15",
                &["Advanced Cardano Development", "Architecture Design", "Technical Writing"],
                "Create comprehensive guide for scalable dApp architecture patterns",
            ),
            bounty(
                "bounty-intermediate-2",
                "NFT Marketplace Integration",
                "1200 ADA",
                "2025-04-30",
                &["Smart Contracts", "NFT Standards", "Frontend Development"],
                "Build reusable NFT marketplace components for the community",
            ),
        ],
        begin_wallet_tips: strings(&[
            "Use Begin Wallet for seamless dApp testing and user feedback",
            "Implement Begin Wallet rating system in your applications",
            "Leverage eSIM features for mobile-first dApp experiences",
            "Integrate Begin Wallet metadata for enhanced user profiles",
        ]),
    };
    let achievements = vec![
        achievement(
            "achievement-intermediate-1",
            "dApp Developer",
            "Successfully deployed first production dApp on Cardano mainnet",
            "2024-12-10",
            "nft_1702345678_ghi789jkl",
            "Development",
            "Intermediate",
            &["Smart Contracts", "Frontend Development", "MeshJS"],
        ),
        achievement(
            "achievement-intermediate-2",
            "NFT Marketplace Creator",
            "Built and launched fully functional NFT marketplace with advanced features",
            "2025-01-05",
            "nft_1704456789_jkl012mno",
            "NFTs",
            "Intermediate",
            &["NFT Standards", "Marketplace Logic", "User Experience"],
        ),
        achievement(
            "achievement-intermediate-3",
            "Community Contributor",
            "Made significant contributions to open source Cardano projects",
            "2025-01-20",
            "nft_1705567890_mno345pqr",
            "Community",
            "Intermediate",
            &["Open Source", "Code Review", "Collaboration"],
        ),
    ];
    let progress_entries = vec![
        progress("milestone-intermediate-1", "2024-12-10T16:20:00Z", 100, "tx_1702456789_progress_004"),
        progress("milestone-intermediate-2", "2025-01-05T11:30:00Z", 100, "tx_1704567890_progress_005"),
        progress("milestone-intermediate-3", "2025-01-20T13:45:00Z", 80, "tx_1705678901_progress_006"),
        progress("milestone-intermediate-4", "2025-02-01T15:10:00Z", 45, "tx_1706789012_progress_007"),
    ];

    DemoData {
        fixture,
        profile,
        assessment,
        roadmap,
        achievements,
        progress_entries,
    }
}

fn advanced() -> DemoData {
    use ExperienceLevel::Advanced;

    let fixture = FixtureId::Advanced;
    let profile = profile(
        fixture,
        ADVANCED_WALLET,
        Advanced,
        &[
            "Smart Contracts",
            "DeFi",
            "NFTs",
            "Governance",
            "Staking",
            "Plutus",
            "Aiken",
            "MeshJS",
            "Begin Wallet",
        ],
        &["DeFi Development", "Infrastructure", "Education", "Governance Participation"],
        "Collaborative",
        "Blockchain Consultant",
        true,
    );
    let assessment = assessment_for(
        &profile,
        fixture,
        847,
        92,
        &[
            "Lead major ecosystem project",
            "Establish consulting practice",
            "Speak at conferences",
            "Publish research papers",
        ],
    );
    let roadmap = Roadmap {
        timeline: Timeline::TwelveMonth,
        milestones: vec![
            milestone(
                "milestone-advanced-1",
                "Ecosystem Leadership Project",
                "Lead a major infrastructure project that benefits the entire Cardano ecosystem",
                "2025-04-01",
                true,
                &[
                    "Identify critical ecosystem need",
                    "Assemble and lead development team",
                    "Secure funding through Catalyst or partnerships",
                    "Deliver production-ready solution with documentation",
                ],
                RewardType::Both,
            ),
            milestone(
                "milestone-advanced-2",
                "Research Publication",
                "Publish peer-reviewed research contributing to blockchain and Cardano knowledge",
                "2025-06-15",
                true,
                &[
                    "Conduct original research in blockchain domain",
                    "Write comprehensive research paper",
                    "Submit to peer-reviewed conference or journal",
                    "Present findings at academic or industry conference",
                ],
                RewardType::Nft,
            ),
            milestone(
                "milestone-advanced-3",
                "Consulting Practice Establishment",
                "Establish successful blockchain consulting practice with multiple clients",
                "2025-08-30",
                false,
                &[
                    "Develop consulting service offerings",
                    "Acquire 3+ enterprise clients",
                    "Deliver successful blockchain implementations",
                    "Build team of specialized consultants",
                ],
                RewardType::Esim,
            ),
            milestone(
                "milestone-advanced-4",
                "Conference Speaking Circuit",
                "Become recognized speaker at major blockchain and Cardano conferences",
                "2025-10-15",
                false,
                &[
                    "Submit and get accepted to 3+ major conferences",
                    "Deliver high-quality technical presentations",
                    "Engage with community through workshops",
                    "Build reputation as thought leader",
                ],
                RewardType::Both,
            ),
            milestone(
                "milestone-advanced-5",
                "Ecosystem Governance Participation",
                "Take active leadership role in Cardano ecosystem governance and decision-making",
                "2025-12-31",
                false,
                &[
                    "Participate in Cardano governance processes",
                    "Contribute to protocol improvement proposals",
                    "Lead community initiatives and working groups",
                    "Mentor next generation of ecosystem leaders",
                ],
                RewardType::Nft,
            ),
        ],
        resources: vec![
            resource(
                "Cardano Research Papers",
                ResourceType::Documentation,
                "https://iohk.io/research/",
                "Latest academic research from IOHK and community",
                Advanced,
            ),
            resource(
                "Ouroboros Protocol Specifications",
                ResourceType::Documentation,
                "https://cardano.org/ouroboros/",
                "Deep dive into Cardano's consensus protocol",
                Advanced,
            ),
            resource(
                "Enterprise Blockchain Architecture",
                ResourceType::Course,
                "https://enterprise-blockchain.org",
                "Advanced course on enterprise blockchain implementations",
                Advanced,
            ),
            resource(
                "Cardano Foundation Technical Council",
                ResourceType::Tool,
                "https://cardanofoundation.org/technical-council",
                "Participate in high-level technical discussions",
                Advanced,
            ),
        ],
        catalyst_opportunities: vec![
            catalyst(
                "catalyst-advanced-1",
                "Infrastructure & Scalability",
                "Infrastructure",
                "$200,000 - $500,000",
                "2025-03-01",
                95,
                &["Proven track record", "Technical leadership", "Ecosystem impact"],
            ),
            catalyst(
                "catalyst-advanced-2",
                "Research & Development",
                "Research",
                "$150,000 - $400,000",
                "2025-02-15",
                89,
                &["Academic credentials", "Research experience", "Publication record"],
            ),
        ],
        bounty_opportunities: vec![
            bounty(
                "bounty-advanced-1",
                "Protocol Optimization Research",
                "5000 ADA",
                "2025-06-30",
                &["Protocol Design", "Performance Analysis", "Academic Writing"],
                "Research and propose optimizations to Cardano protocol performance",
            ),
            bounty(
                "bounty-advanced-2",
                "Enterprise Integration Framework",
                "8000 ADA",
                "2025-08-15",
                &["Enterprise Architecture", "Blockchain Integration", "System Design"],
                "Develop framework for enterprise Cardano blockchain integration",
            ),
        ],
        begin_wallet_tips: strings(&[
            "Use Begin Wallet for enterprise client demonstrations",
            "Leverage advanced metadata features for complex use cases",
            "Implement Begin Wallet in consulting project deliverables",
            "Contribute to Begin Wallet ecosystem development",
        ]),
    };
    let achievements = vec![
        achievement(
            "achievement-advanced-1",
            "Ecosystem Leader",
            "Led major infrastructure project benefiting entire Cardano ecosystem",
            "2024-11-15",
            "nft_1700678901_pqr678stu",
            "Leadership",
            "Advanced",
            &["Project Management", "Team Leadership", "Infrastructure"],
        ),
        achievement(
            "achievement-advanced-2",
            "Research Pioneer",
            "Published peer-reviewed research advancing blockchain technology",
            "2024-12-20",
            "nft_1703789012_stu901vwx",
            "Research",
            "Advanced",
            &["Academic Research", "Protocol Design", "Publication"],
        ),
        achievement(
            "achievement-advanced-3",
            "Thought Leader",
            "Recognized speaker at major blockchain conferences worldwide",
            "2025-01-10",
            "nft_1704890123_vwx234yzab",
            "Leadership",
            "Advanced",
            &["Public Speaking", "Thought Leadership", "Community Building"],
        ),
        achievement(
            "achievement-advanced-4",
            "Enterprise Consultant",
            "Successfully established blockchain consulting practice with enterprise clients",
            "2025-01-25",
            "nft_1706901234_yzab567cde",
            "Business",
            "Advanced",
            &["Consulting", "Enterprise Solutions", "Business Development"],
        ),
    ];
    let progress_entries = vec![
        progress("milestone-advanced-1", "2024-11-15T12:00:00Z", 100, "tx_1700890123_progress_008"),
        progress("milestone-advanced-2", "2024-12-20T14:30:00Z", 100, "tx_1703901234_progress_009"),
        progress("milestone-advanced-3", "2025-01-10T10:45:00Z", 70, "tx_1705012345_progress_010"),
        progress("milestone-advanced-4", "2025-01-25T16:15:00Z", 55, "tx_1706123456_progress_011"),
    ];

    DemoData {
        fixture,
        profile,
        assessment,
        roadmap,
        achievements,
        progress_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wallets_are_listed_in_tier_order() {
        let wallets = list_known_wallets();
        assert_eq!(wallets, [BEGINNER_WALLET, INTERMEDIATE_WALLET, ADVANCED_WALLET]);

        let tiers: Vec<_> = wallets
            .iter()
            .map(|w| lookup_by_wallet(w).unwrap().profile.experience_level)
            .collect();
        assert_eq!(
            tiers,
            vec![
                ExperienceLevel::Beginner,
                ExperienceLevel::Intermediate,
                ExperienceLevel::Advanced
            ]
        );
    }

    #[test]
    fn unknown_wallet_is_absent() {
        assert!(lookup_by_wallet("addr1_not_a_demo").is_none());
        assert!(lookup_by_wallet("").is_none());
        assert!(!is_demo_wallet("addr1_not_a_demo"));
    }

    #[test]
    fn fixture_lookup_matches_wallet_lookup() {
        for fixture in FixtureId::ALL {
            let data = lookup_by_fixture(fixture);
            assert_eq!(data.fixture, fixture);
            assert_eq!(data.profile.id, fixture.user_id());
            assert_eq!(data.assessment.fixture, Some(fixture));
            let by_wallet = lookup_by_wallet(&data.profile.wallet_address).unwrap();
            assert_eq!(by_wallet.fixture, fixture);
        }
    }

    #[test]
    fn milestone_ids_are_unique_per_roadmap() {
        for fixture in FixtureId::ALL {
            let roadmap = &lookup_by_fixture(fixture).roadmap;
            let ids: HashSet<_> = roadmap.milestones.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids.len(), roadmap.milestones.len());
        }
    }

    #[test]
    fn assessment_agrees_with_profile() {
        for fixture in FixtureId::ALL {
            let data = lookup_by_fixture(fixture);
            assert_eq!(data.assessment.experience_level, data.profile.experience_level);
            assert_eq!(
                data.assessment.preferred_career_path,
                data.profile.preferred_career_path
            );
        }
    }

    #[test]
    fn fixture_sizes() {
        let beginner = lookup_by_fixture(FixtureId::Beginner);
        assert_eq!(beginner.achievements.len(), 2);
        assert_eq!(beginner.progress_entries.len(), 3);
        assert_eq!(beginner.roadmap.completed_count(), 2);

        let intermediate = lookup_by_fixture(FixtureId::Intermediate);
        assert_eq!(intermediate.achievements.len(), 3);
        assert_eq!(intermediate.progress_entries.len(), 4);

        let advanced = lookup_by_fixture(FixtureId::Advanced);
        assert_eq!(advanced.achievements.len(), 4);
        assert_eq!(advanced.roadmap.timeline, Timeline::TwelveMonth);
    }

    #[test]
    fn progress_timestamps_parse() {
        let entry = &lookup_by_fixture(FixtureId::Beginner).progress_entries[0];
        assert_eq!(entry.timestamp.to_rfc3339(), "2025-01-15T10:30:00+00:00");
    }
}
