//! Guided Flow Tests
//!
//! End-to-end runs of the paid flows against the simulated backend.

use navigator_core::fixtures::{self, list_known_wallets};
use navigator_core::prelude::*;
use navigator_core::{ExperienceLevel, FixtureId, ProgressSummary};
use navigator_test_utils::{
    connected_navigator, instant_config, unlock_all_services, STRANGER_WALLET,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_beginner_end_to_end_hydration() {
    let navigator = connected_navigator(fixtures::BEGINNER_WALLET).await;
    let session = navigator.session();

    assert_eq!(session.user().unwrap().experience_level, ExperienceLevel::Beginner);
    assert_eq!(session.achievements().len(), 2);
    assert_eq!(session.progress_entries().len(), 3);

    let roadmap = session.roadmap().unwrap();
    assert_eq!(roadmap.milestones.len(), 5);
    assert_eq!(roadmap.timeline, Timeline::SixMonth);
    assert_eq!(roadmap.completed_count(), 2);
}

#[tokio::test]
async fn test_fixture_tiers() {
    let expected = [
        (ExperienceLevel::Beginner, 2, 3, Timeline::SixMonth),
        (ExperienceLevel::Intermediate, 3, 4, Timeline::SixMonth),
        (ExperienceLevel::Advanced, 4, 4, Timeline::TwelveMonth),
    ];

    for (wallet, (level, achievements, entries, timeline)) in
        list_known_wallets().into_iter().zip(expected)
    {
        let navigator = connected_navigator(wallet).await;
        let session = navigator.session();
        assert_eq!(session.user().unwrap().experience_level, level);
        assert_eq!(session.achievements().len(), achievements);
        assert_eq!(session.progress_entries().len(), entries);
        assert_eq!(session.roadmap().unwrap().timeline, timeline);
    }
}

#[tokio::test]
async fn test_fixture_wallet_full_flow_keeps_fixture_identity() {
    let mut navigator = connected_navigator(fixtures::INTERMEDIATE_WALLET).await;
    unlock_all_services(&mut navigator).await;

    let assessment = navigator.run_assessment().await.unwrap();
    assert_eq!(assessment.fixture, Some(FixtureId::Intermediate));

    let roadmap = navigator.generate_roadmap(Timeline::ThreeMonth).await.unwrap();
    let fixture = &fixtures::lookup_by_fixture(FixtureId::Intermediate).roadmap;
    assert_eq!(roadmap.timeline, Timeline::ThreeMonth);
    assert_eq!(roadmap.milestones, fixture.milestones);
    assert_eq!(roadmap.bounty_opportunities, fixture.bounty_opportunities);

    let user = navigator.session().user().unwrap();
    assert!(user.assessment_complete);
    assert!(user.roadmap_generated);
    assert!(user.catalyst_guidance_received);
}

#[tokio::test]
async fn test_stranger_wallet_full_flow() {
    let mut navigator = connected_navigator(STRANGER_WALLET).await;
    assert!(navigator.session().roadmap().is_none());

    navigator.pay(ServiceId::SkillsAssessment).await.unwrap();
    let assessment = navigator.run_assessment().await.unwrap();
    assert!(assessment.fixture.is_none());
    assert_eq!(
        assessment.experience_level,
        ExperienceLevel::from_activity(assessment.transaction_count, assessment.complexity_score)
    );
    navigator.finish_flow(FlowKind::Assessment).unwrap();

    navigator.pay(ServiceId::RoadmapGeneration).await.unwrap();
    let roadmap = navigator.generate_roadmap(Timeline::TwelveMonth).await.unwrap();
    assert_eq!(roadmap.milestones.len(), 3);
    assert_eq!(navigator.flow_state(FlowKind::Roadmap), &FlowState::Complete);
    assert_eq!(
        navigator.progress_summary(),
        ProgressSummary {
            completed: 0,
            total: 3,
            percentage: 0
        }
    );

    let entry = navigator
        .complete_milestone("milestone-1", true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.milestone_id, "milestone-1");
    assert_eq!(navigator.session().progress_entries().len(), 1);
    assert_eq!(navigator.progress_summary().percentage, 33);
}

#[tokio::test]
async fn test_rerunning_assessment_after_completion() {
    let mut navigator = connected_navigator(STRANGER_WALLET).await;
    navigator.pay(ServiceId::SkillsAssessment).await.unwrap();

    navigator.run_assessment().await.unwrap();
    navigator.run_assessment().await.unwrap();
    assert_eq!(navigator.flow_state(FlowKind::Assessment), &FlowState::Complete);
}

#[tokio::test]
async fn test_reconnect_locks_services_again() {
    let mut navigator = connected_navigator(fixtures::ADVANCED_WALLET).await;
    unlock_all_services(&mut navigator).await;

    navigator.connect(STRANGER_WALLET).await.unwrap();
    assert!(!navigator.is_unlocked(ServiceId::SkillsAssessment));
    assert!(matches!(
        navigator.run_assessment().await,
        Err(NavigatorError::ServiceLocked(ServiceId::SkillsAssessment))
    ));
}

#[tokio::test]
async fn test_payments_for_demo_wallets_ignore_success_rate() {
    let config = instant_config().with_payment_success_rate(0.0);
    let mut navigator = Navigator::new(config).unwrap();
    navigator.connect(fixtures::BEGINNER_WALLET).await.unwrap();

    for _ in 0..100 {
        navigator.pay(ServiceId::CatalystGuidance).await.unwrap();
    }
    assert_eq!(navigator.payment_status(), &PaymentStatus::Success);
}

#[tokio::test]
async fn test_marketplace_registration() {
    let navigator = Navigator::new(instant_config()).unwrap();
    assert!(navigator.register().await);
    assert_eq!(navigator.catalog().services().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_independent_sessions_run_concurrently() {
    let config = NavigatorConfig::default().with_seed(9);
    let start = tokio::time::Instant::now();

    let runs = list_known_wallets().into_iter().map(|wallet| {
        let config = config.clone();
        async move {
            let mut navigator = Navigator::new(config).unwrap();
            navigator.connect(wallet).await.unwrap();
            navigator.pay(ServiceId::SkillsAssessment).await.unwrap();
            navigator.run_assessment().await.unwrap()
        }
    });
    let assessments = futures::future::join_all(runs).await;

    let fixtures: Vec<_> = assessments.iter().map(|a| a.fixture).collect();
    assert_eq!(
        fixtures,
        vec![
            Some(FixtureId::Beginner),
            Some(FixtureId::Intermediate),
            Some(FixtureId::Advanced)
        ]
    );
    // connect + payment + analysis, overlapped across sessions
    assert!(start.elapsed() < std::time::Duration::from_millis(3 * 5000));
}
