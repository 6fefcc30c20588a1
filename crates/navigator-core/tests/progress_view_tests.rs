//! Progress View Tests
//!
//! Dashboard read models over session records.

use navigator_core::progress::{
    group_achievements_by_category, pending_milestones, recent_progress, DEFAULT_RECENT_LIMIT,
};
use navigator_core::{ProgressSummary, Roadmap, Session, Timeline};
use navigator_test_utils::{
    create_progress_entry_at, create_test_achievement, create_test_milestone, STRANGER_WALLET,
};
use pretty_assertions::assert_eq;

fn roadmap_with(milestones: Vec<navigator_core::Milestone>) -> Roadmap {
    Roadmap {
        timeline: Timeline::SixMonth,
        milestones,
        resources: Vec::new(),
        catalyst_opportunities: Vec::new(),
        bounty_opportunities: Vec::new(),
        begin_wallet_tips: Vec::new(),
    }
}

#[test]
fn test_summary_tracks_toggles() {
    let mut session = Session::new();
    session.connect(STRANGER_WALLET);
    session.set_roadmap(Some(roadmap_with(vec![
        create_test_milestone("a", false),
        create_test_milestone("b", false),
        create_test_milestone("c", false),
        create_test_milestone("d", false),
    ])));

    assert!(session.toggle_milestone("b", true));
    assert!(session.toggle_milestone("d", true));

    let roadmap = session.roadmap().unwrap();
    assert_eq!(
        ProgressSummary::from_roadmap(roadmap),
        ProgressSummary {
            completed: 2,
            total: 4,
            percentage: 50
        }
    );
    let pending: Vec<_> = pending_milestones(roadmap).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(pending, vec!["a", "c"]);
}

#[test]
fn test_finished_roadmap() {
    let roadmap = roadmap_with(vec![create_test_milestone("only", true)]);
    let summary = ProgressSummary::from_roadmap(&roadmap);
    assert!(summary.is_finished());
    assert_eq!(summary.percentage, 100);
}

#[test]
fn test_recent_progress_with_out_of_order_entries() {
    let mut session = Session::new();
    for minutes in [30, 5, 50, 10, 40, 20, 0] {
        session.record_progress(create_progress_entry_at("m", minutes));
    }

    let recent = recent_progress(session.progress_entries(), DEFAULT_RECENT_LIMIT);
    let hashes: Vec<_> = recent.iter().map(|e| e.transaction_hash.as_str()).collect();
    assert_eq!(
        hashes,
        vec!["tx_test_50", "tx_test_40", "tx_test_30", "tx_test_20", "tx_test_10"]
    );
}

#[test]
fn test_achievement_gallery_grouping() {
    let mut session = Session::new();
    session.record_achievement(create_test_achievement("1", "Education"));
    session.record_achievement(create_test_achievement("2", "Development"));
    session.record_achievement(create_test_achievement("3", "Education"));

    let groups = group_achievements_by_category(session.achievements());
    let categories: Vec<_> = groups.keys().copied().collect();
    assert_eq!(categories, vec!["Education", "Development"]);

    let education: Vec<_> = groups["Education"].iter().map(|a| a.id.as_str()).collect();
    assert_eq!(education, vec!["1", "3"]);
}
