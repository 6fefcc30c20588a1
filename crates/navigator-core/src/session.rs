//! Session state container
//!
//! Single source of truth for the connected user and everything derived from
//! them. Owned by the [`Navigator`](crate::navigator::Navigator); tests can
//! build isolated sessions directly. Every operation is total.

use crate::fixtures;
use crate::types::{Achievement, Assessment, FixtureId, ProgressEntry, Roadmap, UserProfile};
use serde::Serialize;

/// The active session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: Option<UserProfile>,
    assessment: Option<Assessment>,
    roadmap: Option<Roadmap>,
    achievements: Vec<Achievement>,
    progress_entries: Vec<ProgressEntry>,
}

impl Session {
    /// Empty, disconnected session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a wallet, replacing the user and all derived records.
    ///
    /// Demo wallets hydrate from the fixture store; any other wallet starts
    /// from a blank profile with nothing derived.
    pub fn connect(&mut self, wallet: impl Into<String>) {
        let wallet = wallet.into();
        let next = match fixtures::lookup_by_wallet(&wallet) {
            Some(demo) => Self {
                user: Some(demo.profile.clone()),
                assessment: Some(demo.assessment.clone()),
                roadmap: Some(demo.roadmap.clone()),
                achievements: demo.achievements.clone(),
                progress_entries: demo.progress_entries.clone(),
            },
            None => Self {
                user: Some(UserProfile::new(wallet.as_str())),
                ..Self::default()
            },
        };
        *self = next;
        tracing::info!(
            wallet = %wallet,
            fixture = ?self.fixture(),
            "Wallet connected"
        );
    }

    /// Clear the user and every derived record. Idempotent.
    pub fn disconnect(&mut self) {
        if self.user.is_some() {
            tracing::info!("Wallet disconnected");
        }
        *self = Self::default();
    }

    /// Replace the assessment wholesale
    pub fn set_assessment(&mut self, assessment: Option<Assessment>) {
        self.assessment = assessment;
    }

    /// Replace the roadmap wholesale
    pub fn set_roadmap(&mut self, roadmap: Option<Roadmap>) {
        self.roadmap = roadmap;
    }

    /// Append an achievement
    pub fn record_achievement(&mut self, achievement: Achievement) {
        self.achievements.push(achievement);
    }

    /// Append a progress entry; the milestone reference is not checked
    pub fn record_progress(&mut self, entry: ProgressEntry) {
        self.progress_entries.push(entry);
    }

    /// Overwrite one milestone's completion flag.
    ///
    /// Returns `false` without changing anything when no roadmap is loaded or
    /// no milestone has that id. Never records progress.
    pub fn toggle_milestone(&mut self, milestone_id: &str, completed: bool) -> bool {
        let Some(roadmap) = self.roadmap.as_mut() else {
            tracing::warn!(milestone_id, "Milestone toggle ignored: no roadmap loaded");
            return false;
        };
        match roadmap.milestones.iter_mut().find(|m| m.id == milestone_id) {
            Some(milestone) => {
                milestone.completed = completed;
                tracing::debug!(milestone_id, completed, "Milestone toggled");
                true
            }
            None => {
                tracing::warn!(milestone_id, "Milestone toggle ignored: unknown milestone");
                false
            }
        }
    }

    /// Apply `f` to the connected user; no-op when disconnected
    pub fn update_user(&mut self, f: impl FnOnce(&mut UserProfile)) {
        if let Some(user) = self.user.as_mut() {
            f(user);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.user.is_some()
    }

    #[inline]
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Connected wallet, if any
    #[inline]
    #[must_use]
    pub fn wallet(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.wallet_address.as_str())
    }

    /// Demo fixture backing the connected wallet, if any
    #[inline]
    #[must_use]
    pub fn fixture(&self) -> Option<FixtureId> {
        self.wallet()
            .and_then(fixtures::lookup_by_wallet)
            .map(|demo| demo.fixture)
    }

    #[inline]
    #[must_use]
    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn roadmap(&self) -> Option<&Roadmap> {
        self.roadmap.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[inline]
    #[must_use]
    pub fn progress_entries(&self) -> &[ProgressEntry] {
        &self.progress_entries
    }
}
