//! Navigator controller
//!
//! Owns the session, the remote backend, the service catalog and the state
//! of each guided flow. Every guided operation goes through here:
//!
//! ```text
//! connect -> select_service -> pay -> run_assessment
//!                              pay -> generate_roadmap -> complete_milestone
//! ```
//!
//! Mutating operations take `&mut self`, so a flow can never observe a
//! half-applied session. An `Analyzing` flow or `Processing` payment found
//! on entry therefore belongs to a call whose future was dropped, and is
//! abandoned before the next attempt.

use crate::config::{simulate_latency, NavigatorConfig};
use crate::error::{NavigatorError, Result};
use crate::flow::{validate_payment_transition, FlowKind, FlowState, GuidedFlow, PaymentStatus};
use crate::progress::{self, ProgressSummary};
use crate::remote::{MockRemote, RemoteOperations};
use crate::services::{Service, ServiceCatalog, ServiceId};
use crate::session::Session;
use crate::types::{Assessment, ProgressEntry, Roadmap, Timeline};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Message shown when a payment is declined or cannot be processed
pub const PAYMENT_FAILED_MESSAGE: &str = "Payment failed. Please try again.";

/// Top-level application controller
pub struct Navigator {
    config: NavigatorConfig,
    session: Session,
    remote: Arc<dyn RemoteOperations>,
    catalog: ServiceCatalog,
    assessment_flow: GuidedFlow,
    roadmap_flow: GuidedFlow,
    payment_status: PaymentStatus,
    selected_service: Option<ServiceId>,
    unlocked: HashSet<ServiceId>,
}

impl Navigator {
    /// Create a navigator backed by [`MockRemote`]
    pub fn new(config: NavigatorConfig) -> Result<Self> {
        config.validate()?;
        let remote = Arc::new(MockRemote::new(config.clone()));
        Ok(Self::with_remote(config, remote))
    }

    /// Create a navigator with a custom backend
    #[must_use]
    pub fn with_remote(config: NavigatorConfig, remote: Arc<dyn RemoteOperations>) -> Self {
        let catalog = ServiceCatalog::new(config.latency);
        Self {
            config,
            session: Session::new(),
            remote,
            catalog,
            assessment_flow: GuidedFlow::new(FlowKind::Assessment),
            roadmap_flow: GuidedFlow::new(FlowKind::Roadmap),
            payment_status: PaymentStatus::Idle,
            selected_service: None,
            unlocked: HashSet::new(),
        }
    }

    /// Register with the service marketplace
    pub async fn register(&self) -> bool {
        self.catalog.register().await
    }

    /// Connect a wallet and hydrate the session
    pub async fn connect(&mut self, wallet: &str) -> Result<()> {
        let wallet = wallet.trim();
        if wallet.is_empty() {
            return Err(NavigatorError::EmptyWallet);
        }

        simulate_latency(self.config.latency.connect_ms).await;
        self.reset_purchases();
        self.session.connect(wallet);
        Ok(())
    }

    /// Drop the session and everything purchased in it
    pub fn disconnect(&mut self) {
        self.session.disconnect();
        self.reset_purchases();
    }

    /// Open the payment prompt for a service
    pub fn select_service(&mut self, id: &str) -> Result<&'static Service> {
        self.connected_wallet()?;
        let service = self
            .catalog
            .get_by_str(id)
            .ok_or_else(|| NavigatorError::UnknownService(id.to_string()))?;

        self.selected_service = Some(service.id);
        self.payment_status = PaymentStatus::Idle;
        tracing::debug!(service = %service.id, price = %service.display_price(), "Service selected");
        Ok(service)
    }

    /// Pay for a service; success unlocks it for this session
    pub async fn pay(&mut self, id: ServiceId) -> Result<()> {
        let wallet = self.connected_wallet()?;
        let service = self.catalog.get(id);

        match self.payment_status {
            PaymentStatus::Idle => {}
            PaymentStatus::Processing => {
                tracing::warn!(service = %id, "Abandoning interrupted payment");
                self.set_payment_status(PaymentStatus::Idle)?;
            }
            PaymentStatus::Success | PaymentStatus::Error(_) => {
                self.set_payment_status(PaymentStatus::Idle)?;
            }
        }
        self.set_payment_status(PaymentStatus::Processing)?;
        self.selected_service = Some(id);

        let approved = match self.remote.process_payment(service.price, &wallet, id).await {
            Ok(approved) => approved,
            Err(e) => {
                tracing::error!(service = %id, error = %e, "Payment processing failed");
                false
            }
        };

        if !approved {
            tracing::warn!(service = %id, "Payment declined");
            self.set_payment_status(PaymentStatus::Error(PAYMENT_FAILED_MESSAGE.to_string()))?;
            return Err(NavigatorError::PaymentFailed {
                service: id,
                reason: PAYMENT_FAILED_MESSAGE.to_string(),
            });
        }

        self.set_payment_status(PaymentStatus::Success)?;
        self.unlocked.insert(id);
        if id == ServiceId::CatalystGuidance {
            self.session.update_user(|u| u.catalyst_guidance_received = true);
        }
        tracing::info!(service = %id, price = %service.display_price(), "Service unlocked");
        Ok(())
    }

    /// Clear a failed or interrupted payment so it can be attempted again
    pub fn retry_payment(&mut self) -> Result<()> {
        self.set_payment_status(PaymentStatus::Idle)
    }

    /// Analyze the connected wallet
    pub async fn run_assessment(&mut self) -> Result<Assessment> {
        let wallet = self.connected_wallet()?;
        self.require_unlocked(ServiceId::SkillsAssessment)?;
        self.assessment_flow.abandon_stale();
        self.assessment_flow.start()?;

        match self.remote.analyze_wallet(&wallet).await {
            Ok(assessment) => {
                self.session.set_assessment(Some(assessment.clone()));
                self.session.update_user(|u| u.apply_assessment(&assessment));
                self.assessment_flow.transition(FlowState::Complete)?;
                tracing::info!(
                    level = %assessment.experience_level,
                    career_path = %assessment.preferred_career_path,
                    "Assessment complete"
                );
                Ok(assessment)
            }
            Err(e) => {
                tracing::error!(error = %e, "Wallet analysis failed");
                self.assessment_flow
                    .transition(FlowState::Failed(e.to_string()))?;
                Err(e.into())
            }
        }
    }

    /// Build a roadmap from the current assessment
    pub async fn generate_roadmap(&mut self, timeline: Timeline) -> Result<Roadmap> {
        self.connected_wallet()?;
        let assessment = self
            .session
            .assessment()
            .cloned()
            .ok_or(NavigatorError::AssessmentRequired)?;
        self.require_unlocked(ServiceId::RoadmapGeneration)?;
        self.roadmap_flow.abandon_stale();
        self.roadmap_flow.start()?;

        match self.remote.generate_roadmap(&assessment, timeline).await {
            Ok(roadmap) => {
                self.session.set_roadmap(Some(roadmap.clone()));
                self.session.update_user(|u| u.roadmap_generated = true);
                self.roadmap_flow.transition(FlowState::Complete)?;
                tracing::info!(
                    %timeline,
                    milestones = roadmap.milestones.len(),
                    "Roadmap generated"
                );
                Ok(roadmap)
            }
            Err(e) => {
                tracing::error!(error = %e, "Roadmap generation failed");
                self.roadmap_flow.transition(FlowState::Failed(e.to_string()))?;
                Err(e.into())
            }
        }
    }

    /// Set a milestone's completion flag.
    ///
    /// Completing a known milestone also records 100% progress. If recording
    /// fails the flag stays set and the error is returned.
    pub async fn complete_milestone(
        &mut self,
        milestone_id: &str,
        completed: bool,
    ) -> Result<Option<ProgressEntry>> {
        let wallet = self.connected_wallet()?;
        if !self.session.toggle_milestone(milestone_id, completed) || !completed {
            return Ok(None);
        }

        let tx = self
            .remote
            .record_progress(milestone_id, 100, &wallet)
            .await
            .map_err(|e| {
                tracing::error!(milestone_id, error = %e, "Recording progress failed");
                e
            })?;

        let entry = ProgressEntry::now(milestone_id, 100, tx);
        self.session.record_progress(entry.clone());
        tracing::info!(milestone_id, tx = %entry.transaction_hash, "Milestone completed");
        Ok(Some(entry))
    }

    /// Leave a finished, failed or interrupted flow
    pub fn finish_flow(&mut self, kind: FlowKind) -> Result<()> {
        let flow = self.flow_mut(kind);
        if *flow.state() == FlowState::Idle {
            return Ok(());
        }
        flow.transition(FlowState::Idle)?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Current state of a guided flow
    #[must_use]
    pub fn flow_state(&self, kind: FlowKind) -> &FlowState {
        match kind {
            FlowKind::Assessment => self.assessment_flow.state(),
            FlowKind::Roadmap => self.roadmap_flow.state(),
        }
    }

    #[inline]
    #[must_use]
    pub fn payment_status(&self) -> &PaymentStatus {
        &self.payment_status
    }

    #[inline]
    #[must_use]
    pub fn selected_service(&self) -> Option<ServiceId> {
        self.selected_service
    }

    #[inline]
    #[must_use]
    pub fn is_unlocked(&self, id: ServiceId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Milestone completion of the loaded roadmap
    #[must_use]
    pub fn progress_summary(&self) -> ProgressSummary {
        self.session
            .roadmap()
            .map(ProgressSummary::from_roadmap)
            .unwrap_or_default()
    }

    /// Explorer link using the configured base URL
    #[must_use]
    pub fn explorer_url(&self, reference: &str) -> String {
        progress::explorer_url(&self.config.explorer_base_url, reference)
    }

    fn connected_wallet(&self) -> Result<String> {
        self.session
            .wallet()
            .map(str::to_string)
            .ok_or(NavigatorError::NotConnected)
    }

    fn require_unlocked(&self, id: ServiceId) -> Result<()> {
        if self.is_unlocked(id) {
            Ok(())
        } else {
            Err(NavigatorError::ServiceLocked(id))
        }
    }

    fn set_payment_status(&mut self, to: PaymentStatus) -> Result<()> {
        validate_payment_transition(&self.payment_status, &to)?;
        tracing::debug!(from = ?self.payment_status, to = ?to, "Payment transition");
        self.payment_status = to;
        Ok(())
    }

    fn flow_mut(&mut self, kind: FlowKind) -> &mut GuidedFlow {
        match kind {
            FlowKind::Assessment => &mut self.assessment_flow,
            FlowKind::Roadmap => &mut self.roadmap_flow,
        }
    }

    fn reset_purchases(&mut self) {
        self.assessment_flow.reset();
        self.roadmap_flow.reset();
        self.payment_status = PaymentStatus::Idle;
        self.selected_service = None;
        self.unlocked.clear();
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("wallet", &self.session.wallet())
            .field("assessment_flow", self.assessment_flow.state())
            .field("roadmap_flow", self.roadmap_flow.state())
            .field("payment_status", &self.payment_status)
            .field("unlocked", &self.unlocked)
            .finish_non_exhaustive()
    }
}
