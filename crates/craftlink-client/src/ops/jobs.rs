//! Job postings and proposals.

use tracing::info;
use uuid::Uuid;

use craftlink_shared::{Account, Job, JobType, Proposal, ProposalStatus, Role};

use crate::error::{ClientError, Result};
use crate::events::StoreEvent;
use crate::store::Store;

/// Input to [`Store::create_job`].  Id, author and posting age are filled in
/// by the store.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub deadline: Option<String>,
    pub skills: Vec<String>,
    pub budget_min: Option<u64>,
    pub budget_max: Option<u64>,
}

/// Input to [`Store::create_proposal`].  Developer attribution comes from
/// the active session.
#[derive(Debug, Clone)]
pub struct NewProposal {
    pub job_id: Uuid,
    pub message: String,
    pub price: u64,
}

impl Store {
    /// Post a new job, attributed to the active session.
    ///
    /// The board is kept most-recent-first; postings are immutable once
    /// created.
    pub fn create_job(&mut self, new: NewJob) -> Result<Uuid> {
        if let (Some(min), Some(max)) = (new.budget_min, new.budget_max) {
            if min > max {
                return Err(ClientError::InvalidBudget);
            }
        }

        let id = Uuid::new_v4();
        let job = Job {
            id,
            title: new.title,
            company: new.company,
            location: new.location,
            job_type: new.job_type,
            description: new.description,
            posted: "just now".to_string(),
            deadline: new.deadline,
            skills: new.skills,
            budget_min: new.budget_min,
            budget_max: new.budget_max,
            author_id: self.state.session.as_ref().map(Account::id),
        };

        self.state.jobs.insert(0, job);
        self.persist_jobs()?;
        self.emit(StoreEvent::JobsChanged);
        info!(job = %id, "job posted");
        Ok(id)
    }

    /// Submit a bid on a job.  Requires a developer session; the developer
    /// name is snapshotted into the proposal.
    pub fn create_proposal(&mut self, new: NewProposal) -> Result<Uuid> {
        if new.price == 0 {
            return Err(ClientError::NonPositiveAmount);
        }

        let session = self.state.session.as_ref().ok_or(ClientError::NoSession)?;
        let dev = session
            .as_developer()
            .ok_or(ClientError::RoleRequired(Role::Developer))?;

        let id = Uuid::new_v4();
        let proposal = Proposal {
            id,
            job_id: new.job_id,
            developer_id: dev.id,
            developer_name: dev.name.clone(),
            message: new.message,
            price: new.price,
            posted: "just now".to_string(),
            status: ProposalStatus::Pending,
        };

        self.state.proposals.insert(0, proposal);
        self.emit(StoreEvent::ProposalsChanged);
        info!(proposal = %id, job = %new.job_id, "proposal submitted");
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Derived views, recomputed on every access
    // ------------------------------------------------------------------

    /// Jobs posted by the active session, in board order.
    pub fn jobs_authored_by_session(&self) -> Vec<&Job> {
        let Some(ref session) = self.state.session else {
            return Vec::new();
        };
        let author = session.id();
        self.state
            .jobs
            .iter()
            .filter(|job| job.author_id == Some(author))
            .collect()
    }

    /// Proposals addressed to the active session, i.e. bids on its jobs.
    pub fn proposals_for_session(&self) -> Vec<&Proposal> {
        let authored: Vec<Uuid> = self
            .jobs_authored_by_session()
            .iter()
            .map(|job| job.id)
            .collect();
        self.state
            .proposals
            .iter()
            .filter(|p| authored.contains(&p.job_id))
            .collect()
    }
}
