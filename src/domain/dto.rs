use serde::Serialize;
use web2wire_core::{IntakeError, IntakeOutcome, SequencerState};

/// Body of every `/api/job/start` response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobResponse {
    pub message: &'static str,
    pub status: &'static str,
}

impl JobResponse {
    pub const ACCEPTED: Self = Self {
        message: "Job accepted, processing started.",
        status: "processing",
    };
    pub const BUSY: Self = Self {
        message: "Device busy, job rejected.",
        status: "busy",
    };
    pub const MALFORMED: Self = Self {
        message: "Malformed job payload.",
        status: "malformed",
    };
    pub const UNAUTHORIZED: Self = Self {
        message: "Missing or invalid token.",
        status: "unauthorized",
    };
    pub const UNAVAILABLE: Self = Self {
        message: "Device is starting, try again.",
        status: "unavailable",
    };
    pub const TOO_LARGE: Self = Self {
        message: "Job payload too large.",
        status: "malformed",
    };

    /// Status code and body for an intake outcome
    pub const fn from_outcome(outcome: IntakeOutcome) -> (u16, Self) {
        match outcome {
            IntakeOutcome::Accepted => (202, Self::ACCEPTED),
            IntakeOutcome::Rejected(IntakeError::Busy) => (429, Self::BUSY),
            IntakeOutcome::Rejected(IntakeError::Malformed) => {
                (400, Self::MALFORMED)
            }
        }
    }
}

/// Body of `/api/status`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobStatus {
    pub state: &'static str,
    pub phase: Option<u8>,
    pub link: bool,
}

impl JobStatus {
    pub fn new(state: SequencerState, link: bool) -> Self {
        let (state, phase) = match state {
            SequencerState::Idle | SequencerState::Completed => ("idle", None),
            SequencerState::Phase { index } => ("running", Some(index as u8)),
        };
        Self { state, phase, link }
    }
}
