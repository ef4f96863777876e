#![cfg_attr(not(test), no_std)]

//! Web2Wire Core
//!
//! Hardware-independent logic of the Web2Wire job beacon. Everything here
//! runs on the host as well as on the device, the firmware crate only wires
//! it to the radio, the LED and the screen.
//!
//! # Architecture
//!
//! ```text
//! HTTP intake ──> JobContext ──> ActionSequencer ──> Indicator (LED)
//!                     │
//!                     ├──> Frame ──> display::render_job (screen)
//!                     └──> CompletionNotifier (report on completion)
//! ```

pub mod connectivity;
pub mod context;
pub mod credentials;
pub mod display;
pub mod form;
pub mod indicator;
pub mod intake;
pub mod job;
pub mod net;
pub mod notifier;
pub mod report;
pub mod schedule;
pub mod sequencer;
pub mod storage;

pub use context::{Frame, JobContext};
pub use indicator::{Indicator, IndicatorColor};
pub use intake::{IntakeError, IntakeOutcome, PayloadFormat};
pub use job::JobData;
pub use notifier::{CompletionNotifier, NotifyError};
pub use sequencer::{ActionSequencer, SequencerEvent, SequencerState};
