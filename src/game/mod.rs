//! Game state: letter accounting, submission checks, and the session loop

pub mod input;
mod ledger;
pub mod session;
pub mod validator;

pub use input::{InputDiff, PendingInput};
pub use ledger::{Ledger, LedgerError};
pub use session::{
    Notice, NoticeKind, Phase, Presenter, Session, SessionError, Snapshot, SubmitOutcome,
};
pub use validator::Rejection;
