//! Game engine
//!
//! Dictionary, hint aggregation, the round state machine and the key
//! translator that drives it.

pub mod dictionary;
pub mod hints;
pub mod input;
pub mod reset;
pub mod round;
pub mod view;

pub use dictionary::Dictionary;
pub use hints::{KeyStyle, LetterHintMap};
pub use input::{InputController, KeyInput, KeyOutcome};
pub use reset::{DEFAULT_RESET_DELAY, PendingReset, ResetStatus, ResetTimer};
pub use round::{DEFAULT_ATTEMPT_LIMIT, Round, RoundEnd, RoundOutcome, RoundState, Submission};
pub use view::{BoardView, Cell, Row, RowKind};
