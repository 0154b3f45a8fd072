use thiserror::Error;

/// Precondition violations rejected by the slot builder and assigner
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotError {
    #[error("total duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("slot length must be a finite, positive number of seconds, got {0}")]
    InvalidSlotLength(f64),

    #[error("end padding must be a finite, non-negative number of seconds, got {0}")]
    InvalidEndPad(f64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
