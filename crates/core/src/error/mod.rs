use thiserror::Error;

/// Errors produced by the scanning pipeline.
///
/// Capacity and configuration errors are fatal to a run: once the candidate
/// set cannot be trusted to be complete there is no sound way to continue.
/// `InvalidRange` is recoverable — the orchestrator counts and skips the
/// offending pair, since address generation legitimately produces pairs
/// outside useful bounds.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Address set would exceed its capacity of {limit} entries")]
    CapacityExceeded { limit: usize },

    #[error("Invalid range [{start:#x}, {end:#x}) for image of {size:#x} bytes")]
    InvalidRange { start: u32, end: u32, size: u32 },

    #[error("Checksum algorithm '{0}' is reserved but not implemented")]
    UnimplementedAlgorithm(&'static str),

    #[error("Image of {0} bytes exceeds the 32-bit address space")]
    ImageTooLarge(u64),

    #[error("Invalid scan configuration: {0}")]
    InvalidConfig(String),
}
