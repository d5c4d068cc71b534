// src/exit.rs
//! Standardized process exit codes for `indu`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum IndExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, missing scan root, bad config).
    Error = 1,
    /// Arguments named something that does not exist in the snapshot.
    InvalidInput = 2,
    /// The scan found architecture violations.
    ViolationsFound = 3,
}

impl IndExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for IndExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
