//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod increment;
pub mod init;
pub mod label;

// Re-export types for convenient access
pub use args::{Cli, InitType, Operation};
pub use common::Settings;

/// Run one operation with the resolved settings and return the exit code
pub fn dispatch(operation: &Operation, settings: &Settings) -> i32 {
    tracing::debug!(%operation, file = %settings.file.display(), "dispatching");
    match operation {
        Operation::Init(scheme) => init::run_init(*scheme, settings),
        Operation::Increment(field) => increment::run_increment(*field, settings),
        Operation::SetLabel(label) => label::run_label(label, settings),
    }
}
