//! Output formatters (human and JSONL)

pub mod change;
pub mod human;
pub mod jsonl;

pub use change::VersionChange;
pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
