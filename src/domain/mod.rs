pub mod grouper;
pub mod matcher;
pub mod models;
pub mod registry;

pub use grouper::{group_results, GroupedResults};
pub use matcher::{match_commands, DEFAULT_RESULT_LIMIT};
pub use models::{Category, CommandAction, CommandDescriptor, MatchKind, MatchResult, MatchScore};
pub use registry::{Registry, RegistryError};
