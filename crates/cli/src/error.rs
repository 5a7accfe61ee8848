use powerfuel_chem::{ConstantsError, ReactionError};
use powerfuel_table::ExportError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can stop a run before or while the table is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid reference conditions")]
    Constants(#[from] ConstantsError),

    #[error("failed to evaluate combustion energy")]
    Reaction(#[from] ReactionError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Formats an error followed by each of its sources.
pub fn report(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
