use std::path::PathBuf;

/// Fatal conditions that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("{} not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no types found in {}", .path.display())]
    NoTypesFound { path: PathBuf },

    #[error("alias {alias} generated for both `{first}` and `{second}`")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },

    #[error("type `{original}` produces an empty alias")]
    EmptyAlias { original: String },

    #[error("failed to write {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GenError {
    /// Process exit status for this error. Anything that is not a `GenError`
    /// (config, CLI) exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::SourceNotFound { .. } | GenError::SourceRead { .. } => 2,
            GenError::NoTypesFound { .. } => 3,
            GenError::OutputWrite { .. } => 4,
            GenError::AliasCollision { .. } | GenError::EmptyAlias { .. } => 5,
        }
    }
}

/// Exit status for a rejected command line. Shared with configuration errors
/// and never used by a `GenError`.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit status for any error surfaced by [`crate::run`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<GenError>())
        .map_or(1, GenError::exit_code)
}
