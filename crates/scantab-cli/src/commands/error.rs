use std::path::PathBuf;

/// Everything a command can fail with; printed as `error: {e}`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid automaton: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] scantab_compiler::Error),
}

impl From<scantab_compiler::EmitError> for Error {
    fn from(e: scantab_compiler::EmitError) -> Self {
        Error::Compile(e.into())
    }
}

/// Print the error and exit with status 1.
pub fn fail(e: Error) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}
