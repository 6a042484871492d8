use thiserror::Error;

/// Failures while attaching the effects to the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not a <canvas>")]
    NotACanvas(&'static str),
    #[error("#{0} has no 2d context")]
    NoContext2d(&'static str),
    #[error("failed to add '{event}' listener: {detail}")]
    Listener { event: &'static str, detail: String },
}
