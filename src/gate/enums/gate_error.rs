use thiserror::Error;

/// Why an announce was refused. The display strings are stable and are what
/// the tracker puts into its failure reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateError {
    #[error("unapproved user")]
    UnapprovedUser,

    #[error("unapproved torrent")]
    UnapprovedTorrent,

    #[error("unapproved client")]
    UnapprovedClient,
}
