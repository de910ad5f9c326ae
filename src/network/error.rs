use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("node label `{0}` is reserved for the super source/sink")]
    ReservedLabel(String),
    #[error("node label `{0}` already exists")]
    DuplicateLabel(String),
    #[error("node `{0}` cannot be both a source and a sink")]
    RoleOverlap(String),
    #[error("node id {0} is out of range")]
    UnknownNode(usize),
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}
