use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaseError {
    #[error("Unknown {kind}: '{input}'")]
    UnknownCase { kind: &'static str, input: String },
}
