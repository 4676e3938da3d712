use thiserror::Error;

/// Failure while translating a schema graph. No partial document is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Field '{owner}.{field}' uses scalar '{kind}', which has no protobuf mapping")]
    UnsupportedScalarKind {
        owner: String,
        field: String,
        kind: String,
    },

    #[error("Field '{owner}.{field}' references unsupported type: {variant}")]
    UnsupportedTypeVariant {
        owner: String,
        field: String,
        variant: String,
    },

    #[error("Invalid schema graph: {0}")]
    InvalidSchemaGraph(String),
}

pub type Result<T> = std::result::Result<T, TranslateError>;
