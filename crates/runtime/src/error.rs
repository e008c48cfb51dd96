use thiserror::Error;

/// Errors returned by the resource codec and the template model
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode resource: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode resource: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Resource '{name}' of type {type_name} not found")]
    NotFound {
        name: String,
        type_name: &'static str,
    },

    #[error("Resource '{name}' could not be decoded as {type_name}: {source}")]
    InvalidResource {
        name: String,
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{type_name} does not accept the {attribute} attribute")]
    UnsupportedAttribute {
        type_name: &'static str,
        attribute: &'static str,
    },

    #[error("Unknown intrinsic function '{0}'")]
    UnknownFunction(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CodecError {
    /// Decode error carrying a plain message
    pub(crate) fn decode_message(message: &str) -> Self {
        CodecError::Decode(<serde_json::Error as serde::de::Error>::custom(message))
    }
}

/// Result type for codec and template operations
pub type Result<T> = std::result::Result<T, CodecError>;
