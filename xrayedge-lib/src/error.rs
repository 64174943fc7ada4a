use std::fmt;

#[derive(Debug)]
pub enum XrayDbError {
    UnknownElement(String),
    UnknownEdge { element: String, edge: String },
    DataError(String),
}

pub type Result<T> = std::result::Result<T, XrayDbError>;

impl fmt::Display for XrayDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::UnknownEdge { element, edge } => {
                write!(f, "unknown edge '{edge}' for element '{element}'")
            }
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for XrayDbError {}

impl From<postcard::Error> for XrayDbError {
    fn from(err: postcard::Error) -> Self {
        Self::DataError(format!("failed to deserialize database: {err}"))
    }
}
