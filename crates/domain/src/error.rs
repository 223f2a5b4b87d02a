#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
            ReadError::Other(other) => WriteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_from_read_error() {
        assert!(matches!(
            WriteError::from(ReadError::Storage(StorageError::Unavailable(
                "quota".to_string()
            ))),
            WriteError::Storage(StorageError::Unavailable(reason)) if reason == "quota"
        ));
        assert!(matches!(
            WriteError::from(ReadError::Other("foo".into())),
            WriteError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WriteError::Rejected("empty program".to_string()).to_string(),
            "rejected: empty program"
        );
        assert_eq!(
            StorageError::Unavailable("no window".to_string()).to_string(),
            "storage unavailable: no window"
        );
    }
}
