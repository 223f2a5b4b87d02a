/// Result of reading a persisted value.
///
/// Reading never fails because of bad stored data. If the key is absent or its
/// content cannot be decoded, the default value is used instead and the
/// variant tells which of both happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Stored(T),
    Missing(T),
    Malformed { value: T, error: String },
}

impl<T> Loaded<T> {
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Loaded::Stored(value) | Loaded::Missing(value) | Loaded::Malformed { value, .. } => {
                value
            }
        }
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Loaded::Stored(value) | Loaded::Missing(value) | Loaded::Malformed { value, .. } => {
                value
            }
        }
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Loaded::Malformed { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        match self {
            Loaded::Stored(value) => Loaded::Stored(f(value)),
            Loaded::Missing(value) => Loaded::Missing(f(value)),
            Loaded::Malformed { value, error } => Loaded::Malformed {
                value: f(value),
                error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_loaded_value() {
        assert_eq!(*Loaded::Stored(1).value(), 1);
        assert_eq!(*Loaded::Missing(2).value(), 2);
        assert_eq!(
            *Loaded::Malformed {
                value: 3,
                error: "eof".to_string()
            }
            .value(),
            3
        );
    }

    #[test]
    fn test_loaded_map() {
        assert_eq!(
            Loaded::Malformed {
                value: 2,
                error: "eof".to_string()
            }
            .map(|v| v * 2),
            Loaded::Malformed {
                value: 4,
                error: "eof".to_string()
            }
        );
        assert_eq!(Loaded::Stored("a").map(str::len).into_inner(), 1);
    }

    #[test]
    fn test_loaded_is_malformed() {
        assert!(!Loaded::Stored(()).is_malformed());
        assert!(!Loaded::Missing(()).is_malformed());
        assert!(
            Loaded::Malformed {
                value: (),
                error: String::new()
            }
            .is_malformed()
        );
    }
}
