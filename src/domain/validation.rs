use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    SenderIdTooLong { max: usize, actual: usize },
    SenderIdNotAlphanumeric { input: String },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::SenderIdTooLong { max, actual } => {
                write!(f, "sender id too long: {actual} characters (max {max})")
            }
            Self::SenderIdNotAlphanumeric { input } => {
                write!(f, "sender id must be alphanumeric: {input}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "to" };
        assert_eq!(err.to_string(), "to must not be empty");

        let err = ValidationError::SenderIdTooLong { max: 11, actual: 12 };
        assert_eq!(err.to_string(), "sender id too long: 12 characters (max 11)");

        let err = ValidationError::SenderIdNotAlphanumeric {
            input: "My-Brand".to_owned(),
        };
        assert_eq!(err.to_string(), "sender id must be alphanumeric: My-Brand");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
