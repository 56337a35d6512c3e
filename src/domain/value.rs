use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// EasySendSMS account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query field name used by EasySendSMS (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// EasySendSMS account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Query field name used by EasySendSMS (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Alphanumeric sender id shown to the recipient (`from`).
///
/// Invariants: non-empty after trimming, at most 11 characters, and every
/// character other than a space is alphanumeric. Carriers display this in
/// place of a phone number.
pub struct SenderId(String);

impl SenderId {
    /// Query field name used by EasySendSMS (`from`).
    pub const FIELD: &'static str = "from";

    /// Maximum sender id length imposed by carriers.
    pub const MAX_CHARS: usize = 11;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let actual = trimmed.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::SenderIdTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        if trimmed.chars().any(|c| c != ' ' && !c.is_alphanumeric()) {
            return Err(ValidationError::SenderIdNotAlphanumeric {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by EasySendSMS (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to EasySendSMS (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query field name used by EasySendSMS (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to EasySendSMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query field name used by EasySendSMS (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id issued by EasySendSMS for an accepted submission.
///
/// The value is stored exactly as the provider returned it (`OK:12345`,
/// a bare numeric id, and so on).
pub struct MessageId(String);

impl MessageId {
    /// Wrap a provider-issued message id.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message id as returned by the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known EasySendSMS rejection codes (`ERROR:n` reply prefixes).
///
/// Replies with an unrecognized prefix are preserved as raw text and classify
/// as [`ErrorCategory::UnknownError`].
pub enum ApiErrorKind {
    InvalidCredentials,
    InsufficientCredits,
    InvalidDestination,
    InvalidSenderId,
    MessageTooLong,
}

impl ApiErrorKind {
    /// Classify a rejection reply by its `ERROR:n` prefix.
    ///
    /// Prefixes are tried in numeric order, so `ERROR:12 ...` matches
    /// `ERROR:1` first.
    pub fn from_response(body: &str) -> Option<Self> {
        const TABLE: &[(&str, ApiErrorKind)] = &[
            ("ERROR:1", ApiErrorKind::InvalidCredentials),
            ("ERROR:2", ApiErrorKind::InsufficientCredits),
            ("ERROR:3", ApiErrorKind::InvalidDestination),
            ("ERROR:4", ApiErrorKind::InvalidSenderId),
            ("ERROR:5", ApiErrorKind::MessageTooLong),
        ];
        TABLE
            .iter()
            .find(|(prefix, _)| body.starts_with(prefix))
            .map(|(_, kind)| *kind)
    }

    /// The reporting category for this rejection code.
    pub fn category(self) -> ErrorCategory {
        match self {
            Self::InvalidCredentials => ErrorCategory::InvalidCredentials,
            Self::InsufficientCredits => ErrorCategory::InsufficientCredits,
            Self::InvalidDestination => ErrorCategory::InvalidDestination,
            Self::InvalidSenderId => ErrorCategory::InvalidSenderId,
            Self::MessageTooLong => ErrorCategory::MessageTooLong,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Categorical failure classification reported by the CLI.
///
/// Every failure maps onto exactly one of these; the rendering is the
/// SCREAMING_SNAKE form (`INVALID_CREDENTIALS`, ...).
pub enum ErrorCategory {
    InvalidSenderId,
    InvalidCredentials,
    InsufficientCredits,
    InvalidDestination,
    MessageTooLong,
    UnknownError,
    NetworkError,
}

impl ErrorCategory {
    /// Stable string form of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidSenderId => "INVALID_SENDER_ID",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InsufficientCredits => "INSUFFICIENT_CREDITS",
            Self::InvalidDestination => "INVALID_DESTINATION",
            Self::MessageTooLong => "MESSAGE_TOO_LONG",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new("  user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn sender_id_accepts_alphanumeric_with_spaces() {
        let sender = SenderId::new("YourBrand").unwrap();
        assert_eq!(sender.as_str(), "YourBrand");

        let sender = SenderId::new(" My Brand 1 ").unwrap();
        assert_eq!(sender.as_str(), "My Brand 1");
    }

    #[test]
    fn sender_id_rejects_twelve_characters() {
        let err = SenderId::new("TwelveChars!").unwrap_err();
        assert!(matches!(err, ValidationError::SenderIdTooLong { .. }));

        assert!(SenderId::new("ElevenChars").is_ok());
    }

    #[test]
    fn sender_id_rejects_non_alphanumeric() {
        let err = SenderId::new("My-Brand").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::SenderIdNotAlphanumeric { .. }
        ));

        assert!(SenderId::new("").is_err());
        assert!(SenderId::new("   ").is_err());
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" +447123456789 ").unwrap();
        assert_eq!(raw.raw(), "+447123456789");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+447123456789").unwrap();
        let p2 = PhoneNumber::parse(None, "+44 7123 456 789").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+447123456789");
        assert_eq!(p1.raw(), "+447123456789");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+447123456789");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn api_error_kind_matches_reply_prefixes() {
        assert_eq!(
            ApiErrorKind::from_response("ERROR:1 invalid username"),
            Some(ApiErrorKind::InvalidCredentials)
        );
        assert_eq!(
            ApiErrorKind::from_response("ERROR:2 insufficient"),
            Some(ApiErrorKind::InsufficientCredits)
        );
        assert_eq!(
            ApiErrorKind::from_response("ERROR:5"),
            Some(ApiErrorKind::MessageTooLong)
        );
        assert_eq!(ApiErrorKind::from_response("ERROR:9 unknown"), None);
        assert_eq!(ApiErrorKind::from_response("garbage"), None);
    }

    #[test]
    fn api_error_kind_prefix_match_prefers_lowest_code() {
        // Dict-ordered prefix matching: ERROR:12 hits the ERROR:1 entry.
        assert_eq!(
            ApiErrorKind::from_response("ERROR:12 something"),
            Some(ApiErrorKind::InvalidCredentials)
        );
    }

    #[test]
    fn error_category_renders_screaming_snake() {
        assert_eq!(
            ErrorCategory::InvalidSenderId.to_string(),
            "INVALID_SENDER_ID"
        );
        assert_eq!(ErrorCategory::NetworkError.to_string(), "NETWORK_ERROR");
        assert_eq!(
            ApiErrorKind::InsufficientCredits.category(),
            ErrorCategory::InsufficientCredits
        );
    }
}
