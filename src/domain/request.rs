use std::collections::HashSet;

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SendOptions {
    /// Deliver as a flash SMS (shown on screen without landing in the inbox).
    pub flash: bool,
}

#[derive(Debug, Clone)]
/// A single `bulksms` submission: one sender, one text, any number of recipients.
pub struct SendSms {
    sender: SenderId,
    recipients: Vec<RawPhoneNumber>,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    /// Build a send request.
    ///
    /// Recipients are deduplicated, keeping the first occurrence of each
    /// number; the whole batch goes out in a single request.
    pub fn new(
        sender: SenderId,
        recipients: Vec<RawPhoneNumber>,
        text: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let mut seen = HashSet::new();
        let recipients = recipients
            .into_iter()
            .filter(|number| seen.insert(number.clone()))
            .collect::<Vec<_>>();

        Ok(Self {
            sender,
            recipients,
            text,
            options,
        })
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
