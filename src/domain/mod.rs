//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendOptions, SendSms};
pub use response::{Balance, SendReceipt};
pub use validation::ValidationError;
pub use value::{
    ApiErrorKind, ErrorCategory, MessageId, MessageText, Password, PhoneNumber, RawPhoneNumber,
    SenderId, Username,
};
