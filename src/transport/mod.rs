//! Transport layer: wire-format details of the EasySendSMS query-string API.

mod balance;
mod send_sms;

pub use balance::decode_balance_reply;
pub use send_sms::{SendSmsReply, decode_send_sms_reply, encode_send_sms_query};
