use crate::domain::{
    ApiErrorKind, MessageId, MessageText, RawPhoneNumber, SendSms, SenderId,
};

/// Plain-text message type expected by `bulksms` (`type=0`).
const TYPE_PLAIN: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Classified `bulksms` reply.
///
/// The endpoint answers with a bare text body: `OK...` or an all-digit
/// message id on success, `ERROR:n ...` otherwise.
pub enum SendSmsReply {
    Accepted {
        message_id: MessageId,
    },
    Rejected {
        kind: Option<ApiErrorKind>,
        text: String,
    },
}

/// Encode the request-specific query parameters for `bulksms`.
///
/// Credentials are prepended by the client layer. Recipients are joined with
/// commas into a single `to` value.
pub fn encode_send_sms_query(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((
        SenderId::FIELD.to_owned(),
        request.sender().as_str().to_owned(),
    ));

    let to = request
        .recipients()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");
    params.push((RawPhoneNumber::FIELD.to_owned(), to));

    params.push((
        MessageText::FIELD.to_owned(),
        request.text().as_str().to_owned(),
    ));
    params.push(("type".to_owned(), TYPE_PLAIN.to_owned()));

    if request.options().flash {
        params.push(("flash".to_owned(), "1".to_owned()));
    }

    params
}

/// Classify a `bulksms` reply body.
///
/// A trimmed body starting with `OK`, or consisting only of ASCII digits, is
/// an accepted submission and doubles as the message id. Everything else is a
/// rejection, classified by its `ERROR:n` prefix where one matches.
pub fn decode_send_sms_reply(body: &str) -> SendSmsReply {
    let trimmed = body.trim();

    let all_digits = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit());
    if trimmed.starts_with("OK") || all_digits {
        return SendSmsReply::Accepted {
            message_id: MessageId::new(trimmed),
        };
    }

    SendSmsReply::Rejected {
        kind: ApiErrorKind::from_response(trimmed),
        text: trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{MessageText, SendOptions, SendSms, SenderId};

    use super::*;

    fn request(flash: bool) -> SendSms {
        SendSms::new(
            SenderId::new("YourBrand").unwrap(),
            vec![
                RawPhoneNumber::new("+447123456789").unwrap(),
                RawPhoneNumber::new("+447987654321").unwrap(),
            ],
            MessageText::new("Hello!").unwrap(),
            SendOptions { flash },
        )
        .unwrap()
    }

    #[test]
    fn encode_joins_recipients_and_sets_plain_type() {
        let params = encode_send_sms_query(&request(false));

        assert_eq!(
            params,
            vec![
                ("from".to_owned(), "YourBrand".to_owned()),
                (
                    "to".to_owned(),
                    "+447123456789,+447987654321".to_owned()
                ),
                ("text".to_owned(), "Hello!".to_owned()),
                ("type".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_adds_flash_only_when_set() {
        let params = encode_send_sms_query(&request(true));
        assert!(params.contains(&("flash".to_owned(), "1".to_owned())));

        let params = encode_send_sms_query(&request(false));
        assert!(!params.iter().any(|(k, _)| k == "flash"));
    }

    #[test]
    fn decode_accepts_ok_prefixed_body() {
        let reply = decode_send_sms_reply("OK:12345\n");
        assert_eq!(
            reply,
            SendSmsReply::Accepted {
                message_id: MessageId::new("OK:12345"),
            }
        );
    }

    #[test]
    fn decode_accepts_all_digit_body() {
        let reply = decode_send_sms_reply("99999999");
        assert_eq!(
            reply,
            SendSmsReply::Accepted {
                message_id: MessageId::new("99999999"),
            }
        );
    }

    #[test]
    fn decode_classifies_known_error_prefixes() {
        let reply = decode_send_sms_reply("ERROR:2 insufficient");
        assert_eq!(
            reply,
            SendSmsReply::Rejected {
                kind: Some(ApiErrorKind::InsufficientCredits),
                text: "ERROR:2 insufficient".to_owned(),
            }
        );
    }

    #[test]
    fn decode_keeps_unrecognized_bodies_as_unclassified_rejections() {
        let reply = decode_send_sms_reply("ERROR:9 new code");
        assert_eq!(
            reply,
            SendSmsReply::Rejected {
                kind: None,
                text: "ERROR:9 new code".to_owned(),
            }
        );

        let reply = decode_send_sms_reply("");
        assert_eq!(
            reply,
            SendSmsReply::Rejected {
                kind: None,
                text: String::new(),
            }
        );

        // Mixed digits and letters are not a message id.
        let reply = decode_send_sms_reply("12345x");
        assert!(matches!(reply, SendSmsReply::Rejected { kind: None, .. }));
    }
}
