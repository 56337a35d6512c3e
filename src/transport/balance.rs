use crate::domain::Balance;

/// Decode a `balance` reply body.
///
/// The endpoint answers with the balance as bare text; the trimmed body is
/// taken verbatim. Rejections for this endpoint surface as transport or HTTP
/// failures, not as body contents.
pub fn decode_balance_reply(body: &str) -> Balance {
    Balance::new(body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_trims_surrounding_whitespace() {
        assert_eq!(decode_balance_reply(" 42.50 \n").as_str(), "42.50");
        assert_eq!(decode_balance_reply("0").as_str(), "0");
    }
}
