use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is in form keys and values; everything else is `%XX`.
///
/// Space becomes `%20`, never `+`.
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Encode parameters as an `application/x-www-form-urlencoded` body.
pub fn encode_form(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM_SET),
                utf8_percent_encode(value, FORM_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn space_encodes_as_percent_20() {
        assert_eq!(
            encode_form(&params(&[("a key", "a value")])),
            "a%20key=a%20value"
        );
    }

    #[test]
    fn pairs_are_joined_with_ampersand() {
        assert_eq!(
            encode_form(&params(&[("charset", "UTF-8"), ("gateway", "2")])),
            "charset=UTF-8&gateway=2"
        );
    }

    #[test]
    fn reserved_and_non_ascii_characters_are_escaped() {
        assert_eq!(
            encode_form(&params(&[("recipients", "+31612345678"), ("message", "a&b=ç~")])),
            "message=a%26b%3D%C3%A7%7E&recipients=%2B31612345678"
        );
    }

    #[test]
    fn empty_params_encode_to_empty_body() {
        assert_eq!(encode_form(&BTreeMap::new()), "");
    }
}
