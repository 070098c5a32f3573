use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::Response;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::de::DeError),
}

/// `<response><item>...</item></response>`; attributes and other children are ignored.
#[derive(Debug, Deserialize)]
struct XmlResponse {
    item: BTreeMap<String, String>,
}

/// Build a [`Response`] from a raw HTTP reply.
///
/// The body is only decoded for 2xx statuses; HTTP failures keep empty
/// gateway parameters.
pub fn decode_response(
    status: u16,
    reason: &str,
    body: String,
) -> Result<Response, TransportError> {
    let gateway_params = if (200..=299).contains(&status) {
        decode_item(&body)?
    } else {
        BTreeMap::new()
    };
    Ok(Response::new(status, reason, body, gateway_params))
}

fn decode_item(xml: &str) -> Result<BTreeMap<String, String>, TransportError> {
    let parsed: XmlResponse = quick_xml::de::from_str(xml)?;
    Ok(parsed
        .item
        .into_iter()
        .filter(|(key, _)| !key.starts_with('@'))
        .map(|(key, value)| (key, value.trim().to_owned()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"<?xml version="1.0" ?>
<response>
    <item type="sms">
        <recipients>1</recipients>
        <success>true</success>
        <resultcode>10</resultcode>
        <resultmessage>Message successfully sent.</resultmessage>
    </item>
</response>"#;

    const FAILURE_BODY: &str = r#"<?xml version="1.0" ?>
<response>
    <item type="sms">
        <recipients>0</recipients>
        <success>false</success>
        <resultcode>20</resultcode>
        <resultmessage>No username given.</resultmessage>
    </item>
</response>"#;

    #[test]
    fn decodes_item_fields_into_flat_map() {
        let response = decode_response(200, "OK", SUCCESS_BODY.to_owned()).unwrap();
        let params = response.gateway_params();
        assert_eq!(params.get("recipients").map(String::as_str), Some("1"));
        assert_eq!(params.get("success").map(String::as_str), Some("true"));
        assert_eq!(params.get("resultcode").map(String::as_str), Some("10"));
        assert!(!params.keys().any(|key| key.starts_with('@')));

        assert!(response.is_success());
        assert_eq!(response.result_code().as_i32(), 10);
        assert_eq!(response.message(), "Message successfully sent.");
        assert_eq!(response.body(), SUCCESS_BODY);
    }

    #[test]
    fn decodes_gateway_level_failure() {
        let response = decode_response(200, "OK", FAILURE_BODY.to_owned()).unwrap();
        assert!(!response.is_success());
        assert!(!response.is_http_failure());
        assert_eq!(response.result_code().as_i32(), 20);
        assert_eq!(response.message(), "No username given.");
    }

    #[test]
    fn http_failure_body_is_not_parsed() {
        let response = decode_response(400, "Bad request", "not xml at all".to_owned()).unwrap();
        assert!(response.is_http_failure());
        assert!(response.gateway_params().is_empty());
        assert_eq!(response.result_code().as_i32(), 400);
        assert_eq!(response.message(), "[HTTP: 400] Bad request");
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        let err = decode_response(200, "OK", "<response>".to_owned()).unwrap_err();
        assert!(matches!(err, TransportError::Xml(_)));

        let err = decode_response(200, "OK", "<response></response>".to_owned()).unwrap_err();
        assert!(matches!(err, TransportError::Xml(_)));
    }
}
