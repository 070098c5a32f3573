use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value::ResultCode;

const SUCCESS_KEY: &str = "success";
const RESULT_CODE_KEY: &str = "resultcode";
const RESULT_MESSAGE_KEY: &str = "resultmessage";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of one delivery attempt.
///
/// Wraps the raw HTTP status, reason phrase and body together with the
/// gateway parameters decoded from the body. On an HTTP failure (status
/// outside `200..=299`) the body is not decoded and the gateway parameters
/// are empty.
pub struct Response {
    status: u16,
    reason: String,
    body: String,
    gateway_params: BTreeMap<String, String>,
}

impl Response {
    pub(crate) fn new(
        status: u16,
        reason: impl Into<String>,
        body: impl Into<String>,
        gateway_params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
            gateway_params,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_http_failure(&self) -> bool {
        !(200..=299).contains(&self.status)
    }

    /// Fields of the `<item>` element of the gateway's reply.
    pub fn gateway_params(&self) -> &BTreeMap<String, String> {
        &self.gateway_params
    }

    /// Gateway result code, or the HTTP status on HTTP failure.
    ///
    /// A missing or non-numeric `resultcode` reads as `0`.
    pub fn result_code(&self) -> ResultCode {
        if self.is_http_failure() {
            return ResultCode::new(i32::from(self.status));
        }
        let code = self
            .gateway_params
            .get(RESULT_CODE_KEY)
            .and_then(|code| code.trim().parse().ok())
            .unwrap_or(0);
        ResultCode::new(code)
    }

    /// Gateway result message, or `[HTTP: <status>] <reason>` on HTTP failure.
    pub fn message(&self) -> String {
        if self.is_http_failure() {
            return format!("[HTTP: {}] {}", self.status, self.reason);
        }
        self.gateway_params
            .get(RESULT_MESSAGE_KEY)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the gateway accepted the message.
    pub fn is_success(&self) -> bool {
        !self.is_http_failure()
            && self.gateway_params.get(SUCCESS_KEY).map(String::as_str) == Some("true")
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.is_success() {
            "succeeded"
        } else {
            "failed"
        };
        write!(f, "{outcome} ({}) `{}'", self.result_code(), self.message())
    }
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
    fn gateway_success() {
        let response = Response::new(
            200,
            "OK",
            "<response/>",
            params(&[
                ("success", "true"),
                ("resultcode", "10"),
                ("resultmessage", "Message successfully sent."),
            ]),
        );
        assert!(response.is_success());
        assert!(!response.is_http_failure());
        assert_eq!(response.result_code(), ResultCode::new(10));
        assert_eq!(response.message(), "Message successfully sent.");
        assert_eq!(
            response.to_string(),
            "succeeded (10) `Message successfully sent.'"
        );
    }

    #[test]
    fn gateway_failure_is_not_http_failure() {
        let response = Response::new(
            200,
            "OK",
            "<response/>",
            params(&[
                ("success", "false"),
                ("resultcode", "20"),
                ("resultmessage", "No username given."),
            ]),
        );
        assert!(!response.is_success());
        assert!(!response.is_http_failure());
        assert_eq!(response.result_code().as_i32(), 20);
        assert_eq!(response.message(), "No username given.");
    }

    #[test]
    fn success_requires_literal_true() {
        for value in ["TRUE", "1", "yes", ""] {
            let response = Response::new(200, "OK", "", params(&[("success", value)]));
            assert!(!response.is_success(), "{value:?} should not be success");
        }
    }

    #[test]
    fn http_failure_uses_status_and_reason() {
        let response = Response::new(400, "Bad request", "", BTreeMap::new());
        assert!(response.is_http_failure());
        assert!(!response.is_success());
        assert!(response.gateway_params().is_empty());
        assert_eq!(response.result_code().as_i32(), 400);
        assert_eq!(response.message(), "[HTTP: 400] Bad request");
        assert_eq!(
            response.to_string(),
            "failed (400) `[HTTP: 400] Bad request'"
        );
    }

    #[test]
    fn missing_result_fields_read_as_zero_and_empty() {
        let response = Response::new(200, "OK", "", params(&[("resultcode", "n/a")]));
        assert_eq!(response.result_code().as_i32(), 0);
        assert_eq!(response.message(), "");
    }
}
