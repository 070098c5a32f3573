use std::collections::BTreeMap;
use std::fmt;

use crate::domain::message::{
    BODY_PARAM, CHARSET_PARAM, GATEWAY_PARAM, ORIGINATOR_PARAM, PASSWORD_PARAM, RECIPIENTS_PARAM,
    TYPE_PARAM, USERNAME_PARAM,
};

/// Parameters the gateway rejects a request without, in the order they are checked.
pub const REQUIRED_PARAMS: [&str; 8] = [
    USERNAME_PARAM,
    PASSWORD_PARAM,
    ORIGINATOR_PARAM,
    GATEWAY_PARAM,
    CHARSET_PARAM,
    TYPE_PARAM,
    RECIPIENTS_PARAM,
    BODY_PARAM,
];

/// Longest all-digit originator the gateway accepts.
pub const MAX_NUMERIC_ORIGINATOR: usize = 14;
/// Longest originator containing at least one non-digit.
pub const MAX_ALPHANUMERIC_ORIGINATOR: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginatorKind {
    Numeric,
    Alphanumeric,
}

impl OriginatorKind {
    fn of(originator: &str) -> Self {
        if originator.chars().all(|c| c.is_ascii_digit()) {
            Self::Numeric
        } else {
            Self::Alphanumeric
        }
    }

    pub fn max_len(self) -> usize {
        match self {
            Self::Numeric => MAX_NUMERIC_ORIGINATOR,
            Self::Alphanumeric => MAX_ALPHANUMERIC_ORIGINATOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequiredParam { param: &'static str },
    OriginatorTooLong { kind: OriginatorKind, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredParam { param } => {
                write!(f, "The required parameter `{param}` is missing.")
            }
            Self::OriginatorTooLong {
                kind: OriginatorKind::Numeric,
                max,
            } => write!(f, "Originator may have a maximum of {max} numerical characters."),
            Self::OriginatorTooLong {
                kind: OriginatorKind::Alphanumeric,
                max,
            } => write!(
                f,
                "Originator may have a maximum of {max} alphanumerical characters."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a parameter map before it is submitted to the gateway.
///
/// Every entry of [`REQUIRED_PARAMS`] must be present and non-blank, and the
/// originator must fit the length limit for its kind.
pub fn validate_params(params: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    for param in REQUIRED_PARAMS {
        let blank = params
            .get(param)
            .is_none_or(|value| value.trim().is_empty());
        if blank {
            return Err(ValidationError::MissingRequiredParam { param });
        }
    }

    let originator = params
        .get(ORIGINATOR_PARAM)
        .map(String::as_str)
        .unwrap_or_default();
    let kind = OriginatorKind::of(originator);
    let max = kind.max_len();
    if originator.chars().count() > max {
        return Err(ValidationError::OriginatorTooLong { kind, max });
    }

    Ok(())
}
