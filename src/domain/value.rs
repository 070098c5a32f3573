use std::fmt;
use std::str::FromStr;

use md5::{Digest, Md5};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Mollie delivery route (`gateway`).
///
/// Each route is submitted as its numeric wire code.
pub enum Gateway {
    #[default]
    Basic,
    Business,
    BusinessPlus,
    Landline,
}

impl Gateway {
    pub const ALL: [Gateway; 4] = [
        Self::Basic,
        Self::Business,
        Self::BusinessPlus,
        Self::Landline,
    ];

    /// Wire code sent in the `gateway` form field.
    pub fn code(self) -> &'static str {
        match self {
            Self::Basic => "2",
            Self::Business => "4",
            Self::BusinessPlus => "1",
            Self::Landline => "8",
        }
    }

    /// Name used by Mollie's documentation (`basic`, `business+`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Business => "business",
            Self::BusinessPlus => "business+",
            Self::Landline => "landline",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gateway: {input}")]
pub struct UnknownGateway {
    pub input: String,
}

impl FromStr for Gateway {
    type Err = UnknownGateway;

    /// Accepts either the route name or its wire code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|gateway| gateway.name() == trimmed || gateway.code() == trimmed)
            .ok_or_else(|| UnknownGateway {
                input: s.to_owned(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Lowercase hex MD5 digest of the account password (`md5_password`).
///
/// The plaintext is hashed on construction and never stored.
pub struct PasswordHash(String);

impl PasswordHash {
    /// Form field name used by Mollie (`md5_password`).
    pub const FIELD: &'static str = "md5_password";

    pub fn from_plaintext(plaintext: impl AsRef<[u8]>) -> Self {
        Self(hex::encode(Md5::digest(plaintext.as_ref())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Result code reported by the gateway, or the HTTP status on HTTP failure.
pub struct ResultCode(i32);

impl ResultCode {
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Look the code up in the table of documented gateway results.
    pub fn known(self) -> Option<KnownResultCode> {
        KnownResultCode::from_code(self.0)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Result codes documented by the Mollie gateway.
///
/// Unknown codes are preserved as [`ResultCode`] and return `None` from [`KnownResultCode::from_code`].
pub enum KnownResultCode {
    Sent,
    NoUsername,
    NoPassword,
    NoOrIncorrectOriginator,
    NoRecipients,
    NoMessage,
    IncorrectRecipients,
    IncorrectOriginator,
    IncorrectMessage,
    CharsetFailure,
    ParameterFailure,
    IncorrectCredentials,
    InsufficientCredit,
    MalformedBinaryUdh,
    IncorrectDeliveryDate,
    GatewayUnreachable,
    UnknownError,
}

impl KnownResultCode {
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            10 => Self::Sent,
            20 => Self::NoUsername,
            21 => Self::NoPassword,
            22 => Self::NoOrIncorrectOriginator,
            23 => Self::NoRecipients,
            24 => Self::NoMessage,
            25 => Self::IncorrectRecipients,
            26 => Self::IncorrectOriginator,
            27 => Self::IncorrectMessage,
            28 => Self::CharsetFailure,
            29 => Self::ParameterFailure,
            30 => Self::IncorrectCredentials,
            31 => Self::InsufficientCredit,
            38 => Self::MalformedBinaryUdh,
            39 => Self::IncorrectDeliveryDate,
            98 => Self::GatewayUnreachable,
            99 => Self::UnknownError,
            _ => return None,
        })
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Sent => 10,
            Self::NoUsername => 20,
            Self::NoPassword => 21,
            Self::NoOrIncorrectOriginator => 22,
            Self::NoRecipients => 23,
            Self::NoMessage => 24,
            Self::IncorrectRecipients => 25,
            Self::IncorrectOriginator => 26,
            Self::IncorrectMessage => 27,
            Self::CharsetFailure => 28,
            Self::ParameterFailure => 29,
            Self::IncorrectCredentials => 30,
            Self::InsufficientCredit => 31,
            Self::MalformedBinaryUdh => 38,
            Self::IncorrectDeliveryDate => 39,
            Self::GatewayUnreachable => 98,
            Self::UnknownError => 99,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Sent => "message sent",
            Self::NoUsername => "no username",
            Self::NoPassword => "no password",
            Self::NoOrIncorrectOriginator => "no, or incorrect, originator",
            Self::NoRecipients => "no recipients",
            Self::NoMessage => "no message",
            Self::IncorrectRecipients => "incorrect recipients",
            Self::IncorrectOriginator => "incorrect originator",
            Self::IncorrectMessage => "incorrect message",
            Self::CharsetFailure => "charset failure",
            Self::ParameterFailure => "parameter failure",
            Self::IncorrectCredentials => "incorrect username or password",
            Self::InsufficientCredit => "not enough credits to send message",
            Self::MalformedBinaryUdh => "binary UDH parameter malformed",
            Self::IncorrectDeliveryDate => "deliverydate format is not correct",
            Self::GatewayUnreachable => "gateway unreachable",
            Self::UnknownError => "unknown error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_md5_hex() {
        let hash = PasswordHash::from_plaintext("secret");
        assert_eq!(hash.as_str(), "5ebe2294ecd0e0f08eab7690d2a6ee69");

        let empty = PasswordHash::from_plaintext("");
        assert_eq!(empty.as_str(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn gateway_codes_match_mollie_routes() {
        assert_eq!(Gateway::Basic.code(), "2");
        assert_eq!(Gateway::Business.code(), "4");
        assert_eq!(Gateway::BusinessPlus.code(), "1");
        assert_eq!(Gateway::Landline.code(), "8");
        assert_eq!(Gateway::default(), Gateway::Basic);
    }

    #[test]
    fn gateway_parses_from_name_or_code() {
        assert_eq!("business+".parse::<Gateway>(), Ok(Gateway::BusinessPlus));
        assert_eq!("8".parse::<Gateway>(), Ok(Gateway::Landline));
        assert_eq!(" basic ".parse::<Gateway>(), Ok(Gateway::Basic));
        assert!("3".parse::<Gateway>().is_err());
        assert!("premium".parse::<Gateway>().is_err());
    }

    #[test]
    fn result_code_known_mapping() {
        let code = ResultCode::new(10);
        assert_eq!(code.known(), Some(KnownResultCode::Sent));

        let code = ResultCode::new(31);
        assert_eq!(code.known(), Some(KnownResultCode::InsufficientCredit));
        assert_eq!(
            code.known().map(KnownResultCode::description),
            Some("not enough credits to send message")
        );

        assert_eq!(ResultCode::new(400).known(), None);
    }

    #[test]
    fn known_result_codes_round_trip_through_from_code() {
        for code in [10, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 38, 39, 98, 99] {
            let known = KnownResultCode::from_code(code).unwrap();
            assert_eq!(known.code(), code);
        }
    }
}
