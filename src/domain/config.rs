use std::collections::BTreeMap;

use crate::domain::message::{
    CHARSET_PARAM, GATEWAY_PARAM, ORIGINATOR_PARAM, PASSWORD_PARAM, TYPE_PARAM, USERNAME_PARAM,
};
use crate::domain::value::{Gateway, PasswordHash};

pub const DEFAULT_CHARSET: &str = "UTF-8";
pub const DEFAULT_MESSAGE_TYPE: &str = "normal";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account-wide defaults every [`Message`](crate::Message) starts from.
///
/// Build one at startup and hand it by reference to the message constructors.
/// Values are not validated here; [`validate_params`](crate::validate_params)
/// runs at delivery time.
pub struct MessageConfig {
    username: String,
    password_hash: PasswordHash,
    originator: String,
    charset: String,
    message_type: String,
    gateway: Gateway,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password_hash: PasswordHash::default(),
            originator: String::new(),
            charset: DEFAULT_CHARSET.to_owned(),
            message_type: DEFAULT_MESSAGE_TYPE.to_owned(),
            gateway: Gateway::default(),
        }
    }
}

impl MessageConfig {
    /// Create a config with credentials and sender id; the password is hashed immediately.
    pub fn new(
        username: impl Into<String>,
        password: impl AsRef<[u8]>,
        originator: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: PasswordHash::from_plaintext(password),
            originator: originator.into(),
            ..Self::default()
        }
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn with_message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = message_type.into();
        self
    }

    pub fn with_gateway(mut self, gateway: Gateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Replace the stored password hash with the MD5 digest of `password`.
    pub fn set_password(&mut self, password: impl AsRef<[u8]>) {
        self.password_hash = PasswordHash::from_plaintext(password);
    }

    pub fn set_originator(&mut self, originator: impl Into<String>) {
        self.originator = originator.into();
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.charset = charset.into();
    }

    pub fn set_message_type(&mut self, message_type: impl Into<String>) {
        self.message_type = message_type.into();
    }

    pub fn set_gateway(&mut self, gateway: Gateway) {
        self.gateway = gateway;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn originator(&self) -> &str {
        &self.originator
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn gateway(&self) -> Gateway {
        self.gateway
    }

    /// Parameters every message is seeded with, read from the current values.
    pub fn default_params(&self) -> BTreeMap<String, String> {
        [
            (USERNAME_PARAM, self.username.as_str()),
            (PASSWORD_PARAM, self.password_hash.as_str()),
            (ORIGINATOR_PARAM, self.originator.as_str()),
            (GATEWAY_PARAM, self.gateway.code()),
            (CHARSET_PARAM, self.charset.as_str()),
            (TYPE_PARAM, self.message_type.as_str()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
    }
}
