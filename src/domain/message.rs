use std::collections::BTreeMap;
use std::fmt;

use crate::domain::config::MessageConfig;
use crate::domain::value::PasswordHash;

pub const USERNAME_PARAM: &str = "username";
pub const PASSWORD_PARAM: &str = PasswordHash::FIELD;
pub const ORIGINATOR_PARAM: &str = "originator";
pub const GATEWAY_PARAM: &str = "gateway";
pub const CHARSET_PARAM: &str = "charset";
pub const TYPE_PARAM: &str = "type";
pub const RECIPIENTS_PARAM: &str = "recipients";
pub const BODY_PARAM: &str = "message";

#[derive(Clone, PartialEq, Eq, Default)]
/// One outbound SMS: the exact form parameters that will be posted.
///
/// Two messages are equal when their parameter maps are equal, however they
/// were built. Nothing is validated until delivery.
pub struct Message {
    params: BTreeMap<String, String>,
}

impl Message {
    /// Start from the config's default parameters.
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            params: config.default_params(),
        }
    }

    /// Start from the config's defaults, then apply `extra` on top.
    ///
    /// Keys in `extra` replace the defaults they collide with.
    pub fn with_params<I, K, V>(config: &MessageConfig, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut message = Self::new(config);
        message
            .params
            .extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
        message
    }

    /// Wrap a raw parameter map without any defaults.
    pub fn from_params(params: BTreeMap<String, String>) -> Self {
        Self { params }
    }

    /// Set the recipient and return the message.
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.set_recipient(recipient);
        self
    }

    /// Set the body and return the message.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.set_body(body);
        self
    }

    pub fn recipient(&self) -> Option<&str> {
        self.param(RECIPIENTS_PARAM)
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.set_param(RECIPIENTS_PARAM, recipient);
    }

    pub fn body(&self) -> Option<&str> {
        self.param(BODY_PARAM)
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.set_param(BODY_PARAM, body);
    }

    pub fn originator(&self) -> Option<&str> {
        self.param(ORIGINATOR_PARAM)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from: <{}> to: <{}> body: \"{}\"",
            self.originator().unwrap_or_default(),
            self.recipient().unwrap_or_default(),
            self.body().unwrap_or_default()
        )
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<Message {self}>")
    }
}
