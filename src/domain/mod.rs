//! Domain layer: configuration, messages and responses (no I/O).

mod config;
mod message;
mod response;
mod validation;
mod value;

pub use config::{DEFAULT_CHARSET, DEFAULT_MESSAGE_TYPE, MessageConfig};
pub use message::{
    BODY_PARAM, CHARSET_PARAM, GATEWAY_PARAM, Message, ORIGINATOR_PARAM, PASSWORD_PARAM,
    RECIPIENTS_PARAM, TYPE_PARAM, USERNAME_PARAM,
};
pub use response::Response;
pub use validation::{
    MAX_ALPHANUMERIC_ORIGINATOR, MAX_NUMERIC_ORIGINATOR, OriginatorKind, REQUIRED_PARAMS,
    ValidationError, validate_params,
};
pub use value::{Gateway, KnownResultCode, PasswordHash, ResultCode, UnknownGateway};
