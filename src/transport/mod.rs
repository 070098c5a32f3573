//! Transport layer: wire-format details (form encoding, XML decoding).

mod form;
mod xml;

pub use form::encode_form;
pub use xml::{TransportError, decode_response};
