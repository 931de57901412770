//! Request body validation shared by the HTTP handlers.
//!
//! Bodies arrive as raw bytes and are parsed here rather than through
//! `web::Json`, so that a missing `Content-Type`, an empty body and malformed
//! JSON all produce the same documented 400 responses.

use serde_json::{Map, Value};

use crate::domain::{EmailAddress, Error, UserDraft};

/// Body absent, unparseable, or an empty JSON value.
pub const NO_JSON_PAYLOAD: &str = "No JSON payload provided";
/// Echo payload lacks one of its required keys.
pub const MISSING_NAME_OR_ROLE: &str = "Missing 'name' or 'role' in payload";
/// User payload lacks `name` or `email`.
pub const MISSING_NAME_OR_EMAIL: &str = "Missing 'name' or 'email' in payload";
/// `email` is not a string matching the address grammar.
pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

/// Parse a body as JSON, treating empty and malformed input alike.
pub(crate) fn parse_json(body: &[u8]) -> Option<Value> {
    serde_json::from_slice(body).ok()
}

/// Whether a JSON value counts as a present payload.
///
/// `null`, `false`, zero, the empty string and empty containers are treated
/// as "no payload".
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn present_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.filter(|v| is_present(v)).and_then(Value::as_object)
}

/// Validate the generic echo payload.
///
/// Returns the parsed value unchanged so the caller can echo it with its
/// original key order.
pub(crate) fn echo_payload(body: &[u8]) -> Result<Value, Error> {
    let value = parse_json(body)
        .filter(is_present)
        .ok_or_else(|| Error::invalid_request(NO_JSON_PAYLOAD))?;

    let has_keys = value
        .as_object()
        .is_some_and(|fields| fields.contains_key("name") && fields.contains_key("role"));
    if !has_keys {
        return Err(Error::invalid_request(MISSING_NAME_OR_ROLE));
    }
    Ok(value)
}

/// Text stored for a scalar `name`, following SQLite's TEXT affinity.
///
/// Containers and `null` have no text form and yield `None`.
fn name_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(u8::from(*flag).to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Validate a create or update body into a [`UserDraft`].
///
/// Checks run in order: both keys present with a scalar `name`, then the
/// email grammar.
pub(crate) fn user_draft(body: &[u8]) -> Result<UserDraft, Error> {
    let parsed = parse_json(body);
    let fields =
        present_object(parsed.as_ref()).ok_or_else(|| Error::invalid_request(MISSING_NAME_OR_EMAIL))?;

    let (Some(name), Some(email)) = (fields.get("name"), fields.get("email")) else {
        return Err(Error::invalid_request(MISSING_NAME_OR_EMAIL));
    };
    let Some(name) = name_text(name) else {
        return Err(Error::invalid_request(MISSING_NAME_OR_EMAIL));
    };

    let email = email
        .as_str()
        .and_then(|raw| EmailAddress::new(raw).ok())
        .ok_or_else(|| Error::invalid_request(INVALID_EMAIL_FORMAT))?;

    Ok(UserDraft::new(name, email))
}
