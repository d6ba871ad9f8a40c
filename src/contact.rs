use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Everything except alphanumerics and the characters encodeURIComponent
// leaves bare; keeps decoded parameters byte-identical to the input.
const MAILTO_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// A single contact-form submission, read once at submit time and discarded
/// after producing the mailto handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("empty name field")]
    EmptyName,
    #[error("empty email field")]
    EmptyEmail,
    #[error("empty message field")]
    EmptyMessage,
}

impl ContactRequest {
    /// The form's `required` attributes keep empty values from ever being
    /// submitted; this re-checks so the formatter only sees populated fields.
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, ContactFieldError> {
        if name.trim().is_empty() {
            return Err(ContactFieldError::EmptyName);
        }
        if email.trim().is_empty() {
            return Err(ContactFieldError::EmptyEmail);
        }
        if message.trim().is_empty() {
            return Err(ContactFieldError::EmptyMessage);
        }
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// Composes the `mailto:` URI which hands a [`ContactRequest`] off to the
/// visitor's mail client with subject and body pre-filled. The caller is
/// responsible for navigating to the returned URI; no message is sent here.
pub fn format_contact_handoff(request: &ContactRequest, recipient: &str) -> String {
    let subject = format!("Portfolio contact from {}", request.name);
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        request.name, request.email, request.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        utf8_percent_encode(&subject, MAILTO_COMPONENT),
        utf8_percent_encode(&body, MAILTO_COMPONENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest::new(name.to_string(), email.to_string(), message.to_string())
            .expect("test fields should be non-empty")
    }

    // Pull a query parameter out of the mailto URI and percent-decode it
    fn decoded_param(uri: &str, key: &str) -> String {
        let (_, query) = uri.split_once('?').expect("uri should have a query");
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{key}=")))
            .unwrap_or_else(|| panic!("query should have a {key} param"));
        percent_decode_str(raw)
            .decode_utf8()
            .expect("param should decode as utf-8")
            .into_owned()
    }

    #[test]
    fn test_handoff_addresses_recipient() {
        let req = request("Ada Lovelace", "ada@example.com", "Hello");
        let uri = format_contact_handoff(&req, "iftekhar@example.com");
        assert!(uri.starts_with("mailto:iftekhar@example.com?"));
    }

    #[test]
    fn test_subject_decodes_to_name_line() {
        let req = request("Ada Lovelace", "ada@example.com", "Hello");
        let uri = format_contact_handoff(&req, "iftekhar@example.com");
        assert_eq!(
            decoded_param(&uri, "subject"),
            "Portfolio contact from Ada Lovelace"
        );
    }

    #[test]
    fn test_body_lines_in_order() {
        let req = request("Ada Lovelace", "ada@example.com", "Let's collaborate");
        let uri = format_contact_handoff(&req, "iftekhar@example.com");
        let body = decoded_param(&uri, "body");
        let mut lines = body.lines();
        assert_eq!(lines.next(), Some("Name: Ada Lovelace"));
        assert_eq!(lines.next(), Some("Email: ada@example.com"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Let's collaborate"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_worked_example() {
        let req = request("Ada Lovelace", "ada@example.com", "Let's collaborate");
        let uri = format_contact_handoff(&req, "iftekhar@example.com");
        assert_eq!(
            uri,
            "mailto:iftekhar@example.com\
             ?subject=Portfolio%20contact%20from%20Ada%20Lovelace\
             &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0ALet's%20collaborate"
        );
    }

    #[test]
    fn test_special_characters_round_trip() {
        let name = "A&B=C";
        let email = "a+b@example.com";
        let message = "line one\nline two & three = four\n100% müsli 🚀";
        let req = request(name, email, message);
        let uri = format_contact_handoff(&req, "iftekhar@example.com");

        // Raw separators never leak into a single parameter value
        let (_, query) = uri.split_once('?').unwrap();
        for pair in query.split('&') {
            let (_, value) = pair.split_once('=').unwrap();
            assert!(!value.contains('&'));
            assert!(!value.contains('='));
            assert!(!value.contains('\n'));
        }

        let body = decoded_param(&uri, "body");
        assert!(body.contains(&format!("Name: {name}")));
        assert!(body.contains(&format!("Email: {email}")));
        assert!(body.ends_with(message));
        assert_eq!(decoded_param(&uri, "subject"), format!("Portfolio contact from {name}"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            ContactRequest::new(String::new(), "a@b.com".into(), "hi".into()),
            Err(ContactFieldError::EmptyName)
        );
        assert_eq!(
            ContactRequest::new("Ada".into(), "  ".into(), "hi".into()),
            Err(ContactFieldError::EmptyEmail)
        );
        assert_eq!(
            ContactRequest::new("Ada".into(), "a@b.com".into(), "\n".into()),
            Err(ContactFieldError::EmptyMessage)
        );
    }
}
