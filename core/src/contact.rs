use serde::Serialize;
use std::fmt;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_contact: String,
    pub message: String,
}

impl ContactPayload {
    pub fn trimmed(name: &str, contact: &str, message: &str) -> Self {
        Self {
            from_name: name.trim().to_string(),
            from_contact: contact.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    // the relay must never be invoked for a payload that fails this
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.from_name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.from_contact.is_empty() {
            return Err(ContactError::MissingContact);
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingName,
    MissingContact,
    MissingMessage,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingName => write!(f, "name is required"),
            ContactError::MissingContact => write!(f, "contact is required"),
            ContactError::MissingMessage => write!(f, "message is required"),
        }
    }
}

impl std::error::Error for ContactError {}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_contact: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> RelayRequest<'a> {
    pub fn new(
        service_id: &'a str,
        template_id: &'a str,
        user_id: &'a str,
        payload: &'a ContactPayload,
    ) -> Self {
        Self {
            service_id,
            template_id,
            user_id,
            template_params: TemplateParams {
                from_name: &payload.from_name,
                from_contact: &payload.from_contact,
                message: &payload.message,
            },
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_first_empty_field() {
        let payload = ContactPayload::trimmed("  ", "a@b.c", "hello");
        assert_eq!(payload.validate(), Err(ContactError::MissingName));
        let payload = ContactPayload::trimmed("Kaif", "  ", "hello");
        assert_eq!(payload.validate(), Err(ContactError::MissingContact));
        let payload = ContactPayload::trimmed("Kaif", "a@b.c", "");
        assert_eq!(payload.validate(), Err(ContactError::MissingMessage));
        let payload = ContactPayload::trimmed("Kaif", "a@b.c", "hello");
        assert_eq!(payload.validate(), Ok(()));
    }

    #[test]
    fn relay_request_serializes_flat_params() {
        let payload = ContactPayload::trimmed("Kaif", "+91 00000", "hi there");
        let request = RelayRequest::new("service_x", "template_y", "key_z", &payload);
        let json = request.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"service_id":"service_x","template_id":"template_y","user_id":"key_z","template_params":{"from_name":"Kaif","from_contact":"+91 00000","message":"hi there"}}"#
        );
    }
}
