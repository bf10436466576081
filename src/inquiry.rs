use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

/// How long a success or error banner stays up before the form returns to idle.
pub const STATUS_RESET_MS: u32 = 4_000;
/// How long the "Copied!" acknowledgment stays on the copy-number button.
pub const COPIED_RESET_MS: u32 = 2_000;
/// A relay submission that has not resolved after this long counts as failed.
pub const RELAY_TIMEOUT_MS: u32 = 15_000;

/// One visitor's inquiry, mirrored from the form inputs on every keystroke.
/// Lives only for the duration of the page visit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    /// Name, phone, and email are required; the message is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.email.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Only one submission may be in flight per form instance.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, SubmitStatus::Submitting)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The payload could not be serialized into a request.
    BadRequest,
    /// The request never reached the relay, or the response was unreadable.
    Transport,
    /// No response within `RELAY_TIMEOUT_MS`.
    Timeout,
    /// The relay answered with `success: false`.
    Rejected,
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Timeout => "The request timed out. Please try again.",
            _ => "Something went wrong. Please try again or reach us on WhatsApp.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactConfig {
    pub number: String,
}

impl ContactConfig {
    /// Deep link that opens WhatsApp with the inquiry template pre-filled.
    /// wa.me wants the number as bare digits, without the leading `+`.
    pub fn whatsapp_url(&self, subservice_name: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.number.trim_start_matches('+'),
            urlencoding::encode(&inquiry_message(subservice_name))
        )
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.number)
    }
}

/// The message template for the direct-contact channel.
pub fn inquiry_message(subservice_name: &str) -> String {
    format!(
        "Hello! I'm interested in {}. Please provide more details.",
        subservice_name
    )
}

/// The two submission channels observed across site revisions, exposed as one
/// strategy the caller selects through `config::submit_strategy()`.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStrategy {
    /// POST the form to a third-party form-relay endpoint.
    Relay(RelayConfig),
    /// No network call; open a pre-filled WhatsApp deep link instead.
    DirectContact(ContactConfig),
}

/// Body of the relay POST. The field names are the relay vendor's contract,
/// not ours; see config.rs for where the access key comes from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelayRequest {
    pub access_key: String,
    pub subject: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub service: String,
    pub subservice: String,
    pub from_name: String,
    pub reply_to: String,
}

impl RelayRequest {
    pub fn new(
        config: &RelayConfig,
        form: &InquiryForm,
        service_name: &str,
        subservice_name: &str,
    ) -> Self {
        Self {
            access_key: config.access_key.clone(),
            subject: format!("Inquiry: {}", subservice_name),
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            service: service_name.to_string(),
            subservice: subservice_name.to_string(),
            from_name: form.name.clone(),
            reply_to: form.email.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
}

/// Sends one inquiry through the relay channel, racing the request against a
/// fixed timeout so a silent relay resolves to an error instead of hanging
/// the form in the submitting state.
pub async fn send_relay(config: &RelayConfig, payload: &RelayRequest) -> Result<(), SubmitError> {
    let request = Request::post(&config.endpoint)
        .json(payload)
        .map_err(|_| SubmitError::BadRequest)?;

    let response = match select(
        Box::pin(request.send()),
        Box::pin(TimeoutFuture::new(RELAY_TIMEOUT_MS)),
    )
    .await
    {
        Either::Left((Ok(response), _)) => response,
        Either::Left((Err(_), _)) => return Err(SubmitError::Transport),
        Either::Right(_) => return Err(SubmitError::Timeout),
    };

    let body: RelayResponse = response.json().await.map_err(|_| SubmitError::Transport)?;
    if body.success {
        Ok(())
    } else {
        Err(SubmitError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InquiryForm {
        InquiryForm {
            name: "Asha Verma".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "asha@example.com".to_string(),
            message: "Need this before the product launch.".to_string(),
        }
    }

    #[test]
    fn empty_form_is_incomplete() {
        assert!(!InquiryForm::default().is_complete());
    }

    #[test]
    fn each_required_field_is_enforced() {
        let clears: [fn(&mut InquiryForm); 3] = [
            |f| f.name.clear(),
            |f| f.phone.clear(),
            |f| f.email.clear(),
        ];
        for clear in clears {
            let mut form = filled_form();
            clear(&mut form);
            assert!(!form.is_complete());
        }
    }

    #[test]
    fn whitespace_only_does_not_satisfy_required() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn message_is_optional() {
        let mut form = filled_form();
        form.message.clear();
        assert!(form.is_complete());
    }

    #[test]
    fn submitting_blocks_further_submits() {
        assert!(!SubmitStatus::Submitting.accepts_submit());
        assert!(SubmitStatus::Idle.accepts_submit());
        assert!(SubmitStatus::Success.accepts_submit());
        assert!(SubmitStatus::Error.accepts_submit());
    }

    #[test]
    fn relay_payload_carries_form_and_context() {
        let config = RelayConfig {
            endpoint: "https://relay.example/submit".to_string(),
            access_key: "key-123".to_string(),
        };
        let payload = RelayRequest::new(&config, &filled_form(), "Marketing", "SEO Audit");

        assert_eq!(payload.access_key, "key-123");
        assert_eq!(payload.subject, "Inquiry: SEO Audit");
        assert_eq!(payload.service, "Marketing");
        assert_eq!(payload.subservice, "SEO Audit");
        assert_eq!(payload.from_name, payload.name);
        assert_eq!(payload.reply_to, payload.email);

        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(json["access_key"], "key-123");
        assert_eq!(json["reply_to"], "asha@example.com");
        assert_eq!(json["message"], "Need this before the product launch.");
    }

    #[test]
    fn relay_response_success_field_parses() {
        let ok: RelayResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        let rejected: RelayResponse =
            serde_json::from_str(r#"{"success": false, "message": "bad key"}"#).unwrap();
        assert!(!rejected.success);
    }

    #[test]
    fn whatsapp_url_encodes_subservice_name() {
        let contact = ContactConfig {
            number: "+919667277348".to_string(),
        };
        let url = contact.whatsapp_url("SEO Audit");
        assert!(url.starts_with("https://wa.me/919667277348?text="));
        assert!(url.contains("SEO%20Audit"));
        // the template text survives encoding
        assert!(url.contains("interested%20in"));
        assert!(!url.contains('+'));
    }

    #[test]
    fn tel_url_keeps_full_number() {
        let contact = ContactConfig {
            number: "+919667277348".to_string(),
        };
        assert_eq!(contact.tel_url(), "tel:+919667277348");
    }

    #[test]
    fn timeout_has_its_own_message() {
        assert_ne!(
            SubmitError::Timeout.user_message(),
            SubmitError::Rejected.user_message()
        );
    }
}
