use crate::inquiry::{ContactConfig, RelayConfig, SubmitStrategy};

pub fn relay_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

// The relay vendor's access key is deployment configuration, baked in at
// build time. Without one the site falls back to the direct-contact channel.
pub fn relay_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

pub fn contact_number() -> &'static str {
    option_env!("CONTACT_NUMBER").unwrap_or("+919667277348")
}

pub fn contact_config() -> ContactConfig {
    ContactConfig {
        number: contact_number().to_string(),
    }
}

pub fn submit_strategy() -> SubmitStrategy {
    if relay_access_key().is_empty() {
        SubmitStrategy::DirectContact(contact_config())
    } else {
        SubmitStrategy::Relay(RelayConfig {
            endpoint: relay_endpoint().to_string(),
            access_key: relay_access_key().to_string(),
        })
    }
}
