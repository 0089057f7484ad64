use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use rc_api::Client;

use crate::config::SdkConfig;
use crate::error::{Error, Result};

/// Creates an `rc_api::Client` carrying the configured credentials,
/// timeouts and user agent on every request.
pub fn connect(config: &SdkConfig) -> Result<Client> {
    config.validate()?;

    let mut headers = HeaderMap::new();
    if let Some(token) = &config.bearer_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| Error::Config(format!("invalid bearer token: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;

    // Generated paths start with `/v2` or `/v1`; a trailing slash would double it.
    Ok(Client::new_with_client(
        config.service_url.trim_end_matches('/'),
        client,
    ))
}
