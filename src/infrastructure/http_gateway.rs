use crate::config::DonationConfig;
use crate::domain::checkout::DonationError;
use crate::domain::ports::{
    DonationGateway, SessionId, SessionOutcome, VerificationOutcome, VerificationToken,
};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, USER_AGENT};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const VERIFY_PATH: &str = "/api/recaptcha";
const SESSION_PATH: &str = "/api/checkout_sessions";
const APP_USER_AGENT: &str = concat!("sitedeck/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct VerifyRequest<'a> {
    response: &'a str,
}

#[derive(Serialize)]
struct SessionRequest {
    amount: u64,
}

/// Body shared by both endpoints. Failures carry `statusCode` in the body.
#[derive(Debug, Default, Deserialize)]
struct GatewayReply {
    #[serde(rename = "statusCode")]
    status_code: Option<u16>,
    message: Option<String>,
    id: Option<String>,
}

/// The site's donation API over HTTP.
pub struct HttpDonationGateway {
    http: HttpClient,
    api_base: String,
}

impl HttpDonationGateway {
    pub fn new(config: &DonationConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<GatewayReply, DonationError> {
        let resp = self
            .http
            .post(self.endpoint(path))
            .header(USER_AGENT, APP_USER_AGENT)
            .header(CACHE_CONTROL, "no-cache")
            .json(body)
            .send()
            .await?;
        let http_status = resp.status().as_u16();
        let mut reply: GatewayReply = resp.json().await?;
        if reply.status_code.is_none() && http_status >= 400 {
            reply.status_code = Some(http_status);
        }
        tracing::debug!(path, status = ?reply.status_code, "donation API replied");
        Ok(reply)
    }
}

#[async_trait]
impl DonationGateway for HttpDonationGateway {
    async fn verify(&self, token: &VerificationToken) -> Result<VerificationOutcome, DonationError> {
        let reply = self.post(VERIFY_PATH, &VerifyRequest { response: &token.0 }).await?;
        Ok(interpret_verification(&reply))
    }

    async fn create_session(&self, amount: u64) -> Result<SessionOutcome, DonationError> {
        let reply = self.post(SESSION_PATH, &SessionRequest { amount }).await?;
        interpret_session(reply)
    }
}

fn interpret_verification(reply: &GatewayReply) -> VerificationOutcome {
    if reply.status_code == Some(400) {
        VerificationOutcome::Rejected
    } else {
        VerificationOutcome::Accepted
    }
}

fn interpret_session(reply: GatewayReply) -> Result<SessionOutcome, DonationError> {
    match (reply.status_code, reply.id) {
        (Some(500), _) => Ok(SessionOutcome::Failed(
            reply
                .message
                .unwrap_or_else(|| "checkout session failed".to_string()),
        )),
        (Some(429), _) => Ok(SessionOutcome::RateLimited),
        (_, Some(id)) if !id.is_empty() => Ok(SessionOutcome::Created(SessionId(id))),
        (Some(code), _) if code >= 400 => Ok(SessionOutcome::Failed(
            reply
                .message
                .unwrap_or_else(|| format!("checkout session failed with status {code}")),
        )),
        _ => Err(DonationError::MalformedResponse {
            endpoint: SESSION_PATH,
            detail: "reply has no session id".to_string(),
        }),
    }
}
