//! Client for the ICUTech `Login` SOAP operation.

pub mod envelope;
pub mod parsing;

#[cfg(feature = "log")]
use log::{debug, info};
#[cfg(not(feature = "log"))]
use crate::{debug, info};

use crate::config::{Endpoints, Settings};
use crate::credentials::Credentials;
use crate::net::{resolve_ip, ResolvedIp, Transport, TransportError};
use envelope::{CONTENT_TYPE, SOAP_ACTION};

#[derive(Debug, thiserror::Error)]
pub enum SoapError {
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Invalid SOAP response")]
    InvalidResponse,
    #[error("{0}")]
    Transport(#[from] TransportError),
}

/// A fully built request, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    pub url: String,
    pub ip: ResolvedIp,
    pub envelope: String,
}

impl SoapRequest {
    pub const HEADERS: [(&'static str, &'static str); 2] = [
        ("Content-Type", CONTENT_TYPE),
        ("SOAPAction", SOAP_ACTION),
    ];
}

pub struct SoapClient<T> {
    transport: T,
    endpoints: Endpoints,
    settings: Settings,
}

impl<T: Transport> SoapClient<T> {
    pub fn new(transport: T, endpoints: Endpoints, settings: Settings) -> Self {
        Self { transport, endpoints, settings }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves the caller's IP and builds the request without sending it.
    pub async fn prepare(&self, credentials: &Credentials) -> SoapRequest {
        debug!("getting external ip");
        let ip = resolve_ip(&self.transport, &self.endpoints.ip_lookup).await;
        let envelope = envelope::build(
            credentials.username(),
            credentials.password(),
            &ip.to_string(),
            self.settings.escape_credentials,
        );
        SoapRequest {
            url: self.endpoints.target_url(),
            ip,
            envelope,
        }
    }

    /// Calls `Login` and returns the raw text of the `<return>` element.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, SoapError> {
        let request = self.prepare(credentials).await;
        info!("sending Login for {:?} from {} to {}", credentials.username(), request.ip, request.url);

        let res = self.transport
            .post(&request.url, &SoapRequest::HEADERS, request.envelope)
            .await?;
        if !res.is_success() {
            return Err(SoapError::Http(res.status))
        }

        let result = parsing::return_text(&res.body).ok_or(SoapError::InvalidResponse)?;
        debug!("Login returned {:?}", result);
        Ok(result)
    }
}
