//! HTTP seam shared by the IP resolver and the SOAP client.
//!
//! Production code goes through [`HttpTransport`], a thin wrapper around a
//! `reqwest::Client`; tests plug in an in-memory implementation.

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
#[cfg(not(feature = "log"))]
use crate::debug;
#[cfg(feature = "log")]
use log::debug;

/// Status and body of a completed request. The body is read eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, connect, TLS, timeout, body read).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        TransportError(value.to_string())
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }

    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, headers, body).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Without a timeout a hung endpoint blocks until the OS gives up on the socket.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self { client: builder.build()? })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!("making GET request to {}", url);
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        debug!("status code of request: {}", status);
        Ok(HttpResponse::new(status, res.text().await?))
    }

    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        debug!("making POST request to {} ({} bytes)", url, body.len());
        let mut req = self.client.post(url).body(body);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let res = req.send().await?;
        let status = res.status().as_u16();
        debug!("status code of request: {}", status);
        Ok(HttpResponse::new(status, res.text().await?))
    }
}
