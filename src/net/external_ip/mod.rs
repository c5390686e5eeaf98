#![cfg_attr(not(feature = "log"), allow(unused_variables))]
use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use std::str::FromStr;
use serde::Deserialize;
#[cfg(feature = "log")]
use log::{debug, info};
#[cfg(not(feature = "log"))]
use crate::{debug, info};

use crate::net::Transport;

/// Sent in place of the caller's address when the lookup fails.
pub const FALLBACK_IP: &str = "0.0.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedIp {
    Address(IpAddr),
    Unknown,
}

impl Display for ResolvedIp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedIp::Address(ip) => write!(f, "{}", ip),
            ResolvedIp::Unknown => write!(f, "{}", FALLBACK_IP),
        }
    }
}

#[derive(Deserialize)]
struct IpLookup {
    ip: String,
}

/// Asks the lookup service for the caller's public address. Never fails.
pub async fn resolve_ip<T: Transport + ?Sized>(transport: &T, url: &str) -> ResolvedIp {
    match transport.get(url).await {
        Ok(res) => match serde_json::from_str::<IpLookup>(&res.body) {
            Ok(lookup) => match IpAddr::from_str(lookup.ip.trim()) {
                Ok(i) => {
                    info!("external ip is {}", i);
                    return ResolvedIp::Address(i)
                }
                Err(e) => debug!("{:?} while parsing {}", e, lookup.ip),
            },
            Err(e) => debug!("{:?} while decoding {:?}", e, res.body),
        },
        Err(e) => debug!("{:?}", e),
    }
    debug!("cannot get external ip, using {}", FALLBACK_IP);
    ResolvedIp::Unknown
}
