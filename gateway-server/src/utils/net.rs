//! Client identification for rate limiting
//!
//! Requests are keyed by the best available client identifier:
//! first `x-forwarded-for` hop, then `x-real-ip`, else a short hash of
//! the user-agent. Behind a proxy these headers are spoofable; the
//! identifier bounds abuse, it does not authenticate anyone.

use http::HeaderMap;
use sha2::{Digest, Sha256};

/// Extract a rate-limit identifier for the request
pub fn client_identifier(headers: &HeaderMap) -> String {
    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        if let Some(first_hop) = forwarded.split(',').next() {
            let first_hop = first_hop.trim();
            if !first_hop.is_empty() {
                return first_hop.to_string();
            }
        }
    }

    if let Some(real_ip) = header_str(headers, "x-real-ip") {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    let user_agent = header_str(headers, "user-agent").unwrap_or("unknown");
    format!("ua-{}", hash_prefix(user_agent))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn hash_prefix(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(&digest[..8])
}
