#![forbid(unsafe_code)]

//! The submission collaborator.
//!
//! The form hands credentials over and walks away; whatever the
//! authentication service does with them is its own business. The
//! screen never blocks on an attempt and never disables the login
//! button while one is in flight.

use std::time::Duration;

use credform::{CredentialSink, Credentials};

/// Forwards each login attempt to the storefront auth service on a
/// background thread.
///
/// This build talks to a stand-in that only logs the attempt; the
/// request/response plumbing slots in behind the same trait.
#[derive(Debug, Default)]
pub struct BackgroundAuthenticator;

impl CredentialSink for BackgroundAuthenticator {
    fn submit(&mut self, credentials: Credentials) {
        tracing::info!(email = %credentials.email, "login requested");
        std::thread::spawn(move || {
            // Stand-in for the auth service round trip.
            std::thread::sleep(Duration::from_millis(150));
            tracing::info!(email = %credentials.email, "login attempt forwarded");
        });
    }
}
