// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Base address of the remote catalog service, used when no `settings.toml`
/// entry or `--api-url` flag overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://192.168.0.101:8000";

/// Site name rendered when the remote configuration is unavailable or has no
/// `site_name` of its own.
pub const FALLBACK_SITE_NAME: &str = "Zaujain Nikah Point";

/// Request timeout for catalog API calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
