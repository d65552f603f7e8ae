use crate::state::contact::ContactEndpoint;

/// Counters count up for this long once the hero shows.
pub const COUNTER_DURATION_MS: f64 = 700.0;
/// Share of the hero that must be on screen before the counters start.
pub const HERO_VISIBLE_THRESHOLD: f64 = 0.35;
pub const QUOTE_AUTOPLAY_MS: u32 = 9_000;
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 700;

/// Set `CONTACT_ENDPOINT` at build time to deliver contact messages for
/// real; without it the form only pretends to send.
pub fn contact_endpoint() -> ContactEndpoint {
    endpoint_from(option_env!("CONTACT_ENDPOINT"))
}

fn endpoint_from(configured: Option<&str>) -> ContactEndpoint {
    match configured.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => ContactEndpoint::Http { url: url.to_string() },
        None => ContactEndpoint::Simulated { delay_ms: SIMULATED_SUBMIT_DELAY_MS },
    }
}
