use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("infera.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("infera.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("infera.client.request_duration_seconds");

pub(crate) static SESSION_TURNS: Counter = Counter::new("infera.session.turns");
pub(crate) static SESSION_TURNS_IGNORED: Counter = Counter::new("infera.session.turns_ignored");
pub(crate) static SESSION_FALLBACKS: Counter = Counter::new("infera.session.fallbacks");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_TURNS_IGNORED);
    collector.register_counter(&SESSION_FALLBACKS);
}
