use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub validator_creations: Counter,

    // Registrations refused because of a usage error (e.g. no attributes)
    pub registration_errors: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            validator_creations: counter!("validator.creations"),
            registration_errors: counter!("validator.registration_errors"),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
