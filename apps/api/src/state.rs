use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::customers::CustomerProvider;
use crate::sms::generator::SmsGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: SmsGenerator,
    /// Pluggable customer source. Default: StaticCustomers (built-in samples or CUSTOMERS_FILE).
    pub customers: Arc<dyn CustomerProvider>,
}

impl AppState {
    /// Fresh PRNG for one request's template draws. With `TEMPLATE_SEED` set,
    /// every request replays the same sequence.
    pub fn template_rng(&self) -> StdRng {
        match self.config.template_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
