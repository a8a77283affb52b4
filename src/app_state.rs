use std::sync::Arc;

use crate::config;
use crate::i18n::Localizer;
use crate::scheduling::SlotValidator;

#[derive(Clone)]
pub struct AppState {
    pub env: config::Config,
    pub localizer: Arc<Localizer>,
    pub validator: Arc<SlotValidator>,
}

impl AppState {
    pub fn new(env: config::Config, localizer: Arc<Localizer>, validator: Arc<SlotValidator>) -> Self {
        Self {
            env,
            localizer,
            validator,
        }
    }
}
