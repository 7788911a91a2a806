//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Configuration the UI needs (store name, currency, messages).
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
