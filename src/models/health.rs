use std::env;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{DB_NAME_VAR, MONGO_URL_VAR};

/// # Health Status Response
///
/// Reports whether the required configuration is present in the
/// environment. This is deliberately a configuration probe, not a
/// connectivity probe: it never touches the store.
///
/// ## Fields
/// - `mongo_url_set`: whether `MONGO_URL` is set to a non-empty value
/// - `db_name_set`: whether `DB_NAME` is set to a non-empty value
///
/// ## Example JSON
/// ```json
/// {
///   "mongo_url_set": true,
///   "db_name_set": true
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub mongo_url_set: bool,
    pub db_name_set: bool,
}

impl HealthResponse {
    /// Snapshot of the current environment. Empty values count as unset,
    /// mirroring the startup check in [`Config::from_env`].
    ///
    /// [`Config::from_env`]: crate::config::Config::from_env
    pub fn current() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |name: &str| lookup(name).is_some_and(|value| !value.is_empty());

        Self {
            mongo_url_set: set(MONGO_URL_VAR),
            db_name_set: set(DB_NAME_VAR),
        }
    }
}
