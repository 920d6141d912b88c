mod memory;

pub use memory::CountriesStorage;

use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::Country;

/// Capability set every store backend provides.
///
/// The router only ever talks to the catalog through this trait, so an
/// alternate backend can be swapped in without touching the handlers.
pub trait CountryActions: Send + Sync {
    /// Store `country` under its normalized name, overwriting any existing
    /// entry with that key. Returns the stored record.
    fn add_country(&self, country: Country) -> Country;

    /// Remove the entry for `id`. Removing an absent key is a no-op.
    fn delete_country(&self, id: &str);

    /// Snapshot of all stored countries, in no particular order.
    fn get_all_countries(&self) -> Vec<Country>;

    /// Look up a country by identifier, case-insensitively.
    fn get_country_by_id(&self, id: &str) -> Result<Country, StoreError>;

    /// Pick one stored key uniformly at random from the current key set.
    fn get_random_country_id(&self) -> Result<String, StoreError>;
}

/// Shared store handle used across the app.
pub type DynCountryStore = Arc<dyn CountryActions>;

/// Create a new, empty in-memory store.
pub fn new_store() -> DynCountryStore {
    Arc::new(CountriesStorage::new())
}
