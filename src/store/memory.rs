use std::collections::HashMap;
use std::sync::RwLock;

use rand::Rng;

use crate::errors::StoreError;
use crate::models::Country;

use super::CountryActions;

/// In-memory country catalog keyed by lowercased country name.
///
/// A single lock guards the map; every operation holds it for its whole
/// read or write and the guard drops on every exit path. Nothing is ever
/// awaited or read from the network while the lock is held.
pub struct CountriesStorage {
    countries: RwLock<HashMap<String, Country>>,
}

impl CountriesStorage {
    /// Create an empty storage. The map always exists, even with no entries.
    pub fn new() -> Self {
        Self {
            countries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for CountriesStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryActions for CountriesStorage {
    fn add_country(&self, country: Country) -> Country {
        let mut map = self.countries.write().unwrap();
        map.insert(country.name.to_lowercase(), country.clone());
        country
    }

    fn delete_country(&self, id: &str) {
        let mut map = self.countries.write().unwrap();
        map.remove(&id.to_lowercase());
    }

    fn get_all_countries(&self) -> Vec<Country> {
        let map = self.countries.read().unwrap();
        map.values().cloned().collect()
    }

    fn get_country_by_id(&self, id: &str) -> Result<Country, StoreError> {
        let map = self.countries.read().unwrap();
        map.get(&id.to_lowercase())
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn get_random_country_id(&self) -> Result<String, StoreError> {
        // Map iteration order is unspecified, so collect the current key
        // set into a vector and index into that. Collected fresh per call.
        let mut ids: Vec<String> = {
            let map = self.countries.read().unwrap();
            map.keys().cloned().collect()
        };

        match ids.len() {
            0 => Err(StoreError::NoCountriesAvailable),
            1 => Ok(ids.remove(0)),
            len => {
                let index = rand::thread_rng().gen_range(0..len);
                Ok(ids.swap_remove(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::models::Currency;

    fn greece() -> Country {
        Country {
            name: "Greece".into(),
            alpha2_code: "GR".into(),
            capital: "Athens".into(),
            currencies: vec![Currency {
                code: "EUR".into(),
                name: "Euro".into(),
                symbol: "E".into(),
            }],
        }
    }

    fn spain() -> Country {
        Country {
            name: "Spain".into(),
            alpha2_code: "ES".into(),
            capital: "Madrid".into(),
            currencies: vec![Currency {
                code: "EUR".into(),
                name: "Euro".into(),
                symbol: "E".into(),
            }],
        }
    }

    #[test]
    fn get_all_on_empty_storage_returns_empty_vec() {
        let storage = CountriesStorage::new();
        assert!(storage.get_all_countries().is_empty());
    }

    #[test]
    fn add_one_country_and_get_all() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());

        let all = storage.get_all_countries();
        assert_eq!(1, all.len());
        assert_eq!("Greece", all[0].name);
        assert_eq!("GR", all[0].alpha2_code);
        assert_eq!("Athens", all[0].capital);
        assert_eq!("Euro", all[0].currencies[0].name);
    }

    #[test]
    fn add_returns_the_stored_record() {
        let storage = CountriesStorage::new();
        let stored = storage.add_country(greece());
        assert_eq!(greece(), stored);
    }

    #[test]
    fn get_by_id_is_case_insensitive() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());
        storage.add_country(spain());

        for id in ["greece", "GREECE", "Greece"] {
            let found = storage.get_country_by_id(id).unwrap();
            assert_eq!("Greece", found.name);
            assert_eq!("Athens", found.capital);
        }
    }

    #[test]
    fn get_by_unknown_id_fails() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());

        assert_eq!(
            Err(StoreError::NotFound),
            storage.get_country_by_id("france")
        );
    }

    #[test]
    fn adding_same_name_twice_overwrites() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());

        let mut updated = greece();
        updated.capital = "Thessaloniki".into();
        storage.add_country(updated);

        let all = storage.get_all_countries();
        assert_eq!(1, all.len());
        assert_eq!("Thessaloniki", all[0].capital);
    }

    #[test]
    fn delete_removes_only_the_named_country() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());
        storage.add_country(spain());

        storage.delete_country("spain");

        assert_eq!(1, storage.get_all_countries().len());
        assert_eq!(
            Err(StoreError::NotFound),
            storage.get_country_by_id("spain")
        );
        assert!(storage.get_country_by_id("greece").is_ok());
    }

    #[test]
    fn delete_absent_country_is_a_noop() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());

        storage.delete_country("france");

        assert_eq!(1, storage.get_all_countries().len());
    }

    #[test]
    fn random_id_on_empty_storage_fails() {
        let storage = CountriesStorage::new();
        assert_eq!(
            Err(StoreError::NoCountriesAvailable),
            storage.get_random_country_id()
        );
    }

    #[test]
    fn random_id_on_single_entry_returns_that_key() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());

        assert_eq!(Ok("greece".to_string()), storage.get_random_country_id());
    }

    #[test]
    fn random_id_comes_from_the_stored_keys() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());
        storage.add_country(spain());

        for _ in 0..20 {
            let id = storage.get_random_country_id().unwrap();
            assert!(id == "greece" || id == "spain", "unexpected id {id}");
        }
    }

    #[test]
    fn random_id_never_returns_a_deleted_key() {
        let storage = CountriesStorage::new();
        storage.add_country(greece());
        storage.add_country(spain());
        storage.delete_country("greece");

        for _ in 0..20 {
            assert_eq!(Ok("spain".to_string()), storage.get_random_country_id());
        }
    }

    #[test]
    fn concurrent_adds_with_distinct_keys_lose_nothing() {
        let storage = Arc::new(CountriesStorage::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    storage.add_country(Country {
                        name: format!("Country-{i}"),
                        ..Country::default()
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let names: HashSet<String> = storage
            .get_all_countries()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(16, names.len());
        for i in 0..16 {
            assert!(names.contains(&format!("Country-{i}")));
        }
    }

    #[test]
    fn concurrent_adds_and_deletes_leave_exactly_the_surviving_set() {
        let storage = Arc::new(CountriesStorage::new());
        for i in 0..8 {
            storage.add_country(Country {
                name: format!("Stale-{i}"),
                ..Country::default()
            });
        }

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    storage.delete_country(&format!("stale-{i}"));
                    storage.add_country(Country {
                        name: format!("Fresh-{i}"),
                        ..Country::default()
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let names: HashSet<String> = storage
            .get_all_countries()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(8, names.len());
        for i in 0..8 {
            assert!(names.contains(&format!("Fresh-{i}")));
        }
    }
}
