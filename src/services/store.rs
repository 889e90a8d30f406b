// src/services/store.rs

//! Faculty list synchronization against the remote API.
//!
//! The store owns the authoritative local view of the directory. Writes are
//! pessimistic: a mutation is never applied locally, it is reflected through
//! the re-fetch issued once the server confirms the mutation. The server is
//! truth for the final state.

use crate::api::FacultyApi;
use crate::error::{AppError, Result};
use crate::models::FacultyRecord;

/// Authoritative local view of the faculty list.
///
/// All operations take `&mut self`, so one mutation is in flight at a time.
pub struct FacultyStore<A: FacultyApi> {
    api: A,
    members: Vec<FacultyRecord>,
    last_error: Option<String>,
}

impl<A: FacultyApi> FacultyStore<A> {
    /// Create an empty store backed by the given API client.
    pub fn new(api: A) -> Self {
        Self {
            api,
            members: Vec::new(),
            last_error: None,
        }
    }

    /// Records currently known to the store, in server order.
    pub fn members(&self) -> &[FacultyRecord] {
        &self.members
    }

    /// Error description from the most recent failed operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the local list with the server's current state.
    ///
    /// On failure the list is cleared rather than left stale.
    pub async fn load(&mut self) -> Result<()> {
        self.last_error = None;

        match self.api.fetch_all().await {
            Ok(records) => {
                log::debug!("Loaded {} faculty records", records.len());
                self.members = records;
                Ok(())
            }
            Err(error) => {
                self.members.clear();
                Err(self.record_error(error))
            }
        }
    }

    /// Submit a new record, then refresh the list from the server.
    ///
    /// Rejects locally, without issuing a request, when a required field is
    /// missing.
    pub async fn create(&mut self, record: &FacultyRecord) -> Result<()> {
        self.last_error = None;

        if let Err(error) = record.validate() {
            return Err(self.record_error(error));
        }
        if let Err(error) = self.api.create(record).await {
            return Err(self.record_error(error));
        }

        log::info!("Created faculty member: {}", record.name);
        self.load().await
    }

    /// Replace the record stored under `id`, then refresh the list.
    pub async fn update(&mut self, id: &str, record: &FacultyRecord) -> Result<()> {
        self.last_error = None;

        if let Err(error) = record.validate() {
            return Err(self.record_error(error));
        }
        if let Err(error) = self.api.update(id, record).await {
            return Err(self.record_error(error));
        }

        log::info!("Updated faculty member: {id}");
        self.load().await
    }

    /// Delete the record stored under `id`, then refresh the list.
    ///
    /// On failure the local list is left unchanged.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.last_error = None;

        if let Err(error) = self.api.remove(id).await {
            return Err(self.record_error(error));
        }

        log::info!("Deleted faculty member: {id}");
        self.load().await
    }

    /// Look up a record by its server identifier.
    pub fn find(&self, id: &str) -> Option<&FacultyRecord> {
        self.members.iter().find(|m| m.id.as_deref() == Some(id))
    }

    /// Unique non-empty specialization values, in first-seen order.
    pub fn specializations(&self) -> Vec<&str> {
        specializations(&self.members)
    }

    /// Records matching the given specialization, or all records for `None`.
    pub fn filter_by_specialization(&self, specialization: Option<&str>) -> Vec<&FacultyRecord> {
        filter_by_specialization(&self.members, specialization)
    }

    fn record_error(&mut self, error: AppError) -> AppError {
        self.last_error = Some(error.to_string());
        error
    }
}

/// Unique non-empty specialization values from a record list, in first-seen
/// order. Recomputed on demand; the list is mutable at runtime so there is
/// nothing to cache.
pub fn specializations(records: &[FacultyRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        let value = record.specialization.trim();
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Records matching the given specialization, or all records for `None`.
pub fn filter_by_specialization<'a>(
    records: &'a [FacultyRecord],
    specialization: Option<&str>,
) -> Vec<&'a FacultyRecord> {
    match specialization {
        Some(value) => records
            .iter()
            .filter(|r| r.specialization == value)
            .collect(),
        None => records.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    /// In-memory stand-in for the remote API.
    #[derive(Clone, Default)]
    struct MockApi {
        records: Arc<Mutex<Vec<FacultyRecord>>>,
        requests: Arc<AtomicUsize>,
        fail_message: Arc<Mutex<Option<String>>>,
        next_id: Arc<AtomicUsize>,
    }

    impl MockApi {
        fn fail_with(&self, message: &str) {
            *self.fail_message.lock().unwrap() = Some(message.to_string());
        }

        fn recover(&self) {
            *self.fail_message.lock().unwrap() = None;
        }

        fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }

        fn check_failure(&self) -> Result<()> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match self.fail_message.lock().unwrap().as_ref() {
                Some(message) => Err(AppError::api(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl FacultyApi for MockApi {
        async fn fetch_all(&self) -> Result<Vec<FacultyRecord>> {
            self.check_failure()?;
            Ok(self.records.lock().unwrap().clone())
        }

        async fn create(&self, record: &FacultyRecord) -> Result<Option<FacultyRecord>> {
            self.check_failure()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let mut stored = record.clone();
            stored.id = Some(format!("f{id}"));
            self.records.lock().unwrap().push(stored.clone());
            Ok(Some(stored))
        }

        async fn update(&self, id: &str, record: &FacultyRecord) -> Result<Option<FacultyRecord>> {
            self.check_failure()?;
            let mut records = self.records.lock().unwrap();
            let existing = records
                .iter_mut()
                .find(|r| r.id.as_deref() == Some(id))
                .ok_or_else(|| AppError::api("Faculty member not found"))?;

            let mut stored = record.clone();
            stored.id = Some(id.to_string());
            *existing = stored.clone();
            Ok(Some(stored))
        }

        async fn remove(&self, id: &str) -> Result<()> {
            self.check_failure()?;
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id.as_deref() != Some(id));
            if records.len() == before {
                return Err(AppError::api("Faculty member not found"));
            }
            Ok(())
        }
    }

    fn sample_record(name: &str, specialization: &str) -> FacultyRecord {
        FacultyRecord {
            name: name.to_string(),
            email: format!("{}@cst.edu", name.to_lowercase().replace(' ', ".")),
            specialization: specialization.to_string(),
            ..FacultyRecord::default()
        }
    }

    #[tokio::test]
    async fn create_then_load_assigns_identifier() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api);

        store
            .create(&sample_record("Dr. Kim", "AI"))
            .await
            .unwrap();

        assert_eq!(store.members().len(), 1);
        let id = store.members()[0].id.as_deref().unwrap();
        assert!(!id.is_empty());
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn create_rejects_missing_name_without_a_request() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api.clone());

        let mut record = sample_record("Dr. Kim", "AI");
        record.name = String::new();

        let error = store.create(&record).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(api.request_count(), 0);
        assert!(store.members().is_empty());
        assert!(store.last_error().is_some());
    }

    #[tokio::test]
    async fn load_failure_clears_list_and_surfaces_message() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api.clone());

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        assert_eq!(store.members().len(), 1);

        api.fail_with("db down");
        let error = store.load().await.unwrap_err();

        assert_eq!(error.to_string(), "db down");
        assert!(store.members().is_empty());
        assert_eq!(store.last_error(), Some("db down"));
    }

    #[tokio::test]
    async fn failed_create_leaves_list_unchanged() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api.clone());

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        api.fail_with("write refused");

        let error = store.create(&sample_record("Dr. Lee", "ML")).await.unwrap_err();
        assert_eq!(error.to_string(), "write refused");
        assert_eq!(store.members().len(), 1);
        assert_eq!(store.members()[0].name, "Dr. Kim");
    }

    #[tokio::test]
    async fn failed_operation_is_retryable() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api.clone());

        api.fail_with("db down");
        assert!(store.create(&sample_record("Dr. Kim", "AI")).await.is_err());

        api.recover();
        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        assert_eq!(store.members().len(), 1);
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api);

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        let id = store.members()[0].id.clone().unwrap();

        let mut revised = sample_record("Dr. Kim", "Machine Learning");
        revised.office = "Room 301".to_string();

        store.update(&id, &revised).await.unwrap();
        store.update(&id, &revised).await.unwrap();

        assert_eq!(store.members().len(), 1);
        let stored = store.find(&id).unwrap();
        assert_eq!(stored.specialization, "Machine Learning");
        assert_eq!(stored.office, "Room 301");
    }

    #[tokio::test]
    async fn delete_then_load_removes_record() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api);

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        store.create(&sample_record("Dr. Lee", "ML")).await.unwrap();
        let id = store.members()[0].id.clone().unwrap();

        store.delete(&id).await.unwrap();

        assert_eq!(store.members().len(), 1);
        assert!(store.find(&id).is_none());
    }

    #[tokio::test]
    async fn delete_failure_leaves_list_unchanged() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api.clone());

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        api.fail_with("db down");

        let id = store.members()[0].id.clone().unwrap();
        assert!(store.delete(&id).await.is_err());
        assert_eq!(store.members().len(), 1);
    }

    #[tokio::test]
    async fn specializations_are_unique_and_first_seen_ordered() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api);

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        store.create(&sample_record("Dr. Lee", "ML")).await.unwrap();
        store.create(&sample_record("Dr. Park", "AI")).await.unwrap();
        store.create(&sample_record("Dr. Choi", "")).await.unwrap();

        assert_eq!(store.specializations(), vec!["AI", "ML"]);
    }

    #[tokio::test]
    async fn filter_matches_specialization_or_returns_all() {
        let api = MockApi::default();
        let mut store = FacultyStore::new(api);

        store.create(&sample_record("Dr. Kim", "AI")).await.unwrap();
        store.create(&sample_record("Dr. Lee", "ML")).await.unwrap();

        assert_eq!(store.filter_by_specialization(Some("AI")).len(), 1);
        assert_eq!(store.filter_by_specialization(Some("Databases")).len(), 0);
        assert_eq!(store.filter_by_specialization(None).len(), 2);
    }
}
