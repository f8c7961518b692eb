//! The in-process doctor directory and its persistence.

use medidir_core::{Doctor, NewDoctor};

use crate::error::StoreError;
use crate::id::new_doctor_id;
use crate::storage::KeyValueStorage;

/// Storage key holding the JSON array of doctors.
pub const STORAGE_KEY: &str = "hospitalDoctors";

/// Doctor list backed by a [`KeyValueStorage`].
///
/// Every mutation re-serializes the full list under [`STORAGE_KEY`]; the
/// last write wins.
#[derive(Debug)]
pub struct DirectoryStore<S> {
    storage: S,
    doctors: Vec<Doctor>,
}

impl<S: KeyValueStorage> DirectoryStore<S> {
    /// Load the directory, reconciling stored data against `seed`.
    ///
    /// - Key absent: the seed is used.
    /// - Stored value unparseable: the seed is used and the failure logged.
    /// - Stored list shorter than the seed: the stored list is discarded and
    ///   the seed is written back in its place.
    /// - Otherwise the stored list is used as-is.
    ///
    /// The length comparison is all that is checked, so a stored list that
    /// removed seed doctors and added fewer new ones is reset on load.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if storage cannot be read, or if the seed
    /// write-back fails.
    pub fn load(storage: S, seed: Vec<Doctor>) -> Result<Self, StoreError> {
        let mut store = Self {
            storage,
            doctors: Vec::new(),
        };

        let Some(raw) = store.storage.get(STORAGE_KEY)? else {
            tracing::info!(count = seed.len(), "no stored directory; using seed");
            store.doctors = seed;
            return Ok(store);
        };

        match serde_json::from_str::<Vec<Doctor>>(&raw) {
            Ok(stored) if stored.len() < seed.len() => {
                tracing::warn!(
                    stored = stored.len(),
                    seed = seed.len(),
                    "stored directory smaller than seed; resetting to seed"
                );
                store.doctors = seed;
                store.save()?;
            }
            Ok(stored) => {
                tracing::debug!(count = stored.len(), "loaded stored directory");
                store.doctors = stored;
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored directory is unreadable; using seed");
                store.doctors = seed;
            }
        }

        Ok(store)
    }

    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Assign a fresh id, append, and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated list cannot be persisted. The
    /// doctor stays in the in-memory list either way.
    pub fn add(&mut self, doctor: NewDoctor) -> Result<Doctor, StoreError> {
        let mut id = new_doctor_id();
        while self.get(&id).is_some() {
            id = new_doctor_id();
        }

        let doctor = doctor.with_id(id);
        tracing::info!(id = %doctor.id, name = %doctor.name, "adding doctor");
        self.doctors.push(doctor.clone());
        self.save()?;
        Ok(doctor)
    }

    /// Remove the doctor with `id`. Returns `false` when no such doctor
    /// exists; nothing is written in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated list cannot be persisted.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.doctors.len();
        self.doctors.retain(|d| d.id != id);
        if self.doctors.len() == before {
            return Ok(false);
        }

        tracing::info!(id, "removed doctor");
        self.save()?;
        Ok(true)
    }

    /// Persist the current list. An empty list is never written, so
    /// removing the last doctor leaves the previous value in storage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on serialization or storage failure.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if self.doctors.is_empty() {
            tracing::debug!("directory is empty; skipping save");
            return Ok(());
        }
        let json = serde_json::to_string(&self.doctors)?;
        self.storage.set(STORAGE_KEY, &json)
    }
}
