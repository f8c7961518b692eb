pub mod directory;
pub mod error;
pub mod id;
pub mod storage;

pub use directory::{DirectoryStore, STORAGE_KEY};
pub use error::StoreError;
pub use id::{generate_doctor_id, new_doctor_id};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
