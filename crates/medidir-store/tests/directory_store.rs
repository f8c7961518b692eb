//! Integration tests for `DirectoryStore` load reconciliation and mutation.

use medidir_core::{Doctor, NewDoctor};
use medidir_store::{DirectoryStore, FileStorage, KeyValueStorage, MemoryStorage, STORAGE_KEY};

fn seed_doctor(id: &str, specialty: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: format!("Dr. Seed {id}"),
        specialty: specialty.to_string(),
        sub_specialty: None,
        experience: 12,
        rating: 4.8,
        availability: vec!["Mon".to_string(), "Wed".to_string()],
        image: "https://images.example/seed.jpg".to_string(),
        summary: None,
        overview: None,
        expertise: None,
        qualification: None,
        profile_url: None,
    }
}

fn seed(count: usize) -> Vec<Doctor> {
    (1..=count)
        .map(|i| seed_doctor(&i.to_string(), "Cardiology"))
        .collect()
}

fn new_doctor(name: &str) -> NewDoctor {
    NewDoctor {
        name: name.to_string(),
        specialty: "Neurology".to_string(),
        sub_specialty: Some("Epilepsy".to_string()),
        experience: 7,
        rating: 0.0,
        availability: vec!["Mon".to_string(), "Tue".to_string()],
        image: "https://images.example/new.jpg".to_string(),
        summary: Some("Neurologist focused on seizure care.".to_string()),
        overview: None,
        expertise: None,
        qualification: None,
        profile_url: Some("https://www.linqmd.com/doctor/jane-roe".to_string()),
    }
}

fn stored(storage: &impl KeyValueStorage) -> Vec<Doctor> {
    let raw = storage
        .get(STORAGE_KEY)
        .expect("storage readable")
        .expect("key present");
    serde_json::from_str(&raw).expect("stored value is a doctor list")
}

// ---------------------------------------------------------------------------
// load reconciliation
// ---------------------------------------------------------------------------

#[test]
fn shorter_stored_list_is_replaced_by_seed_and_written_back() {
    let two = serde_json::to_string(&vec![
        seed_doctor("a", "Dermatology"),
        seed_doctor("b", "Dermatology"),
    ])
    .unwrap();
    let storage = MemoryStorage::new().with_entry(STORAGE_KEY, two);

    let store = DirectoryStore::load(storage, seed(5)).unwrap();

    assert_eq!(store.doctors().len(), 5);
    assert_eq!(store.doctors()[0].id, "1");
    let persisted = stored(store.storage());
    assert_eq!(persisted, seed(5));
}

#[test]
fn equal_or_longer_stored_list_is_kept() {
    let mut six = seed(5);
    six.push(seed_doctor("doctor-1-abc", "Neurology"));
    let storage =
        MemoryStorage::new().with_entry(STORAGE_KEY, serde_json::to_string(&six).unwrap());

    let store = DirectoryStore::load(storage, seed(5)).unwrap();

    assert_eq!(store.doctors().len(), 6);
    assert_eq!(store.doctors()[5].specialty, "Neurology");
}

#[test]
fn stored_list_of_other_doctors_with_same_length_is_kept() {
    let others: Vec<Doctor> = (1..=3)
        .map(|i| seed_doctor(&format!("x{i}"), "Pediatrics"))
        .collect();
    let storage =
        MemoryStorage::new().with_entry(STORAGE_KEY, serde_json::to_string(&others).unwrap());

    let store = DirectoryStore::load(storage, seed(3)).unwrap();

    assert!(store.doctors().iter().all(|d| d.specialty == "Pediatrics"));
}

#[test]
fn unparseable_stored_value_falls_back_to_seed() {
    let storage = MemoryStorage::new().with_entry(STORAGE_KEY, "{not json");

    let store = DirectoryStore::load(storage, seed(2)).unwrap();

    assert_eq!(store.doctors(), seed(2).as_slice());
    // The corrupt value is left alone until the next mutation.
    assert_eq!(
        store.storage().get(STORAGE_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn stored_records_without_rating_still_load() {
    let raw = r#"[{"id":"1","name":"Dr. A","specialty":"Cardiology","experience":3,
                   "availability":["Mon"],"image":"https://i.example/a.jpg"}]"#;
    let storage = MemoryStorage::new().with_entry(STORAGE_KEY, raw);

    let store = DirectoryStore::load(storage, seed(1)).unwrap();

    assert_eq!(store.doctors()[0].name, "Dr. A");
    assert!(store.doctors()[0].rating.abs() < f32::EPSILON);
}

// ---------------------------------------------------------------------------
// mutation
// ---------------------------------------------------------------------------

#[test]
fn add_assigns_id_and_persists_full_list() {
    let mut store = DirectoryStore::load(MemoryStorage::new(), seed(2)).unwrap();

    let added = store.add(new_doctor("Dr. Jane Roe")).unwrap();

    assert!(added.id.starts_with("doctor-"), "id: {}", added.id);
    assert_eq!(added.id.rsplit('-').next().map(str::len), Some(9));
    assert_eq!(added.name, "Dr. Jane Roe");
    assert_eq!(store.doctors().len(), 3);
    assert_eq!(store.get(&added.id), Some(&added));

    let persisted = stored(store.storage());
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted[2], added);
}

#[test]
fn added_doctors_get_distinct_ids() {
    let mut store = DirectoryStore::load(MemoryStorage::new(), seed(1)).unwrap();
    let a = store.add(new_doctor("Dr. A")).unwrap();
    let b = store.add(new_doctor("Dr. B")).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn remove_persists_and_reports_presence() {
    let mut store = DirectoryStore::load(MemoryStorage::new(), seed(3)).unwrap();

    assert!(store.remove("2").unwrap());
    assert!(!store.remove("2").unwrap());
    assert!(!store.remove("missing").unwrap());

    let ids: Vec<&str> = store.doctors().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
    let persisted = stored(store.storage());
    assert_eq!(persisted.len(), 2);
}

#[test]
fn removal_below_seed_size_resets_on_next_load() {
    let mut store = DirectoryStore::load(MemoryStorage::new(), seed(3)).unwrap();
    store.remove("1").unwrap();
    let storage = store.storage().clone();

    let reloaded = DirectoryStore::load(storage, seed(3)).unwrap();

    assert_eq!(reloaded.doctors().len(), 3);
    assert!(reloaded.get("1").is_some());
}

// ---------------------------------------------------------------------------
// file-backed storage
// ---------------------------------------------------------------------------

#[test]
fn file_storage_survives_reopen() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    let added = {
        let storage = FileStorage::new(dir.path()).unwrap();
        let mut store = DirectoryStore::load(storage, seed(2)).unwrap();
        store.add(new_doctor("Dr. Jane Roe")).unwrap()
    };

    let storage = FileStorage::new(dir.path()).unwrap();
    assert!(dir.path().join("hospitalDoctors.json").exists());
    let store = DirectoryStore::load(storage, seed(2)).unwrap();

    assert_eq!(store.doctors().len(), 3);
    assert_eq!(store.get(&added.id), Some(&added));
}
