pub mod memory;

use thiserror::Error;

use crate::files::strip_attachments;
use crate::model::application::ApplicationRecord;
use crate::model::level::Level;
use crate::model::settings::SystemSettings;

/// Cache key for the application list.
pub const APPS_KEY: &str = "thabo_admission_apps_v2";
/// Cache key for the site settings blob.
pub const SETTINGS_KEY: &str = "thabo_admission_settings_v2";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Key-value string storage. The browser build wraps `localStorage`; tests
/// use [`memory::MemoryBackend`].
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// What became of a cache write after the quota policy ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Stored,
    /// The full payload did not fit, so inline images were stripped from
    /// every record and the smaller list was stored instead.
    StoredStripped,
    /// Even the stripped list did not fit. The cache keeps whatever it held
    /// before; the sheet remains the only complete copy.
    Dropped,
}

/// The application cache.
///
/// Reads never fail: a missing or unparseable entry is an empty list (or
/// default settings), since the sheet can always repopulate it. Writes run
/// a two-step quota policy, see [`WriteOutcome`].
pub struct AdmissionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> AdmissionStore<B> {
    pub fn new(backend: B) -> Self {
        AdmissionStore { backend }
    }

    /// Every cached application, oldest first in insertion order.
    pub fn applications(&self) -> Vec<ApplicationRecord> {
        match self.backend.get(APPS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Replaces the whole cached list, e.g. with a fresh sheet snapshot.
    pub fn replace_applications(
        &mut self,
        records: &[ApplicationRecord],
    ) -> Result<WriteOutcome, StoreError> {
        self.write_applications(records)
    }

    /// Inserts `record`, or replaces the row for the same application
    /// (matched by `uid`, display id for legacy rows).
    pub fn save_application(
        &mut self,
        record: &ApplicationRecord,
    ) -> Result<WriteOutcome, StoreError> {
        let mut apps = self.applications();
        match apps.iter_mut().find(|a| a.same_application(record)) {
            Some(slot) => *slot = record.clone(),
            None => apps.push(record.clone()),
        }
        self.write_applications(&apps)
    }

    /// Removes the row with display id `id`, if cached.
    pub fn delete_application(&mut self, id: &str) -> Result<WriteOutcome, StoreError> {
        let mut apps = self.applications();
        apps.retain(|a| a.id != id);
        self.write_applications(&apps)
    }

    fn write_applications(
        &mut self,
        records: &[ApplicationRecord],
    ) -> Result<WriteOutcome, StoreError> {
        let payload = serde_json::to_string(records)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        match self.backend.set(APPS_KEY, &payload) {
            Ok(()) => return Ok(WriteOutcome::Stored),
            Err(StoreError::QuotaExceeded) => {}
            Err(other) => return Err(other),
        }

        let stripped: Vec<ApplicationRecord> =
            records.iter().map(strip_attachments).collect();
        let payload = serde_json::to_string(&stripped)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        match self.backend.set(APPS_KEY, &payload) {
            Ok(()) => Ok(WriteOutcome::StoredStripped),
            Err(StoreError::QuotaExceeded) => Ok(WriteOutcome::Dropped),
            Err(other) => Err(other),
        }
    }

    /// Cached settings, or the defaults when nothing usable is stored.
    pub fn settings(&self) -> SystemSettings {
        match self.backend.get(SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => SystemSettings::default(),
        }
    }

    pub fn save_settings(&mut self, settings: &SystemSettings) -> Result<(), StoreError> {
        let payload = serde_json::to_string(settings)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        self.backend.set(SETTINGS_KEY, &payload)
    }

    /// Next free display id for `level` in the given Buddhist year, one past
    /// the highest sequence already cached, so deleted rows never cause a
    /// number to be handed out twice.
    pub fn next_display_id(&self, level: Level, buddhist_year: u32) -> String {
        let prefix = format!("{}-{}-", level.id_prefix(), buddhist_year);
        let highest = self
            .applications()
            .iter()
            .filter(|r| r.level == level)
            .filter_map(|r| r.id.strip_prefix(&prefix))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:04}", prefix, highest + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryBackend;
    use super::*;

    fn record(id: &str, uid: Option<&str>) -> ApplicationRecord {
        let mut r = ApplicationRecord::default();
        r.id = id.to_string();
        r.uid = uid.map(str::to_string);
        r.first_name = "สมชาย".to_string();
        r
    }

    fn store() -> AdmissionStore<MemoryBackend> {
        AdmissionStore::new(MemoryBackend::new())
    }

    #[test]
    fn test_empty_cache_reads_as_empty_list() {
        assert!(store().applications().is_empty());
    }

    #[test]
    fn test_save_then_read_round_trip() {
        let mut store = store();
        let r = record("M1-2567-0001", Some("u-1"));
        assert!(matches!(store.save_application(&r), Ok(WriteOutcome::Stored)));
        assert_eq!(store.applications(), vec![r]);
    }

    #[test]
    fn test_save_upserts_by_uid_even_when_display_id_changes() {
        let mut store = store();
        let r = record("M1-2567-0001", Some("u-1"));
        store.save_application(&r).unwrap();

        let mut renumbered = r.clone();
        renumbered.id = "M1-2567-0009".to_string();
        renumbered.first_name = "สมหญิง".to_string();
        store.save_application(&renumbered).unwrap();

        let apps = store.applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].id, "M1-2567-0009");
        assert_eq!(apps[0].first_name, "สมหญิง");
    }

    #[test]
    fn test_save_upserts_legacy_rows_by_display_id() {
        let mut store = store();
        store.save_application(&record("M1-2567-0001", None)).unwrap();

        let mut edited = record("M1-2567-0001", None);
        edited.first_name = "แก้ไข".to_string();
        store.save_application(&edited).unwrap();

        let apps = store.applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].first_name, "แก้ไข");
    }

    #[test]
    fn test_delete_removes_only_the_named_row() {
        let mut store = store();
        store.save_application(&record("M1-2567-0001", Some("u-1"))).unwrap();
        store.save_application(&record("M4-2567-0001", Some("u-2"))).unwrap();
        store.delete_application("M1-2567-0001").unwrap();

        let apps = store.applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].id, "M4-2567-0001");
    }

    #[test]
    fn test_corrupt_cache_entry_reads_as_empty_list() {
        let mut backend = MemoryBackend::new();
        backend.set(APPS_KEY, "not json").unwrap();
        assert!(AdmissionStore::new(backend).applications().is_empty());
    }

    #[test]
    fn test_quota_pressure_strips_inline_images_and_stores() {
        let mut r = record("M1-2567-0001", Some("u-1"));
        r.files.photo = Some(format!("data:image/jpeg;base64,{}", "A".repeat(8000)));
        r.files.transcript = Some("https://drive.google.com/d/x".to_string());

        let stripped_len = serde_json::to_string(&vec![crate::files::strip_attachments(&r)])
            .unwrap()
            .len();
        let capacity = APPS_KEY.len() + stripped_len;
        let mut store = AdmissionStore::new(MemoryBackend::with_capacity_bytes(capacity));

        assert!(matches!(
            store.save_application(&r),
            Ok(WriteOutcome::StoredStripped)
        ));
        let apps = store.applications();
        assert_eq!(apps[0].files.photo.as_deref(), Some("UPLOADED"));
        assert_eq!(
            apps[0].files.transcript.as_deref(),
            Some("https://drive.google.com/d/x")
        );
    }

    #[test]
    fn test_hopeless_quota_keeps_previous_cache_content() {
        let first = record("M1-2567-0001", Some("u-1"));
        let first_len = serde_json::to_string(&vec![first.clone()]).unwrap().len();
        let capacity = APPS_KEY.len() + first_len;
        let mut store = AdmissionStore::new(MemoryBackend::with_capacity_bytes(capacity));

        assert!(matches!(store.save_application(&first), Ok(WriteOutcome::Stored)));
        let second = record("M1-2567-0002", Some("u-2"));
        assert!(matches!(
            store.save_application(&second),
            Ok(WriteOutcome::Dropped)
        ));
        assert_eq!(store.applications(), vec![first]);
    }

    #[test]
    fn test_next_display_id_starts_at_one() {
        assert_eq!(store().next_display_id(Level::M1, 2567), "M1-2567-0001");
    }

    #[test]
    fn test_next_display_id_skips_past_gaps() {
        let mut store = store();
        store.save_application(&record("M1-2567-0001", Some("u-1"))).unwrap();
        store.save_application(&record("M1-2567-0003", Some("u-3"))).unwrap();
        assert_eq!(store.next_display_id(Level::M1, 2567), "M1-2567-0004");
    }

    #[test]
    fn test_next_display_id_is_scoped_per_level_and_year() {
        let mut store = store();
        store.save_application(&record("M1-2567-0005", Some("u-1"))).unwrap();
        let mut m4 = record("M4-2567-0002", Some("u-2"));
        m4.level = Level::M4;
        store.save_application(&m4).unwrap();

        assert_eq!(store.next_display_id(Level::M4, 2567), "M4-2567-0003");
        assert_eq!(store.next_display_id(Level::M1, 2568), "M1-2568-0001");
    }

    #[test]
    fn test_settings_default_when_missing_or_corrupt() {
        let fresh = store().settings();
        assert_eq!(fresh, SystemSettings::default());

        let mut backend = MemoryBackend::new();
        backend.set(SETTINGS_KEY, "{broken").unwrap();
        assert_eq!(AdmissionStore::new(backend).settings(), SystemSettings::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let mut store = store();
        let mut settings = SystemSettings::default();
        settings.is_open = false;
        settings.school_name = "ทดสอบ".to_string();
        store.save_settings(&settings).unwrap();
        assert_eq!(store.settings(), settings);
    }
}
