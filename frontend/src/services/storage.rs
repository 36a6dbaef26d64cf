//! Bridge between the shared cache engine and the browser.
//!
//! Two stores back the app: `localStorage` as the always-available cache and
//! a Google Apps Script endpoint in front of the admission spreadsheet as
//! the authoritative copy. Reads prefer the sheet and fall back to the
//! cache; writes go to both, and the remote half is fire-and-forget because
//! the endpoint is called in `no-cors` mode and never yields a readable
//! response.

use gloo_console::{error, log, warn};
use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestMode;

use common::model::application::ApplicationRecord;
use common::model::settings::SystemSettings;
use common::store::{AdmissionStore, StorageBackend, StoreError, WriteOutcome};

/// Deployed Apps Script endpoint in front of the admission sheet.
const SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbzQ0b7EHYO6JfgyCaSO5pMCqtxxTvf9IPAQdcQFAn853WriWBskM9jCLVM_RZGPWm7aRQ/exec";

/// `localStorage` as a [`StorageBackend`].
pub struct LocalStorageBackend;

fn raw_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match raw_storage() {
            Some(storage) => storage
                .get_item(key)
                .map_err(|_| StoreError::Backend("localStorage read rejected".to_string())),
            None => Err(StoreError::Backend("localStorage unavailable".to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match raw_storage() {
            // Browsers throw a DOMException when the origin's quota is hit;
            // that is the only failure a present localStorage produces here.
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|_| StoreError::QuotaExceeded),
            None => Err(StoreError::Backend("localStorage unavailable".to_string())),
        }
    }
}

/// The cache engine over `localStorage`.
pub fn local_store() -> AdmissionStore<LocalStorageBackend> {
    AdmissionStore::new(LocalStorageBackend)
}

/// Logs how a cache write ended. Degraded outcomes are survivable (the
/// sheet keeps the full copy) but worth a trace.
pub fn note_cache_outcome(context: &str, result: Result<WriteOutcome, StoreError>) {
    match result {
        Ok(WriteOutcome::Stored) => {}
        Ok(WriteOutcome::StoredStripped) => {
            warn!(format!("cache near quota, stored stripped list ({context})"))
        }
        Ok(WriteOutcome::Dropped) => {
            error!(format!("cache full, write dropped ({context})"))
        }
        Err(err) => error!(format!("cache write failed ({context}): {err}")),
    }
}

/// Fetches the sheet snapshot without touching the cache. `None` when the
/// endpoint is unreachable or returns something other than a record array.
pub async fn fetch_remote_records() -> Option<Vec<ApplicationRecord>> {
    // cache-busting timestamp, Apps Script GETs are otherwise cached hard
    let url = format!("{}?action=read&t={}", SCRIPT_URL, js_sys::Date::now() as u64);
    match Request::get(&url).send().await {
        Ok(resp) if resp.status() == 200 => match resp.json::<Vec<ApplicationRecord>>().await {
            Ok(records) => Some(records),
            Err(err) => {
                warn!(format!("sheet payload was not a record array: {err}"));
                None
            }
        },
        Ok(resp) => {
            warn!(format!("sheet read returned status {}", resp.status()));
            None
        }
        Err(err) => {
            log!(format!("sheet unreachable, using cache: {err}"));
            None
        }
    }
}

/// The read-all path: on success the remote snapshot wholesale replaces the
/// cached list and is returned; on any failure the cache is returned
/// untouched. The two copies are never merged.
pub async fn fetch_applications() -> Vec<ApplicationRecord> {
    match fetch_remote_records().await {
        Some(records) => {
            note_cache_outcome("snapshot", local_store().replace_applications(&records));
            records
        }
        None => local_store().applications(),
    }
}

#[derive(Serialize)]
struct RecordEnvelope<'a> {
    #[serde(flatten)]
    record: &'a ApplicationRecord,
    action: &'static str,
}

#[derive(Serialize)]
struct DeleteEnvelope<'a> {
    id: &'a str,
    action: &'static str,
}

async fn post_envelope(body: String) -> bool {
    // text/plain keeps the request preflight-free; no-cors means the
    // response is opaque, so queuing successfully is the only signal.
    let request = Request::post(SCRIPT_URL)
        .mode(RequestMode::NoCors)
        .header("Content-Type", "text/plain")
        .body(body);
    match request {
        Ok(request) => match request.send().await {
            Ok(_) => true,
            Err(err) => {
                error!(format!("sheet write failed to queue: {err}"));
                false
            }
        },
        Err(err) => {
            error!(format!("sheet write could not be built: {err}"));
            false
        }
    }
}

/// Sends one record to the sheet under `action: update`. Returns whether
/// the request was handed to the network.
pub async fn sync_record(record: &ApplicationRecord) -> bool {
    let envelope = RecordEnvelope { record, action: "update" };
    match serde_json::to_string(&envelope) {
        Ok(body) => post_envelope(body).await,
        Err(err) => {
            error!(format!("record failed to serialize: {err}"));
            false
        }
    }
}

/// Asks the sheet to drop the row with this display id.
pub async fn sync_delete(id: &str) -> bool {
    let envelope = DeleteEnvelope { id, action: "delete" };
    match serde_json::to_string(&envelope) {
        Ok(body) => post_envelope(body).await,
        Err(err) => {
            error!(format!("delete failed to serialize: {err}"));
            false
        }
    }
}

/// Cached settings, or defaults. Settings never leave the device.
pub fn load_settings() -> SystemSettings {
    local_store().settings()
}

pub fn save_settings(settings: &SystemSettings) {
    if let Err(err) = local_store().save_settings(settings) {
        error!(format!("settings write failed: {err}"));
    }
}
