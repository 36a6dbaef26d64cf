use std::collections::HashSet;

use thiserror::Error;

use crate::model::application::ApplicationRecord;
use crate::model::settings::{RequirementMode, SystemSettings};

/// Why a submission was refused. The `Display` form is the Thai message
/// shown above the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("เลขประจำตัวประชาชนไม่ถูกต้อง (ต้องเป็นตัวเลข 13 หลัก)")]
    InvalidCitizenId,
    #[error(
        "ท่านได้ทำการสมัครเรียบร้อยแล้ว ไม่สามารถสมัครซ้ำได้ หากต้องการตรวจสอบสถานะกรุณาไปที่เมนู 'ตรวจสอบสถานะ'"
    )]
    DuplicateApplication,
    #[error("กรุณาอัปโหลดรูปถ่ายหน้าตรงของผู้สมัคร")]
    MissingPhoto,
    #[error("กรุณาแนบหลักฐานการชำระเงินค่าสมัคร")]
    MissingPaymentSlip,
    #[error("กรุณาเลือกแผนการเรียนที่ต้องการสมัคร")]
    MissingTrack,
    #[error("ไฟล์มีขนาดใหญ่เกินไป (จำกัด 2MB ต่อไฟล์)")]
    FileTooLarge,
}

/// Drops everything but ASCII digits. Sheets prefix long numbers with an
/// apostrophe and people type dashes; both disappear here.
pub fn normalize_citizen_id(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Thai citizen id check: 13 digits where the last one is the mod-11
/// checksum of the first twelve (digit i weighted by 13 - i).
pub fn citizen_id_valid(raw: &str) -> bool {
    let digits = normalize_citizen_id(raw);
    if digits.len() != 13 {
        return false;
    }
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    let sum: u32 = values[..12]
        .iter()
        .enumerate()
        .map(|(i, v)| v * (13 - i as u32))
        .sum();
    (11 - sum % 11) % 10 == values[12]
}

/// Set of citizen ids that already have an application, in normalized form.
///
/// Seeded from the cache when the form opens, widened with the remote
/// snapshot when it arrives, and consulted again at submit time.
#[derive(Debug, Clone, Default)]
pub struct DuplicateGuard {
    seen: HashSet<String>,
}

impl DuplicateGuard {
    pub fn new() -> Self {
        DuplicateGuard::default()
    }

    /// Adds every non-empty citizen id from `records`.
    pub fn absorb<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a ApplicationRecord>,
    {
        for record in records {
            let id = normalize_citizen_id(&record.national_id);
            if !id.is_empty() {
                self.seen.insert(id);
            }
        }
    }

    pub fn contains(&self, raw_id: &str) -> bool {
        self.seen.contains(&normalize_citizen_id(raw_id))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Gate run when the submit button is pressed, in the order the messages
/// should surface: citizen id, duplicate, photo, track, payment slip.
pub fn validate_submission(
    record: &ApplicationRecord,
    guard: &DuplicateGuard,
    settings: &SystemSettings,
) -> Result<(), SubmissionError> {
    if !citizen_id_valid(&record.national_id) {
        return Err(SubmissionError::InvalidCitizenId);
    }
    if guard.contains(&record.national_id) {
        return Err(SubmissionError::DuplicateApplication);
    }
    if settings.photo_mode == RequirementMode::Required && record.files.photo.is_none() {
        return Err(SubmissionError::MissingPhoto);
    }
    if record.track.is_empty() {
        return Err(SubmissionError::MissingTrack);
    }
    if settings.payment_mode == RequirementMode::Required && record.files.payment_slip.is_none() {
        return Err(SubmissionError::MissingPaymentSlip);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> ApplicationRecord {
        let mut record = ApplicationRecord::default();
        record.national_id = "1103700209611".to_string();
        record.track = "ห้องเรียนปกติ".to_string();
        record.files.photo = Some("data:image/png;base64,AAAA".to_string());
        record
    }

    #[test]
    fn test_checksum_accepts_known_good_ids() {
        assert!(citizen_id_valid("1103700209611"));
        assert!(citizen_id_valid("1101700230708"));
        assert!(citizen_id_valid("1234567890121"));
    }

    #[test]
    fn test_checksum_rejects_wrong_check_digit() {
        assert!(!citizen_id_valid("1103700209610"));
        assert!(!citizen_id_valid("1103700209619"));
    }

    #[test]
    fn test_checksum_rejects_wrong_length() {
        assert!(!citizen_id_valid(""));
        assert!(!citizen_id_valid("110370020961"));
        assert!(!citizen_id_valid("11037002096111"));
    }

    #[test]
    fn test_formatting_is_ignored_by_checksum() {
        assert!(citizen_id_valid("1-1037-00209-61-1"));
        assert!(citizen_id_valid("'1103700209611"));
        assert!(citizen_id_valid(" 1103700209611 "));
    }

    #[test]
    fn test_guard_matches_across_formatting() {
        let mut record = ApplicationRecord::default();
        record.national_id = "'1103700209611".to_string();
        let mut guard = DuplicateGuard::new();
        guard.absorb([&record]);
        assert_eq!(guard.len(), 1);
        assert!(guard.contains("1-1037-00209-61-1"));
        assert!(!guard.contains("1101700230708"));
    }

    #[test]
    fn test_guard_skips_blank_ids() {
        let blank = ApplicationRecord::default();
        let mut guard = DuplicateGuard::new();
        guard.absorb([&blank]);
        assert!(guard.is_empty());
    }

    #[test]
    fn test_submission_gate_order() {
        let settings = SystemSettings::default();
        let guard = DuplicateGuard::new();

        let mut record = valid_record();
        record.national_id = "123".to_string();
        record.track.clear();
        assert_eq!(
            validate_submission(&record, &guard, &settings),
            Err(SubmissionError::InvalidCitizenId)
        );

        let mut record = valid_record();
        record.files.photo = None;
        record.track.clear();
        assert_eq!(
            validate_submission(&record, &guard, &settings),
            Err(SubmissionError::MissingPhoto)
        );

        let mut record = valid_record();
        record.track.clear();
        assert_eq!(
            validate_submission(&record, &guard, &settings),
            Err(SubmissionError::MissingTrack)
        );

        assert_eq!(validate_submission(&valid_record(), &guard, &settings), Ok(()));
    }

    #[test]
    fn test_duplicate_blocks_resubmission() {
        let settings = SystemSettings::default();
        let record = valid_record();
        let mut guard = DuplicateGuard::new();
        guard.absorb([&record]);
        assert_eq!(
            validate_submission(&record, &guard, &settings),
            Err(SubmissionError::DuplicateApplication)
        );
    }

    #[test]
    fn test_photo_not_required_when_mode_relaxed() {
        let mut settings = SystemSettings::default();
        settings.photo_mode = RequirementMode::Optional;
        let mut record = valid_record();
        record.files.photo = None;
        assert_eq!(
            validate_submission(&record, &DuplicateGuard::new(), &settings),
            Ok(())
        );
    }

    #[test]
    fn test_payment_slip_enforced_when_required() {
        let mut settings = SystemSettings::default();
        settings.payment_mode = RequirementMode::Required;
        let record = valid_record();
        assert_eq!(
            validate_submission(&record, &DuplicateGuard::new(), &settings),
            Err(SubmissionError::MissingPaymentSlip)
        );
    }
}
