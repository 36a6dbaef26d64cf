use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Review status of an application.
///
/// The wire value is the Thai label itself, so the Apps Script sheet and the
/// status chip render it without a translation table. `Rejected` covers both
/// outright rejection and returned-for-correction rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "รอตรวจสอบ",
            ApplicationStatus::Approved => "อนุมัติ",
            ApplicationStatus::Rejected => "ปฏิเสธ/แก้ไข",
        }
    }

    /// Recovers a status from its stored form. Legacy rows may carry
    /// `เอกสารไม่ถูกต้อง`, which folds into `Rejected`; anything else is
    /// treated as still pending review.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "อนุมัติ" => ApplicationStatus::Approved,
            "ปฏิเสธ/แก้ไข" | "เอกสารไม่ถูกต้อง" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ApplicationStatus::from_wire(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_doc_error_label_folds_into_rejected() {
        assert_eq!(
            ApplicationStatus::from_wire("เอกสารไม่ถูกต้อง"),
            ApplicationStatus::Rejected
        );
    }

    #[test]
    fn test_unknown_label_is_pending() {
        assert_eq!(ApplicationStatus::from_wire("???"), ApplicationStatus::Pending);
    }

    #[test]
    fn test_wire_round_trip() {
        let json = serde_json::to_string(&ApplicationStatus::Approved).unwrap();
        assert_eq!(json, "\"อนุมัติ\"");
        let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ApplicationStatus::Approved);
    }
}
