use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::status::ApplicationStatus;

pub use crate::model::level::Level;

/// Whether the applicant lives inside the school's service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceArea {
    #[default]
    Inside,
    Outside,
}

impl ServiceArea {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ServiceArea::Inside => "in",
            ServiceArea::Outside => "out",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "out" => ServiceArea::Outside,
            _ => ServiceArea::Inside,
        }
    }

    pub fn thai_name(&self) -> &'static str {
        match self {
            ServiceArea::Inside => "ในเขตพื้นที่บริการ",
            ServiceArea::Outside => "นอกเขตพื้นที่บริการ",
        }
    }
}

/// Where the applicant currently studies. For M4 `Internal` means the
/// school's own M3 graduates; for M1 it distinguishes still-enrolled from
/// already-graduated applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentType {
    Internal,
    #[default]
    External,
}

impl StudentType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            StudentType::Internal => "internal",
            StudentType::External => "external",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "internal" => StudentType::Internal,
            _ => StudentType::External,
        }
    }
}

/// Track family the applicant is applying into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackKind {
    Special,
    #[default]
    Regular,
}

impl TrackKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            TrackKind::Special => "special",
            TrackKind::Regular => "regular",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "special" => TrackKind::Special,
            _ => TrackKind::Regular,
        }
    }

    pub fn thai_name(&self) -> &'static str {
        match self {
            TrackKind::Special => "ห้องเรียนพิเศษ",
            TrackKind::Regular => "ห้องเรียนปกติ",
        }
    }
}

macro_rules! wire_enum_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.wire_name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Ok(<$ty>::from_wire(&raw))
            }
        }
    };
}

wire_enum_serde!(ServiceArea);
wire_enum_serde!(StudentType);
wire_enum_serde!(TrackKind);

/// Postal address of the applicant's household.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub house_no: String,
    pub village: String,
    #[serde(deserialize_with = "lenient_string")]
    pub moo: String,
    pub sub_district: String,
    pub district: String,
    pub province: String,
    #[serde(deserialize_with = "lenient_string")]
    pub zip_code: String,
}

/// Current or previous school record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub student_type: StudentType,
    pub school_name: String,
    pub school_district: String,
    pub school_province: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gpa: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sub_gpa: String,
    pub sub_gpa_subject: String,
    pub m3_room: String,
}

/// An extra document beyond the fixed slots, e.g. a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtraFile {
    pub name: String,
    pub url: String,
}

/// Uploaded documents. Each fixed slot holds either a `data:image` URL
/// fresh from the browser, a plain URL echoed back by the sheet, or the
/// `UPLOADED` marker left behind once the payload has been stripped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSlots {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_reg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_back: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_slip: Option<String>,
    pub additional: Vec<ExtraFile>,
}

/// One admission application, as stored in the cache and on the sheet.
///
/// Rows coming back from the Apps Script endpoint are only loosely typed:
/// numeric-looking cells may arrive as JSON numbers and enum cells may carry
/// labels this build no longer writes. Deserialization therefore never
/// rejects a row; odd scalars are restrung and odd labels fall back to the
/// default variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// Human-facing running number, e.g. `M1-2567-0001`.
    pub id: String,
    /// Stable machine identity, assigned once when the form opens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub level: Level,
    pub status: ApplicationStatus,
    /// ISO timestamp of the moment the form was opened.
    pub submit_date: String,
    pub service_area: ServiceArea,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub national_id: String,
    pub birth_date: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub age: u32,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    pub father_name: String,
    pub mother_name: String,
    pub guardian_name: String,
    pub address: Address,
    pub education: Education,
    pub track: String,
    pub track_type: TrackKind,
    pub talents: String,
    pub special_needs: String,
    pub files: FileSlots,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ApplicationRecord {
    /// Full name with the title glued to the first name, Thai style.
    pub fn display_name(&self) -> String {
        format!("{}{} {}", self.title, self.first_name, self.last_name)
    }

    /// Identity test used for upserts. Two records are the same application
    /// when their `uid`s match; rows predating the `uid` field compare by
    /// display id instead.
    pub fn same_application(&self, other: &ApplicationRecord) -> bool {
        match (&self.uid, &other.uid) {
            (Some(a), Some(b)) => a == b,
            _ => !self.id.is_empty() && self.id == other.id,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0) as u32,
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_row_with_numeric_cells_parses() {
        let raw = r#"{
            "id": "M1-2567-0002",
            "level": "ม.1",
            "status": "รอตรวจสอบ",
            "nationalId": 1103700209611,
            "age": "14",
            "phone": 812345678,
            "address": { "moo": 7, "zipCode": 43110 },
            "education": { "gpa": 3.75 }
        }"#;
        let record: ApplicationRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.national_id, "1103700209611");
        assert_eq!(record.age, 14);
        assert_eq!(record.phone, "812345678");
        assert_eq!(record.address.moo, "7");
        assert_eq!(record.address.zip_code, "43110");
        assert_eq!(record.education.gpa, "3.75");
        assert_eq!(record.level, Level::M1);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_defaults() {
        let raw = r#"{
            "id": "X",
            "level": "ม.9",
            "status": "confirmed",
            "serviceArea": "somewhere",
            "trackType": "vip"
        }"#;
        let record: ApplicationRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.level, Level::M1);
        assert_eq!(record.status, ApplicationStatus::Pending);
        assert_eq!(record.service_area, ServiceArea::Inside);
        assert_eq!(record.track_type, TrackKind::Regular);
    }

    #[test]
    fn test_serializes_camel_case_wire_names() {
        let mut record = ApplicationRecord::default();
        record.first_name = "สมชาย".to_string();
        record.admin_note = Some("ok".to_string());
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("firstName"));
        assert!(obj.contains_key("nationalId"));
        assert!(obj.contains_key("trackType"));
        assert!(obj.contains_key("adminNote"));
        assert_eq!(value["serviceArea"], "in");
        assert_eq!(value["education"]["studentType"], "external");
    }

    #[test]
    fn test_absent_optionals_stay_off_the_wire() {
        let record = ApplicationRecord::default();
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("adminNote"));
        assert!(!obj.contains_key("updatedAt"));
        assert!(!obj.contains_key("uid"));
        assert!(!value["files"].as_object().unwrap().contains_key("photo"));
    }

    #[test]
    fn test_same_application_prefers_uid_over_display_id() {
        let mut a = ApplicationRecord::default();
        a.id = "M1-2567-0001".to_string();
        a.uid = Some("u-1".to_string());
        let mut b = a.clone();
        b.id = "M1-2567-0099".to_string();
        assert!(a.same_application(&b));

        b.uid = Some("u-2".to_string());
        assert!(!a.same_application(&b));

        a.uid = None;
        b.uid = None;
        b.id = a.id.clone();
        assert!(a.same_application(&b));
    }

    #[test]
    fn test_display_name_glues_title_to_first_name() {
        let mut record = ApplicationRecord::default();
        record.title = "เด็กชาย".to_string();
        record.first_name = "สมชาย".to_string();
        record.last_name = "ใจดี".to_string();
        assert_eq!(record.display_name(), "เด็กชายสมชาย ใจดี");
    }
}
