use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::auth;

/// How a document slot is enforced by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequirementMode {
    Required,
    #[default]
    Optional,
    Disabled,
}

impl RequirementMode {
    pub fn wire_name(&self) -> &'static str {
        match self {
            RequirementMode::Required => "บังคับอัปโหลด",
            RequirementMode::Optional => "ไม่บังคับอัปโหลด",
            RequirementMode::Disabled => "ปิดใช้งาน",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "บังคับอัปโหลด" => RequirementMode::Required,
            "ปิดใช้งาน" => RequirementMode::Disabled,
            _ => RequirementMode::Optional,
        }
    }
}

impl Serialize for RequirementMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for RequirementMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(RequirementMode::from_wire(&raw))
    }
}

/// Site configuration, kept in the browser cache only.
///
/// `admin_pass_hash` holds the MD5 digest of the staff password, never the
/// password itself. The default credentials match the handout given to the
/// registrar office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemSettings {
    pub school_name: String,
    /// Master switch for the public form.
    pub is_open: bool,
    pub start_date: String,
    pub end_date: String,
    pub photo_mode: RequirementMode,
    pub payment_mode: RequirementMode,
    /// Suggested prior schools offered while typing.
    pub schools_list: Vec<String>,
    pub additional_docs: Vec<String>,
    pub admin_user: String,
    pub admin_pass_hash: String,
    pub contact_line: String,
    pub contact_phone: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        SystemSettings {
            school_name: "โรงเรียนท่าบ่อ".to_string(),
            is_open: true,
            start_date: "2024-01-01".to_string(),
            end_date: "2025-12-31".to_string(),
            photo_mode: RequirementMode::Required,
            payment_mode: RequirementMode::Optional,
            schools_list: vec![
                "โรงเรียนท่าบ่อ".to_string(),
                "โรงเรียนอนุบาลดารณีท่าบ่อท่าบ่อ".to_string(),
                "โรงเรียนเทศบาลเมืองท่าบ่อ".to_string(),
                "โรงเรียนโกมลวิทยาคาร".to_string(),
            ],
            additional_docs: vec![
                "สำเนาทะเบียนบ้าน".to_string(),
                "สำเนาบัตรประชาชน".to_string(),
                "ใบปพ.1".to_string(),
            ],
            admin_user: "thabo".to_string(),
            admin_pass_hash: auth::password_digest("tbs@431728"),
            contact_line: "พัฒนาโดย นางชมัยพร ถิ่นสำราญ ครูชำนาญการพิเศษ โรงเรียนท่าบ่อ".to_string(),
            contact_phone: "042-431728".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_open_with_required_photo() {
        let settings = SystemSettings::default();
        assert!(settings.is_open);
        assert_eq!(settings.photo_mode, RequirementMode::Required);
        assert_eq!(settings.payment_mode, RequirementMode::Optional);
        assert_eq!(settings.admin_user, "thabo");
        // digest of the handout password, not the password itself
        assert_eq!(settings.admin_pass_hash.len(), 32);
        assert_ne!(settings.admin_pass_hash, "tbs@431728");
    }

    #[test]
    fn test_partial_saved_blob_fills_missing_fields() {
        let settings: SystemSettings =
            serde_json::from_str(r#"{"schoolName":"x","isOpen":false}"#).unwrap();
        assert_eq!(settings.school_name, "x");
        assert!(!settings.is_open);
        assert_eq!(settings.photo_mode, RequirementMode::Required);
        assert!(!settings.schools_list.is_empty());
    }

    #[test]
    fn test_mode_labels_round_trip() {
        for mode in [
            RequirementMode::Required,
            RequirementMode::Optional,
            RequirementMode::Disabled,
        ] {
            assert_eq!(RequirementMode::from_wire(mode.wire_name()), mode);
        }
        assert_eq!(RequirementMode::from_wire("?"), RequirementMode::Optional);
    }
}
