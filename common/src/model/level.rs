use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Admission level offered by the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    M1,
    M4,
}

impl Level {
    /// Short Thai form stored on the wire and in the cache, e.g. `ม.1`.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Level::M1 => "ม.1",
            Level::M4 => "ม.4",
        }
    }

    /// Long Thai form used on headings and the print sheet.
    pub fn thai_name(&self) -> &'static str {
        match self {
            Level::M1 => "มัธยมศึกษาปีที่ 1",
            Level::M4 => "มัธยมศึกษาปีที่ 4",
        }
    }

    /// Prefix of composed display ids, e.g. the `M1` in `M1-2567-0001`.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Level::M1 => "M1",
            Level::M4 => "M4",
        }
    }

    /// Recovers a level from its stored form. Unknown input maps to `M1`.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "ม.4" | "M4" | "4" => Level::M4,
            _ => Level::M1,
        }
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Level::from_wire(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        let json = serde_json::to_string(&Level::M4).unwrap();
        assert_eq!(json, "\"ม.4\"");
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Level::M4);
    }

    #[test]
    fn test_unknown_wire_value_falls_back_to_m1() {
        assert_eq!(Level::from_wire("ม.6"), Level::M1);
        assert_eq!(Level::from_wire(""), Level::M1);
        assert_eq!(Level::from_wire(" M4 "), Level::M4);
    }
}
