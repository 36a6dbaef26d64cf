/// One row of the built-in address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdistrict {
    pub subdistrict: &'static str,
    pub district: &'static str,
    pub province: &'static str,
    pub zip_code: &'static str,
}

/// The subdistricts of the school's catchment, อ.ท่าบ่อ จ.หนองคาย.
/// Applicants from elsewhere type their address in free form.
const SUBDISTRICTS: &[Subdistrict] = &[
    Subdistrict { subdistrict: "ท่าบ่อ", district: "ท่าบ่อ", province: "หนองคาย", zip_code: "43110" },
    Subdistrict { subdistrict: "โพนสา", district: "ท่าบ่อ", province: "หนองคาย", zip_code: "43110" },
    Subdistrict { subdistrict: "บ้านถ่อน", district: "ท่าบ่อ", province: "หนองคาย", zip_code: "43110" },
    Subdistrict { subdistrict: "กองนาง", district: "ท่าบ่อ", province: "หนองคาย", zip_code: "43110" },
    Subdistrict { subdistrict: "โคกคอน", district: "ท่าบ่อ", province: "หนองคาย", zip_code: "43110" },
    Subdistrict { subdistrict: "บ้านเดื่อ", district: "ท่าบ่อ", province: "หนองคาย", zip_code: "43110" },
];

/// Rows whose subdistrict or district contains `query`.
pub fn search_subdistricts(query: &str) -> Vec<&'static Subdistrict> {
    SUBDISTRICTS
        .iter()
        .filter(|row| row.subdistrict.contains(query) || row.district.contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match_on_subdistrict() {
        let hits = search_subdistricts("บ้าน");
        let names: Vec<_> = hits.iter().map(|s| s.subdistrict).collect();
        assert_eq!(names, vec!["บ้านถ่อน", "บ้านเดื่อ"]);
    }

    #[test]
    fn test_district_match_returns_whole_catchment() {
        assert_eq!(search_subdistricts("ท่าบ่อ").len(), SUBDISTRICTS.len());
    }

    #[test]
    fn test_no_match_outside_catchment() {
        assert!(search_subdistricts("บางกะปิ").is_empty());
    }
}
