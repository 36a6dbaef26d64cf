use crate::model::application::TrackKind;
use crate::model::level::Level;

/// One study plan on offer. `sub_gpa_label` names the subject-group GPA the
/// plan asks for in addition to the overall GPA; empty means none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub name: &'static str,
    pub sub_gpa_label: &'static str,
}

const M1_SPECIAL: &[Track] = &[
    Track {
        name: "ห้องเรียนพิเศษ วิทย์-คณิต (Talented Program)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์-คณิตศาสตร์",
    },
    Track {
        name: "ห้องเรียนพิเศษ ภาษาอังกฤษ (Mini English Program)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยรายวิชาภาษาอังกฤษ",
    },
];

const M1_REGULAR: &[Track] = &[Track { name: "ห้องเรียนปกติ", sub_gpa_label: "" }];

const M4_SPECIAL: &[Track] = &[
    Track {
        name: "ห้องเรียนพิเศษ วิทยาศาสตร์-คณิตศาสตร์ (Talented Program)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์-คณิตศาสตร์",
    },
    Track {
        name: "ห้องเรียนพิเศษ วิทยาศาสตร์ (Gifted Science Program)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์และเทคโนโลยี",
    },
    Track {
        name: "ห้องเรียนพิเศษภาษาอังกฤษและการสื่อสาร (Gifted English and Communication Program)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยรายวิชาภาษาอังกฤษ",
    },
];

const M4_REGULAR: &[Track] = &[
    Track {
        name: "ห้องเรียนวิทยาศาสตร์-คณิตศาสตร์ (วิทยาศาสตร์สุขภาพ)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์-คณิตศาสตร์",
    },
    Track {
        name: "ห้องเรียนวิทยาศาสตร์-คณิตศาสตร์ (เตรียมวิศวกรรม)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์-คณิตศาสตร์",
    },
    Track {
        name: "ห้องเรียนวิทยาศาสตร์-คณิตศาสตร์ (วิทยาศาสตร์พลังสิบ)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์-คณิตศาสตร์",
    },
    Track {
        name: "ห้องเรียนวิทยาศาสตร์-คณิตศาสตร์ (ทั่วไป)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยวิชาวิทยาศาสตร์-คณิตศาสตร์",
    },
    Track {
        name: "ห้องเรียนศิลป์-ภาษา (อังกฤษ จีน เกาหลี ญี่ปุ่น)",
        sub_gpa_label: "ผลการเรียนเฉลี่ยกลุ่มสาระฯภาษาต่างประเทศ",
    },
    Track { name: "ห้องเรียนศิลป์-สังคม (กีฬา Sport Talented Program)", sub_gpa_label: "" },
    Track { name: "ห้องเรียนศิลป์-สังคม (ศิลป์ธุรกิจ: MOU ปัญญาภิวัฒน์)", sub_gpa_label: "" },
    Track { name: "ห้องเรียนศิลป์-สังคม (ศิลป์ทั่วไป)", sub_gpa_label: "" },
];

/// The plans offered for one level and track family.
pub fn tracks_for(level: Level, kind: TrackKind) -> &'static [Track] {
    match (level, kind) {
        (Level::M1, TrackKind::Special) => M1_SPECIAL,
        (Level::M1, TrackKind::Regular) => M1_REGULAR,
        (Level::M4, TrackKind::Special) => M4_SPECIAL,
        (Level::M4, TrackKind::Regular) => M4_REGULAR,
    }
}

/// Looks a plan up by its full name, across both families of a level.
pub fn find_track(level: Level, name: &str) -> Option<&'static Track> {
    tracks_for(level, TrackKind::Special)
        .iter()
        .chain(tracks_for(level, TrackKind::Regular))
        .find(|t| t.name == name)
}

/// GPA field label for the form: M1 applicants report their primary-school
/// average, M4 applicants their five-term average.
pub fn gpa_label(level: Level) -> &'static str {
    match level {
        Level::M1 => "ผลการเรียนเฉลี่ยรวม ป.4-ป.5 (GPAX)",
        Level::M4 => "ผลการเรียนเฉลี่ยรวม 5 ภาคเรียน (GPAX)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(tracks_for(Level::M1, TrackKind::Special).len(), 2);
        assert_eq!(tracks_for(Level::M1, TrackKind::Regular).len(), 1);
        assert_eq!(tracks_for(Level::M4, TrackKind::Special).len(), 3);
        assert_eq!(tracks_for(Level::M4, TrackKind::Regular).len(), 8);
    }

    #[test]
    fn test_find_track_spans_both_families() {
        let special = find_track(Level::M4, "ห้องเรียนพิเศษ วิทยาศาสตร์ (Gifted Science Program)");
        assert!(special.is_some());
        let regular = find_track(Level::M4, "ห้องเรียนศิลป์-สังคม (ศิลป์ทั่วไป)");
        assert_eq!(regular.map(|t| t.sub_gpa_label), Some(""));
        assert!(find_track(Level::M1, "ห้องเรียนที่ไม่มีอยู่").is_none());
    }

    #[test]
    fn test_m1_regular_needs_no_sub_gpa() {
        let track = find_track(Level::M1, "ห้องเรียนปกติ").unwrap();
        assert!(track.sub_gpa_label.is_empty());
    }

    #[test]
    fn test_track_names_are_unique_within_level() {
        for level in [Level::M1, Level::M4] {
            let mut names: Vec<_> = tracks_for(level, TrackKind::Special)
                .iter()
                .chain(tracks_for(level, TrackKind::Regular))
                .map(|t| t.name)
                .collect();
            let before = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), before);
        }
    }
}
