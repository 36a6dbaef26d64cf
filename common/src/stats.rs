use crate::model::application::{ApplicationRecord, TrackKind};
use crate::model::level::Level;
use crate::model::status::ApplicationStatus;
use crate::validation::normalize_citizen_id;

/// Head count with a gender split read off the name title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderTally {
    pub total: usize,
    pub male: usize,
    pub female: usize,
}

fn is_male_title(title: &str) -> bool {
    title == "เด็กชาย" || title == "นาย"
}

fn is_female_title(title: &str) -> bool {
    title == "เด็กหญิง" || title == "นางสาว"
}

/// Tallies a set of records. Titles outside the four standard forms count
/// toward the total only.
pub fn tally<'a, I>(records: I) -> GenderTally
where
    I: IntoIterator<Item = &'a ApplicationRecord>,
{
    let mut out = GenderTally::default();
    for record in records {
        out.total += 1;
        if is_male_title(&record.title) {
            out.male += 1;
        } else if is_female_title(&record.title) {
            out.female += 1;
        }
    }
    out
}

/// The landing page headline: one tally per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelOverview {
    pub m1: GenderTally,
    pub m4: GenderTally,
}

pub fn overview(records: &[ApplicationRecord]) -> LevelOverview {
    LevelOverview {
        m1: tally(records.iter().filter(|r| r.level == Level::M1)),
        m4: tally(records.iter().filter(|r| r.level == Level::M4)),
    }
}

/// Drill-down selection on the public stats panel. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsFilter {
    pub level: Option<Level>,
    pub kind: Option<TrackKind>,
    pub track: Option<String>,
}

impl StatsFilter {
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        if let Some(level) = self.level {
            if record.level != level {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if record.track_type != kind {
                return false;
            }
        }
        if let Some(track) = &self.track {
            if &record.track != track {
                return false;
            }
        }
        true
    }

    pub fn tally(&self, records: &[ApplicationRecord]) -> GenderTally {
        tally(records.iter().filter(|r| self.matches(r)))
    }
}

/// Distinct non-empty track names among records passing the level and kind
/// parts of `filter`, sorted for a stable dropdown.
pub fn track_names(records: &[ApplicationRecord], filter: &StatsFilter) -> Vec<String> {
    let scope = StatsFilter { track: None, ..filter.clone() };
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| scope.matches(r))
        .map(|r| r.track.clone())
        .filter(|t| !t.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Per-status head count for the dashboard summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTally {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn status_counts(records: &[ApplicationRecord]) -> StatusTally {
    let mut out = StatusTally::default();
    for record in records {
        out.total += 1;
        match record.status {
            ApplicationStatus::Pending => out.pending += 1,
            ApplicationStatus::Approved => out.approved += 1,
            ApplicationStatus::Rejected => out.rejected += 1,
        }
    }
    out
}

/// Row filter on the staff dashboard list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub level: Option<Level>,
    pub status: Option<ApplicationStatus>,
    pub track: Option<String>,
    /// `YYYY-MM-DD`; compared against the date part of the submit timestamp.
    pub date: Option<String>,
    pub search: String,
}

impl RecordFilter {
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        if let Some(level) = self.level {
            if record.level != level {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(track) = &self.track {
            if &record.track != track {
                return false;
            }
        }
        if let Some(date) = &self.date {
            if record.submit_date.get(..10) != Some(date.as_str()) {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let name = record.display_name().to_lowercase();
            let id = record.id.to_lowercase();
            let citizen = normalize_citizen_id(&record.national_id);
            if !name.contains(&needle) && !id.contains(&needle) && !citizen.contains(&needle) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, records: &'a [ApplicationRecord]) -> Vec<&'a ApplicationRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: Level, title: &str, track: &str, kind: TrackKind) -> ApplicationRecord {
        let mut r = ApplicationRecord::default();
        r.level = level;
        r.title = title.to_string();
        r.track = track.to_string();
        r.track_type = kind;
        r
    }

    fn sample() -> Vec<ApplicationRecord> {
        vec![
            record(Level::M1, "เด็กชาย", "ห้องเรียนปกติ", TrackKind::Regular),
            record(Level::M1, "เด็กหญิง", "ห้องเรียนปกติ", TrackKind::Regular),
            record(
                Level::M1,
                "เด็กชาย",
                "ห้องเรียนพิเศษ ภาษาอังกฤษ (Mini English Program)",
                TrackKind::Special,
            ),
            record(Level::M4, "นางสาว", "ห้องเรียนศิลป์-สังคม (ศิลป์ทั่วไป)", TrackKind::Regular),
        ]
    }

    #[test]
    fn test_overview_splits_by_level_and_title() {
        let stats = overview(&sample());
        assert_eq!(stats.m1.total, 3);
        assert_eq!(stats.m1.male, 2);
        assert_eq!(stats.m1.female, 1);
        assert_eq!(stats.m4.total, 1);
        assert_eq!(stats.m4.female, 1);
        assert_eq!(stats.m4.male, 0);
    }

    #[test]
    fn test_odd_title_counts_toward_total_only() {
        let records = vec![record(Level::M1, "นางสาว ", "x", TrackKind::Regular)];
        let stats = tally(records.iter());
        assert_eq!(stats.total, 1);
        assert_eq!(stats.male + stats.female, 0);
    }

    #[test]
    fn test_stats_filter_narrows_by_kind_and_track() {
        let records = sample();
        let filter = StatsFilter {
            level: Some(Level::M1),
            kind: Some(TrackKind::Special),
            track: None,
        };
        assert_eq!(filter.tally(&records).total, 1);

        let filter = StatsFilter {
            level: None,
            kind: None,
            track: Some("ห้องเรียนปกติ".to_string()),
        };
        assert_eq!(filter.tally(&records).total, 2);
    }

    #[test]
    fn test_track_names_scope_ignores_track_part() {
        let records = sample();
        let filter = StatsFilter {
            level: Some(Level::M1),
            kind: None,
            track: Some("ห้องเรียนปกติ".to_string()),
        };
        let names = track_names(&records, &filter);
        assert_eq!(
            names,
            vec![
                "ห้องเรียนปกติ".to_string(),
                "ห้องเรียนพิเศษ ภาษาอังกฤษ (Mini English Program)".to_string(),
            ]
        );
    }

    #[test]
    fn test_status_counts_cover_every_state() {
        let mut records = sample();
        records[1].status = ApplicationStatus::Approved;
        records[2].status = ApplicationStatus::Rejected;
        let counts = status_counts(&records);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 1);
    }

    #[test]
    fn test_record_filter_narrows_by_status() {
        let mut records = sample();
        records[0].status = ApplicationStatus::Approved;

        let filter = RecordFilter {
            status: Some(ApplicationStatus::Approved),
            ..RecordFilter::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);

        let filter = RecordFilter {
            status: Some(ApplicationStatus::Pending),
            ..RecordFilter::default()
        };
        assert_eq!(filter.apply(&records).len(), 3);
    }

    #[test]
    fn test_record_filter_date_compares_day_prefix() {
        let mut r = record(Level::M1, "เด็กชาย", "x", TrackKind::Regular);
        r.submit_date = "2026-01-15T09:30:00.000Z".to_string();
        let records = vec![r];

        let mut filter = RecordFilter::default();
        filter.date = Some("2026-01-15".to_string());
        assert_eq!(filter.apply(&records).len(), 1);
        filter.date = Some("2026-01-16".to_string());
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_record_filter_search_hits_name_id_and_citizen_id() {
        let mut r = record(Level::M1, "เด็กชาย", "x", TrackKind::Regular);
        r.first_name = "สมชาย".to_string();
        r.last_name = "ใจดี".to_string();
        r.id = "M1-2567-0007".to_string();
        r.national_id = "1103700209611".to_string();
        let records = vec![r];

        for needle in ["สมชาย", "m1-2567-0007", "0209611"] {
            let filter = RecordFilter { search: needle.to_string(), ..RecordFilter::default() };
            assert_eq!(filter.apply(&records).len(), 1, "needle {needle}");
        }

        let filter = RecordFilter { search: "ไม่พบ".to_string(), ..RecordFilter::default() };
        assert!(filter.apply(&records).is_empty());
    }
}
