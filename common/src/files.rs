use regex::Regex;

use crate::model::application::{ApplicationRecord, FileSlots};

/// Marker left in a slot once its inline image has been stripped. The sheet
/// keeps the real file, the cache keeps this.
pub const ATTACHMENT_SENTINEL: &str = "UPLOADED";

/// The fixed upload slots on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    Photo,
    HouseReg,
    IdCard,
    Transcript,
    TranscriptBack,
    PaymentSlip,
}

impl FileSlot {
    pub fn get<'a>(&self, slots: &'a FileSlots) -> Option<&'a str> {
        match self {
            FileSlot::Photo => slots.photo.as_deref(),
            FileSlot::HouseReg => slots.house_reg.as_deref(),
            FileSlot::IdCard => slots.id_card.as_deref(),
            FileSlot::Transcript => slots.transcript.as_deref(),
            FileSlot::TranscriptBack => slots.transcript_back.as_deref(),
            FileSlot::PaymentSlip => slots.payment_slip.as_deref(),
        }
    }

    pub fn set(&self, slots: &mut FileSlots, value: String) {
        let target = match self {
            FileSlot::Photo => &mut slots.photo,
            FileSlot::HouseReg => &mut slots.house_reg,
            FileSlot::IdCard => &mut slots.id_card,
            FileSlot::Transcript => &mut slots.transcript,
            FileSlot::TranscriptBack => &mut slots.transcript_back,
            FileSlot::PaymentSlip => &mut slots.payment_slip,
        };
        *target = Some(value);
    }

    /// Thai label shown next to the slot on the form and the print sheet.
    pub fn thai_label(&self) -> &'static str {
        match self {
            FileSlot::Photo => "รูปถ่ายหน้าตรง",
            FileSlot::HouseReg => "สำเนาทะเบียนบ้าน",
            FileSlot::IdCard => "สำเนาบัตรประชาชน",
            FileSlot::Transcript => "ใบ ปพ.1 (ด้านหน้า)",
            FileSlot::TranscriptBack => "ใบ ปพ.1 (ด้านหลัง)",
            FileSlot::PaymentSlip => "หลักฐานการชำระเงิน",
        }
    }
}

fn strip_value(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| {
        if v.starts_with("data:image") {
            ATTACHMENT_SENTINEL.to_string()
        } else {
            v.clone()
        }
    })
}

/// Copy of `record` with inline images in the document slots replaced by
/// [`ATTACHMENT_SENTINEL`]. The payment slip and additional files keep
/// their payloads; already-stripped slots pass through unchanged, so the
/// operation is idempotent.
pub fn strip_attachments(record: &ApplicationRecord) -> ApplicationRecord {
    let mut out = record.clone();
    out.files.photo = strip_value(&record.files.photo);
    out.files.house_reg = strip_value(&record.files.house_reg);
    out.files.id_card = strip_value(&record.files.id_card);
    out.files.transcript = strip_value(&record.files.transcript);
    out.files.transcript_back = strip_value(&record.files.transcript_back);
    out
}

/// Whether a slot value represents a delivered document: an inline image, a
/// hosted URL, or the stripped marker.
pub fn has_attachment(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            v.starts_with("data:image") || v.starts_with("http") || v == ATTACHMENT_SENTINEL
        }
        None => false,
    }
}

/// Resolves a slot value to something an `<img>` tag can load.
///
/// Inline images pass through. Google Drive links come back from the sheet
/// in viewer form, which refuses to render inside an `<img>`, so the file
/// id is rewritten into the thumbnail endpoint. Other URLs pass through and
/// anything else (including the stripped marker) yields nothing.
pub fn display_image_url(value: &str) -> Option<String> {
    if value.is_empty() || value == ATTACHMENT_SENTINEL {
        return None;
    }
    if value.starts_with("data:image") {
        return Some(value.to_string());
    }
    if !value.starts_with("http") {
        return None;
    }
    if value.contains("drive.google.com") {
        let path_form = Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap();
        let query_form = Regex::new(r"id=([a-zA-Z0-9_-]+)").unwrap();
        let file_id = path_form
            .captures(value)
            .or_else(|| query_form.captures(value))
            .map(|c| c[1].to_string());
        return match file_id {
            Some(id) => Some(format!("https://drive.google.com/thumbnail?id={id}&sz=w1000")),
            None => Some(value.to_string()),
        };
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INLINE: &str = "data:image/jpeg;base64,/9j/AAAA";

    #[test]
    fn test_strip_replaces_inline_images_only() {
        let mut record = ApplicationRecord::default();
        record.files.photo = Some(INLINE.to_string());
        record.files.transcript = Some("https://drive.google.com/d/abc".to_string());
        record.files.payment_slip = Some(INLINE.to_string());

        let stripped = strip_attachments(&record);
        assert_eq!(stripped.files.photo.as_deref(), Some(ATTACHMENT_SENTINEL));
        assert_eq!(
            stripped.files.transcript.as_deref(),
            Some("https://drive.google.com/d/abc")
        );
        // the slip travels whole so the sheet still receives it
        assert_eq!(stripped.files.payment_slip.as_deref(), Some(INLINE));
        assert_eq!(stripped.files.house_reg, None);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let mut record = ApplicationRecord::default();
        record.files.photo = Some(INLINE.to_string());
        let once = strip_attachments(&record);
        let twice = strip_attachments(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_has_attachment_accepts_all_delivered_forms() {
        assert!(has_attachment(Some(INLINE)));
        assert!(has_attachment(Some("https://example.com/x.jpg")));
        assert!(has_attachment(Some(ATTACHMENT_SENTINEL)));
        assert!(!has_attachment(Some("")));
        assert!(!has_attachment(None));
    }

    #[test]
    fn test_drive_viewer_link_maps_to_thumbnail() {
        let url = "https://drive.google.com/file/d/1AbC_x-9/view?usp=sharing";
        assert_eq!(
            display_image_url(url).as_deref(),
            Some("https://drive.google.com/thumbnail?id=1AbC_x-9&sz=w1000")
        );

        let open_url = "https://drive.google.com/open?id=1AbC_x-9";
        assert_eq!(
            display_image_url(open_url).as_deref(),
            Some("https://drive.google.com/thumbnail?id=1AbC_x-9&sz=w1000")
        );
    }

    #[test]
    fn test_non_drive_urls_and_inline_images_pass_through() {
        assert_eq!(display_image_url(INLINE).as_deref(), Some(INLINE));
        assert_eq!(
            display_image_url("https://example.com/x.jpg").as_deref(),
            Some("https://example.com/x.jpg")
        );
    }

    #[test]
    fn test_marker_and_junk_render_nothing() {
        assert_eq!(display_image_url(ATTACHMENT_SENTINEL), None);
        assert_eq!(display_image_url(""), None);
        assert_eq!(display_image_url("not a url"), None);
    }

    #[test]
    fn test_slot_accessors_cover_every_slot() {
        let mut slots = FileSlots::default();
        for slot in [
            FileSlot::Photo,
            FileSlot::HouseReg,
            FileSlot::IdCard,
            FileSlot::Transcript,
            FileSlot::TranscriptBack,
            FileSlot::PaymentSlip,
        ] {
            assert_eq!(slot.get(&slots), None);
            slot.set(&mut slots, format!("v-{}", slot.thai_label()));
            assert_eq!(slot.get(&slots), Some(format!("v-{}", slot.thai_label()).as_str()));
        }
    }
}
