use crate::enums::{AttachmentType, CoverageType, GccCountry, VehicleType};
use serde::{Deserialize, Serialize};

/// Client-held draft of a motor First Notice of Loss.
///
/// Lives only in the wizard's in-memory state. Nothing here is persisted; the
/// record is discarded on navigation or reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDraft {
    // Contact
    pub country_code: Option<GccCountry>,
    pub mobile_number: String,
    pub national_id: String,
    pub reporter_name: String,
    pub reporter_email: String,

    // Vehicle
    pub plate_number: String,
    pub plate_country: Option<GccCountry>,
    pub vehicle_type: Option<VehicleType>,
    pub vehicle_make: String,
    pub vehicle_model: String,
    /// Raw year text; parsed when the request is built
    pub vehicle_year: String,
    pub vehicle_color: String,
    pub policy_number: String,
    pub coverage_type: Option<CoverageType>,
    pub is_fleet: bool,

    // Incident
    pub incident_date: String,
    pub incident_time: String,
    pub incident_location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,
    pub is_drivable: bool,
    pub has_injuries: bool,
    pub third_party_involved: bool,
    pub police_report_number: String,

    // Attachments, in insertion order
    pub attachments: Vec<AttachmentDescriptor>,
}

impl Default for ClaimDraft {
    fn default() -> Self {
        Self {
            country_code: Some(GccCountry::Uae),
            mobile_number: String::new(),
            national_id: String::new(),
            reporter_name: String::new(),
            reporter_email: String::new(),
            plate_number: String::new(),
            plate_country: Some(GccCountry::Uae),
            vehicle_type: Some(VehicleType::Sedan),
            vehicle_make: String::new(),
            vehicle_model: String::new(),
            vehicle_year: String::new(),
            vehicle_color: String::new(),
            policy_number: String::new(),
            coverage_type: Some(CoverageType::Comprehensive),
            is_fleet: false,
            incident_date: String::new(),
            incident_time: String::new(),
            incident_location: String::new(),
            latitude: None,
            longitude: None,
            description: String::new(),
            is_drivable: true,
            has_injuries: false,
            third_party_involved: false,
            police_report_number: String::new(),
            attachments: Vec::new(),
        }
    }
}

/// URL-referenced supporting media
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDescriptor {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    pub description: String,
}

impl ClaimDraft {
    /// Append a blank image attachment and return its index
    pub fn add_attachment(&mut self) -> usize {
        self.attachments.push(AttachmentDescriptor::default());
        self.attachments.len() - 1
    }

    /// Remove the attachment at `index`.
    ///
    /// Removal is positional: of two identical entries only the one at
    /// `index` goes. Out-of-range indices leave the list untouched.
    pub fn remove_attachment(&mut self, index: usize) -> Option<AttachmentDescriptor> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    /// Update an attachment URL, picking the media type from a known extension
    pub fn set_attachment_url(&mut self, index: usize, url: String) {
        if let Some(attachment) = self.attachments.get_mut(index) {
            if let Some(kind) = AttachmentType::from_extension(&url) {
                attachment.kind = kind;
            }
            attachment.url = url;
        }
    }

    pub fn set_attachment_kind(&mut self, index: usize, kind: AttachmentType) {
        if let Some(attachment) = self.attachments.get_mut(index) {
            attachment.kind = kind;
        }
    }

    pub fn set_attachment_description(&mut self, index: usize, description: String) {
        if let Some(attachment) = self.attachments.get_mut(index) {
            attachment.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(url: &str) -> AttachmentDescriptor {
        AttachmentDescriptor {
            url: url.to_string(),
            kind: AttachmentType::Image,
            description: String::new(),
        }
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        let draft = ClaimDraft::default();
        assert_eq!(draft.country_code, Some(GccCountry::Uae));
        assert_eq!(draft.plate_country, Some(GccCountry::Uae));
        assert_eq!(draft.vehicle_type, Some(VehicleType::Sedan));
        assert_eq!(draft.coverage_type, Some(CoverageType::Comprehensive));
        assert!(draft.is_drivable);
        assert!(!draft.has_injuries && !draft.third_party_involved && !draft.is_fleet);
        assert!(draft.attachments.is_empty());
    }

    #[test]
    fn test_add_then_remove_same_index_is_noop() {
        let mut draft = ClaimDraft::default();
        draft.attachments = vec![attachment("a.jpg"), attachment("b.pdf")];
        let before = draft.attachments.clone();

        let index = draft.add_attachment();
        assert_eq!(draft.attachments.len(), 3);
        draft.remove_attachment(index);

        assert_eq!(draft.attachments, before);
    }

    #[test]
    fn test_remove_identical_entries_removes_exactly_one() {
        let mut draft = ClaimDraft::default();
        draft.attachments = vec![attachment("same.jpg"), attachment("same.jpg"), attachment("other.jpg")];

        let removed = draft.remove_attachment(1);

        assert_eq!(removed, Some(attachment("same.jpg")));
        assert_eq!(draft.attachments, vec![attachment("same.jpg"), attachment("other.jpg")]);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut draft = ClaimDraft::default();
        draft.add_attachment();
        assert_eq!(draft.remove_attachment(5), None);
        assert_eq!(draft.attachments.len(), 1);
    }

    #[test]
    fn test_url_with_known_extension_sets_type() {
        let mut draft = ClaimDraft::default();
        let index = draft.add_attachment();
        draft.set_attachment_url(index, "https://files.example.ae/police-report.pdf".into());
        assert_eq!(draft.attachments[index].kind, AttachmentType::Document);

        draft.set_attachment_kind(index, AttachmentType::Image);
        draft.set_attachment_url(index, "https://files.example.ae/view?id=7".into());
        assert_eq!(draft.attachments[index].kind, AttachmentType::Image);
    }

    #[test]
    fn test_attachment_serializes_type_key() {
        let json = serde_json::to_value(attachment("x.png")).unwrap();
        assert_eq!(json["type"], "IMAGE");
        assert_eq!(json["url"], "x.png");
    }
}
