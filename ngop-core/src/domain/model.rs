use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use super::ids::{ActivityId, CostItemId, ProjectId, UnitPairId};
use super::status::ActivityStatus;

/// Unit choices offered by the cost form. `"อื่นๆ"` (other) switches the
/// pair over to its free-text `custom_unit`. Persisted data may carry units
/// outside this list (the seed uses `"คัน"`); those load unchanged.
pub const UNIT_OPTIONS: [&str; 5] = ["ครั้ง", "วัน", "มื้อ", "คน", "อื่นๆ"];

/// The unit option that activates `custom_unit`.
pub const OTHER_UNIT: &str = "อื่นๆ";

/// Top-level budget/activity container owned by a work group.
///
/// Projects replace themselves wholesale in the persisted list; they are
/// never partially patched, and deletion is omission from a saved list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Work group that owns the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Project {
    pub fn new(name: impl Into<String>, department: Option<String>) -> Self {
        Self {
            id: ProjectId::generate(),
            name: name.into(),
            department,
            activities: Vec::new(),
        }
    }

    pub fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }
}

/// A dated unit of work within a project, carrying its own budget breakdown
/// and progress status.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    #[serde(default, with = "super::lenient::date")]
    pub start_date: Option<Date>,
    #[serde(default, with = "super::lenient::date")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub target_group: String,
    /// Defaults to `not_started` for records persisted before the field
    /// existed.
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub progress_report: String,
    /// Process-local; reset to empty on reload and stripped on save.
    #[serde(default)]
    pub attachments: Vec<AttachmentRef>,
    #[serde(default)]
    pub cost_items: Vec<CostItem>,
}

impl Activity {
    /// A blank activity the way the form creates one.
    pub fn new() -> Self {
        Self {
            id: ActivityId::generate(),
            name: String::new(),
            start_date: None,
            end_date: None,
            target_group: String::new(),
            status: ActivityStatus::NotStarted,
            progress_report: String::new(),
            attachments: Vec::new(),
            cost_items: Vec::new(),
        }
    }

    pub fn cost_item(&self, id: &CostItemId) -> Option<&CostItem> {
        self.cost_items.iter().find(|c| &c.id == id)
    }
}

/// One budget line within an activity, priced per unit and multiplied by one
/// or more quantity factors.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub id: CostItemId,
    pub name: String,
    #[serde(default, with = "super::lenient::decimal")]
    pub price_per_unit: Decimal,
    #[serde(default)]
    pub quantity_units: Vec<QuantityUnitPair>,
}

impl CostItem {
    /// A blank line with a single `1 ×` pair, the way the form creates one.
    pub fn new() -> Self {
        Self {
            id: CostItemId::generate(),
            name: String::new(),
            price_per_unit: Decimal::ZERO,
            quantity_units: vec![QuantityUnitPair::new()],
        }
    }
}

/// One (quantity, unit) multiplier contributing to a cost item's effective
/// quantity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUnitPair {
    pub id: UnitPairId,
    #[serde(default, with = "super::lenient::decimal")]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_unit: Option<String>,
}

impl QuantityUnitPair {
    pub fn new() -> Self {
        Self {
            id: UnitPairId::generate(),
            quantity: Decimal::ONE,
            unit: String::new(),
            custom_unit: None,
        }
    }

    /// The unit as shown to users: the free-text custom unit when the pair
    /// is set to `"อื่นๆ"`, the stored unit otherwise.
    pub fn display_unit(&self) -> &str {
        if self.unit == OTHER_UNIT {
            self.custom_unit.as_deref().unwrap_or("")
        } else {
            &self.unit
        }
    }
}

/// Content-addressed reference to an uploaded file: name plus SHA-256 digest
/// of the content. The bytes live with an external asset store and never
/// enter the persisted tree.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub digest: String,
}

impl AttachmentRef {
    pub fn new(file_name: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            digest: digest.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let mut project = Project::new("โครงการทดสอบ", Some("กลุ่มงานทดสอบ".to_string()));
        let mut activity = Activity::new();
        activity.start_date = Some(date!(2026 - 10 - 01));
        activity.cost_items.push(CostItem::new());
        project.activities.push(activity);

        let json = serde_json::to_value(&project).unwrap();
        let activity_json = &json["activities"][0];
        assert_eq!(activity_json["startDate"], "2026-10-01");
        assert_eq!(activity_json["endDate"], "");
        assert_eq!(activity_json["status"], "not_started");
        assert!(activity_json["costItems"][0]["pricePerUnit"].is_number());
        assert!(activity_json["costItems"][0]["quantityUnits"].is_array());
    }

    #[test]
    fn record_missing_status_defaults_to_not_started() {
        let raw = r#"{
            "id": "act-legacy",
            "name": "กิจกรรมเก่า",
            "startDate": "2026-10-01",
            "endDate": "2027-09-30",
            "targetGroup": "",
            "progressReport": "",
            "costItems": []
        }"#;
        let activity: Activity = serde_json::from_str(raw).unwrap();
        assert_eq!(activity.status, ActivityStatus::NotStarted);
    }

    #[test]
    fn stringly_price_and_missing_quantity_coerce_to_defaults() {
        let raw = r#"{
            "id": "cost-legacy",
            "name": "ค่าวัสดุ",
            "pricePerUnit": "1500",
            "quantityUnits": [{ "id": "qu-1", "unit": "ครั้ง" }]
        }"#;
        let item: CostItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.price_per_unit, Decimal::from(1500));
        assert_eq!(item.quantity_units[0].quantity, Decimal::ZERO);
    }

    #[test]
    fn opaque_legacy_attachments_load_as_empty_refs() {
        let raw = r#"{
            "id": "act-1",
            "name": "",
            "startDate": "",
            "endDate": "",
            "targetGroup": "",
            "status": "in_progress",
            "attachments": [{}, {"fileName": "แผนงาน.pdf"}],
            "costItems": []
        }"#;
        let activity: Activity = serde_json::from_str(raw).unwrap();
        assert_eq!(activity.attachments.len(), 2);
        assert_eq!(activity.attachments[1].file_name, "แผนงาน.pdf");
        assert_eq!(activity.attachments[0].digest, "");
    }

    #[test]
    fn other_unit_displays_its_custom_text() {
        let mut pair = QuantityUnitPair::new();
        pair.unit = OTHER_UNIT.to_string();
        pair.custom_unit = Some("กล่อง".to_string());
        assert_eq!(pair.display_unit(), "กล่อง");

        pair.unit = "คัน".to_string();
        assert_eq!(pair.display_unit(), "คัน");
    }
}
