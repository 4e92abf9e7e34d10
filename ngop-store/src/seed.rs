//! First-run dataset: the fiscal-year 2570 Patient Centered Care TB
//! project, exactly as the division entered it.

use ngop_core::{
    Activity, ActivityId, ActivityStatus, CostItem, CostItemId, Project, ProjectId,
    QuantityUnitPair, UnitPairId,
};
use rust_decimal::Decimal;
use time::macros::date;

/// The dataset a fresh store starts from. Stable ids, so edits made on top
/// of the seed survive reloads.
pub fn seed_projects() -> Vec<Project> {
    vec![Project {
        id: ProjectId::new("seed-project-001"),
        name: "โครงการให้บริการดูแลรักษาวัณโรค และวัณโรคดื้อยา โดยผู้ป่วยเป็นศูนย์กลาง (Patient Centered Care) และการคัดกรองเชิงรุกในประชากรกลุ่มเสี่ยงโดยการถ่ายภาพรังสีทรวงอก".to_string(),
        department: Some("กลุ่มงานพัฒนาระบบบริการคลินิกวัณโรค".to_string()),
        activities: vec![
            activity(
                "act-001",
                "ให้บริการดูแลรักษาวัณโรค และวัณโรคดื้อยา โดยผู้ป่วยเป็นศูนย์กลาง (Patient Centered Care)",
                "ประชาชนทั่วไป/ประชากรกลุ่มเสี่ยงและผู้ป่วยวัณโรค",
                vec![
                    item("cost-1-1", "ค่าวัสดุอุปกรณ์การดำเนินงานโครงการ", 20000, vec![
                        pair("qu-1-1-1", 1, "ครั้ง"),
                    ]),
                    item("cost-1-2", "ค่าบำรุงรักษาเครื่องมือและอุปกรณ์ทางการแพทย์", 15000, vec![
                        pair("qu-1-2-1", 1, "ครั้ง"),
                    ]),
                    item("cost-1-3", "ค่าวัสดุอุปกรณ์ทางการแพทย์", 40000, vec![
                        pair("qu-1-3-1", 1, "ครั้ง"),
                    ]),
                    item("cost-1-4", "ค่าตรวจเลือดผู้ป่วย", 80000, vec![
                        pair("qu-1-4-1", 1, "ครั้ง"),
                    ]),
                ],
            ),
            activity(
                "act-002",
                "ให้บริการด้วยการคัดกรองเพื่อค้นหาวัณโรคเชิงรุกโดยการออกหน่วยเคลื่อนที่ในกลุ่มประชากรเสี่ยงต่าง ๆ",
                "ประชาชนทั่วไป/ประชากรกลุ่มเสี่ยงและผู้ป่วยวัณโรค",
                vec![
                    item("cost-2-1", "ค่าเบี้ยเลี้ยง (1 ครั้ง/3 วัน)", 240, vec![
                        pair("qu-2-1-1", 1, "ครั้ง"),
                        pair("qu-2-1-2", 3, "วัน"),
                        pair("qu-2-1-3", 10, "คน"),
                    ]),
                    item("cost-2-2", "ค่าเบี้ยเลี้ยง (3 ครั้ง/1 วัน)", 240, vec![
                        pair("qu-2-2-1", 3, "ครั้ง"),
                        pair("qu-2-2-2", 1, "วัน"),
                        pair("qu-2-2-3", 10, "คน"),
                    ]),
                    item("cost-2-3", "ค่าที่พัก", 800, vec![
                        pair("qu-2-3-1", 1, "ครั้ง"),
                        pair("qu-2-3-2", 2, "วัน"),
                        pair("qu-2-3-3", 10, "คน"),
                    ]),
                    item("cost-2-4", "ค่าพาหนะเดินทาง", 900, vec![
                        pair("qu-2-4-1", 4, "ครั้ง"),
                        pair("qu-2-4-2", 10, "คน"),
                    ]),
                    item("cost-2-5", "ค่าน้ำมันเชื้อเพลิง/ค่าผ่านทางพิเศษ", 5000, vec![
                        pair("qu-2-5-1", 2, "ครั้ง"),
                    ]),
                    item("cost-2-6", "ค่าน้ำมันเชื้อเพลิงรถเอกซเรย์ (ไป - กลับ) สำหรับคัดกรองชุมชนแออัดในกทม.", 1500, vec![
                        pair("qu-2-6-1", 3, "ครั้ง"),
                    ]),
                    item("cost-2-7", "ค่าฟิล์มวัดรังสี", 1000, vec![
                        pair("qu-2-7-1", 1, "ครั้ง"),
                        pair("qu-2-7-2", 3, "คน"),
                    ]),
                ],
            ),
            activity(
                "act-003",
                "จ้างเหมาบริการบำรุงรักษาเครื่องเอกซเรย์ดิจิตอล",
                "บุคลากรกองวัณโรค",
                vec![
                    item("cost-3-1", "ค่าจ้างเหมาบำรุงรักษาเครื่องเอกซเรย์ดิจิทัล", 92500, vec![
                        pair("qu-3-1-1", 2, "ครั้ง"),
                    ]),
                ],
            ),
            activity(
                "act-004",
                "ประชุมเพื่อติดตามงานการให้บริการและดูแลรักษาผู้ป่วยวัณโรค",
                "บุคลากรกองวัณโรค",
                vec![
                    item("cost-4-1", "ค่าอาหารกลางวัน", 100, vec![
                        pair("qu-4-1-1", 1, "ครั้ง"),
                        pair("qu-4-1-2", 1, "วัน"),
                        pair("qu-4-1-3", 1, "มื้อ"),
                        pair("qu-4-1-4", 30, "คน"),
                    ]),
                    item("cost-4-2", "ค่าอาหารว่างและเครื่องดื่ม", 35, vec![
                        pair("qu-4-2-1", 1, "ครั้ง"),
                        pair("qu-4-2-2", 1, "วัน"),
                        pair("qu-4-2-3", 2, "มื้อ"),
                        pair("qu-4-2-4", 30, "คน"),
                    ]),
                ],
            ),
            activity(
                "act-005",
                "ประชุมราชการเรื่องการพัฒนาระบบบริการคลินิกวัณโรค",
                "บุคลากรกองวัณโรค/เจ้าหน้าที่หน่วยบริการคลินิกวัณโรค",
                vec![
                    item("cost-5-1", "ค่าเบี้ยเลี้ยง", 240, vec![
                        pair("qu-5-1-1", 1, "ครั้ง"),
                        pair("qu-5-1-2", 1, "วัน"),
                        pair("qu-5-1-3", 20, "คน"),
                    ]),
                    item("cost-5-2", "ค่าอาหารกลางวัน", 100, vec![
                        pair("qu-5-2-1", 1, "ครั้ง"),
                        pair("qu-5-2-2", 1, "วัน"),
                        pair("qu-5-2-3", 1, "มื้อ"),
                        pair("qu-5-2-4", 20, "คน"),
                    ]),
                    item("cost-5-3", "ค่าอาหารว่างและเครื่องดื่ม", 35, vec![
                        pair("qu-5-3-1", 1, "ครั้ง"),
                        pair("qu-5-3-2", 1, "วัน"),
                        pair("qu-5-3-3", 2, "มื้อ"),
                        pair("qu-5-3-4", 20, "คน"),
                    ]),
                    item("cost-5-4", "ค่าน้ำมันเชื้อเพลิง/ค่าผ่านทางพิเศษ", 1500, vec![
                        pair("qu-5-4-1", 2, "ครั้ง"),
                        pair("qu-5-4-2", 2, "คัน"),
                    ]),
                ],
            ),
            activity(
                "act-006",
                "จัดพิมพ์เอกสารสื่อสิ่งพิมพ์",
                "ประชาชนทั่วไป/ประชากรกลุ่มเสี่ยงและผู้ป่วยวัณโรค",
                vec![
                    item("cost-6-1", "ค่าจัดทำเอกสารสื่อสิ่งพิมพ์", 30000, vec![
                        pair("qu-6-1-1", 1, "ครั้ง"),
                    ]),
                ],
            ),
        ],
    }]
}

// Every seed activity spans fiscal year 2570.
fn activity(id: &str, name: &str, target_group: &str, cost_items: Vec<CostItem>) -> Activity {
    Activity {
        id: ActivityId::new(id),
        name: name.to_string(),
        start_date: Some(date!(2026 - 10 - 01)),
        end_date: Some(date!(2027 - 09 - 30)),
        target_group: target_group.to_string(),
        status: ActivityStatus::NotStarted,
        progress_report: String::new(),
        attachments: Vec::new(),
        cost_items,
    }
}

fn item(id: &str, name: &str, price: i64, quantity_units: Vec<QuantityUnitPair>) -> CostItem {
    CostItem {
        id: CostItemId::new(id),
        name: name.to_string(),
        price_per_unit: Decimal::from(price),
        quantity_units,
    }
}

fn pair(id: &str, quantity: i64, unit: &str) -> QuantityUnitPair {
    QuantityUnitPair {
        id: UnitPairId::new(id),
        quantity: Decimal::from(quantity),
        unit: unit.to_string(),
        custom_unit: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngop_core::cost;

    #[test]
    fn seed_is_one_project_with_six_activities() {
        let projects = seed_projects();
        assert_eq!(projects.len(), 1);

        let project = &projects[0];
        assert_eq!(project.id.as_str(), "seed-project-001");
        assert_eq!(
            project.department.as_deref(),
            Some("กลุ่มงานพัฒนาระบบบริการคลินิกวัณโรค")
        );

        let ids: Vec<&str> = project.activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["act-001", "act-002", "act-003", "act-004", "act-005", "act-006"]
        );
        assert!(project
            .activities
            .iter()
            .all(|a| a.status == ActivityStatus::NotStarted));
    }

    #[test]
    fn mobile_screening_activity_totals_match_the_plan() {
        let projects = seed_projects();
        let screening = projects[0].activity(&ActivityId::new("act-002")).unwrap();
        assert_eq!(cost::activity_total(screening), Decimal::from(83900));
    }

    #[test]
    fn seed_project_total_matches_the_plan() {
        let projects = seed_projects();
        assert_eq!(cost::project_total(&projects[0]), Decimal::from(473_200));
        assert_eq!(cost::grand_total(&projects), Decimal::from(473_200));
    }
}
