//! Per-project summary report: a document model built from the tree plus a
//! deterministic plain-text rendering of it. Same input, same bytes.

use std::fmt::Write as _;

use itertools::Itertools;

use crate::cost;
use crate::domain::Project;
use crate::format;

pub const REPORT_TITLE: &str = "รายงานผลการดำเนินงานโครงการ";
pub const EMPTY_PROGRESS_PLACEHOLDER: &str = "ยังไม่มีการรายงานผล";
const COST_TABLE_HEADER: &str = "รายการ | จำนวน/หน่วย | ราคา/หน่วย | รวม";

#[derive(Debug, PartialEq)]
pub struct ProjectReport {
    pub project_name: String,
    pub department: Option<String>,
    pub activities: Vec<ActivityReport>,
    /// Project grand total, already formatted as baht.
    pub total: String,
}

#[derive(Debug, PartialEq)]
pub struct ActivityReport {
    /// 1-based position in the project, as shown in the heading.
    pub number: usize,
    pub name: String,
    pub status_label: &'static str,
    pub period: String,
    pub target_group: String,
    pub rows: Vec<CostRow>,
    pub progress: String,
}

#[derive(Debug, PartialEq)]
pub struct CostRow {
    pub name: String,
    pub quantities: String,
    pub price_per_unit: String,
    pub total: String,
}

/// Collects everything the printable report shows into one value.
pub fn build(project: &Project) -> ProjectReport {
    let activities = project
        .activities
        .iter()
        .enumerate()
        .map(|(index, activity)| {
            let rows = activity
                .cost_items
                .iter()
                .map(|item| CostRow {
                    name: item.name.clone(),
                    quantities: item
                        .quantity_units
                        .iter()
                        .map(|pair| {
                            format!("{} {}", format::quantity(pair.quantity), pair.display_unit())
                        })
                        .join(" x "),
                    price_per_unit: format::baht(item.price_per_unit),
                    total: format::baht(cost::line_total(item)),
                })
                .collect();

            let progress = if activity.progress_report.is_empty() {
                EMPTY_PROGRESS_PLACEHOLDER.to_string()
            } else {
                activity.progress_report.clone()
            };

            ActivityReport {
                number: index + 1,
                name: activity.name.clone(),
                status_label: activity.status.label_th(),
                period: format!(
                    "{} ถึง {}",
                    format::thai_date(activity.start_date),
                    format::thai_date(activity.end_date)
                ),
                target_group: activity.target_group.clone(),
                rows,
                progress,
            }
        })
        .collect();

    ProjectReport {
        project_name: project.name.clone(),
        department: project.department.clone(),
        activities,
        total: format::baht(cost::project_total(project)),
    }
}

/// Renders the document as UTF-8 text, one block per activity.
pub fn render_text(report: &ProjectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "{}", report.project_name);
    if let Some(department) = &report.department {
        let _ = writeln!(out, "หน่วยงาน: {department}");
    }

    for activity in &report.activities {
        let _ = writeln!(out);
        let _ = writeln!(out, "กิจกรรมที่ {}: {}", activity.number, activity.name);
        let _ = writeln!(out, "สถานะ: {}", activity.status_label);
        let _ = writeln!(out, "ระยะเวลา: {}", activity.period);
        let _ = writeln!(out, "กลุ่มเป้าหมาย: {}", activity.target_group);
        let _ = writeln!(out, "รายละเอียดค่าใช้จ่าย");
        let _ = writeln!(out, "{COST_TABLE_HEADER}");
        for row in &activity.rows {
            let _ = writeln!(
                out,
                "{} | {} | {} | {}",
                row.name, row.quantities, row.price_per_unit, row.total
            );
        }
        let _ = writeln!(out, "ความก้าวหน้า/ผลการดำเนินงาน");
        let _ = writeln!(out, "{}", activity.progress);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "ยอดรวมงบประมาณ: {} บาท", report.total);
    out
}

/// Builds and renders in one step.
pub fn render(project: &Project) -> String {
    render_text(&build(project))
}

/// One file per project, named after it.
pub fn file_name(project: &Project) -> String {
    format!("รายงานโครงการ-{}.txt", project.name)
}
