use anyhow::{bail, Result};
use ngop_core::{cost, edit, format, groups, Project};

use crate::commands::{find_project, CommandContext};

pub fn list_projects(ctx: &CommandContext) -> Result<()> {
    let user = ctx.require_user()?;
    let projects = ctx.store.load();

    println!("จำนวนโครงการทั้งหมด: {}", projects.len());
    println!(
        "งบประมาณรวมทุกโครงการ: {} บาท",
        format::baht(cost::grand_total(&projects))
    );
    if projects.is_empty() {
        return Ok(());
    }
    println!();

    if user.is_admin() {
        // Administrators get the overview partitioned by mission group.
        let grouped = groups::group_projects(&projects);
        for mission in &grouped.missions {
            println!("{}", mission.mission_group);
            for bucket in &mission.work_groups {
                println!("  {}", bucket.work_group);
                for project in &bucket.projects {
                    println!("    {}", project_line(project));
                }
            }
        }
        if !grouped.other.is_empty() {
            println!("{}", groups::OTHER_GROUP_LABEL);
            for project in &grouped.other {
                println!("  {}", project_line(project));
            }
        }
    } else {
        for project in &projects {
            println!("{}", project_line(project));
        }
    }
    Ok(())
}

pub fn show_project(ctx: &CommandContext, project_id: &str) -> Result<()> {
    ctx.require_user()?;
    let projects = ctx.store.load();
    let project = find_project(&projects, project_id)?;

    println!("{}", project.name);
    if let Some(department) = &project.department {
        println!("หน่วยงาน: {department}");
    }
    if project.activities.is_empty() {
        println!("ไม่มีกิจกรรมในโครงการนี้");
    }

    for (index, activity) in project.activities.iter().enumerate() {
        println!();
        println!(
            "กิจกรรมที่ {}: {} [{}] ({})",
            index + 1,
            activity.name,
            activity.id,
            activity.status.label_th()
        );
        println!(
            "  ระยะเวลา: {} ถึง {}",
            format::thai_date(activity.start_date),
            format::thai_date(activity.end_date)
        );
        println!("  กลุ่มเป้าหมาย: {}", activity.target_group);
        for item in &activity.cost_items {
            let quantities = item
                .quantity_units
                .iter()
                .map(|pair| format!("{} {}", format::quantity(pair.quantity), pair.display_unit()))
                .collect::<Vec<_>>()
                .join(" x ");
            println!(
                "  - {} | {} | {} | {} บาท",
                item.name,
                quantities,
                format::baht(item.price_per_unit),
                format::baht(cost::line_total(item))
            );
        }
        println!("  รวม: {} บาท", format::baht(cost::activity_total(activity)));
    }

    println!();
    println!(
        "ยอดรวมทั้งโครงการ: {} บาท",
        format::baht(cost::project_total(project))
    );
    Ok(())
}

pub fn add_project(ctx: &CommandContext, name: &str) -> Result<()> {
    let user = ctx.require_editor()?;
    if name.trim().is_empty() {
        bail!("กรุณากรอกข้อมูลให้ครบถ้วนทุกช่อง");
    }

    let projects = ctx.store.load();
    let project = Project::new(name, None);
    let (updated, id) = edit::upsert_project(&projects, project, Some(&user.work_group));
    ctx.store.save(&updated)?;
    println!("created project {id}");
    Ok(())
}

pub fn delete_project(ctx: &CommandContext, project_id: &str) -> Result<()> {
    ctx.require_editor()?;
    let projects = ctx.store.load();
    if !projects.iter().any(|p| p.id.as_str() == project_id) {
        bail!("no project with id {project_id}");
    }

    let remaining: Vec<Project> = projects
        .into_iter()
        .filter(|p| p.id.as_str() != project_id)
        .collect();
    ctx.store.save(&remaining)?;
    println!("deleted project {project_id}");
    Ok(())
}

pub fn add_activity(ctx: &CommandContext, project_id: &str) -> Result<()> {
    ctx.require_editor()?;
    let projects = ctx.store.load();
    let project = find_project(&projects, project_id)?;

    let (updated_project, activity_id) = edit::add_activity(project);
    let (updated, _) = edit::upsert_project(&projects, updated_project, None);
    ctx.store.save(&updated)?;
    println!("created activity {activity_id}");
    Ok(())
}

fn project_line(project: &Project) -> String {
    format!(
        "[{}] {} | {} | {} กิจกรรม | {} บาท",
        project.id,
        project.name,
        project.department.as_deref().unwrap_or("-"),
        project.activities.len(),
        format::baht(cost::project_total(project))
    )
}
