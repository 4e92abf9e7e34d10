//! Organizational catalogue and the partition of the project list used by
//! the privileged overview: projects bucket by department under their
//! mission group, and anything unplaced lands in a trailing "other" bucket.

use crate::domain::Project;

/// Heading for projects whose department is missing or not in the catalogue.
pub const OTHER_GROUP_LABEL: &str = "อื่นๆ / ไม่ระบุหน่วยงาน";

/// Mission groups and the work groups (departments) each one owns, in
/// presentation order.
pub const MISSION_GROUPS: [(&str, &[&str]); 2] = [
    (
        "กลุ่มภารกิจยุทธศาสตร์ แผนงาน และพัฒนาองค์กร",
        &["กลุ่มงานยุทธศาสตร์และแผนงาน"],
    ),
    (
        "กลุ่มภารกิจพัฒนาระบบบริการ",
        &["กลุ่มงานพัฒนาระบบบริการคลินิกวัณโรค"],
    ),
];

#[derive(Debug, PartialEq)]
pub struct WorkGroupBucket<'a> {
    pub work_group: &'static str,
    pub projects: Vec<&'a Project>,
}

#[derive(Debug, PartialEq)]
pub struct MissionGroupBucket<'a> {
    pub mission_group: &'static str,
    pub work_groups: Vec<WorkGroupBucket<'a>>,
}

/// The full partition. `other` collects projects the catalogue cannot
/// place; it may be empty.
#[derive(Debug, PartialEq)]
pub struct GroupedProjects<'a> {
    pub missions: Vec<MissionGroupBucket<'a>>,
    pub other: Vec<&'a Project>,
}

/// True when the department is one the catalogue knows about.
pub fn is_known_department(department: &str) -> bool {
    MISSION_GROUPS
        .into_iter()
        .flat_map(|(_, work_groups)| work_groups.iter().copied())
        .any(|work_group| work_group == department)
}

/// Partitions projects by catalogue order. Mission groups and work groups
/// without any project are omitted; within a bucket, projects keep their
/// input order.
pub fn group_projects(projects: &[Project]) -> GroupedProjects<'_> {
    let missions = MISSION_GROUPS
        .into_iter()
        .filter_map(|(mission_group, work_groups)| {
            let buckets: Vec<WorkGroupBucket<'_>> = work_groups
                .iter()
                .copied()
                .filter_map(|work_group| {
                    let members: Vec<&Project> = projects
                        .iter()
                        .filter(|p| p.department.as_deref() == Some(work_group))
                        .collect();
                    if members.is_empty() {
                        None
                    } else {
                        Some(WorkGroupBucket {
                            work_group,
                            projects: members,
                        })
                    }
                })
                .collect();
            if buckets.is_empty() {
                None
            } else {
                Some(MissionGroupBucket {
                    mission_group,
                    work_groups: buckets,
                })
            }
        })
        .collect();

    let other = projects
        .iter()
        .filter(|p| {
            p.department
                .as_deref()
                .map(|d| !is_known_department(d))
                .unwrap_or(true)
        })
        .collect();

    GroupedProjects { missions, other }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_in(department: Option<&str>, name: &str) -> Project {
        Project::new(name, department.map(str::to_string))
    }

    #[test]
    fn known_departments_land_under_their_mission_group() {
        let projects = vec![
            project_in(Some("กลุ่มงานพัฒนาระบบบริการคลินิกวัณโรค"), "โครงการคลินิก"),
            project_in(Some("กลุ่มงานยุทธศาสตร์และแผนงาน"), "โครงการแผนงาน"),
        ];

        let grouped = group_projects(&projects);
        assert_eq!(grouped.missions.len(), 2);
        assert_eq!(
            grouped.missions[0].mission_group,
            "กลุ่มภารกิจยุทธศาสตร์ แผนงาน และพัฒนาองค์กร"
        );
        assert_eq!(grouped.missions[0].work_groups[0].projects[0].name, "โครงการแผนงาน");
        assert_eq!(
            grouped.missions[1].work_groups[0].projects[0].name,
            "โครงการคลินิก"
        );
        assert!(grouped.other.is_empty());
    }

    #[test]
    fn unknown_and_missing_departments_fall_into_other() {
        let projects = vec![
            project_in(None, "ไม่มีหน่วยงาน"),
            project_in(Some("หน่วยงานนอกสารบบ"), "นอกสารบบ"),
        ];

        let grouped = group_projects(&projects);
        assert!(grouped.missions.is_empty());
        let names: Vec<&str> = grouped.other.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ไม่มีหน่วยงาน", "นอกสารบบ"]);
    }

    #[test]
    fn empty_buckets_are_omitted() {
        let projects = vec![project_in(Some("กลุ่มงานยุทธศาสตร์และแผนงาน"), "เดี่ยว")];
        let grouped = group_projects(&projects);
        assert_eq!(grouped.missions.len(), 1);
        assert_eq!(grouped.missions[0].work_groups.len(), 1);
    }

    #[test]
    fn bucket_order_follows_input_order() {
        let projects = vec![
            project_in(Some("กลุ่มงานยุทธศาสตร์และแผนงาน"), "ก่อน"),
            project_in(Some("กลุ่มงานยุทธศาสตร์และแผนงาน"), "หลัง"),
        ];
        let grouped = group_projects(&projects);
        let names: Vec<&str> = grouped.missions[0].work_groups[0]
            .projects
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["ก่อน", "หลัง"]);
    }

    #[test]
    fn catalogue_lookup_matches_exact_department_names() {
        assert!(is_known_department("กลุ่มงานยุทธศาสตร์และแผนงาน"));
        assert!(!is_known_department("กลุ่มงานยุทธศาสตร์"));
    }
}
