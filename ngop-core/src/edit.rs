//! Pure tree mutators: every edit takes the current tree and returns a new
//! one, leaving the input untouched.
//!
//! All operations are total. A target id that matches nothing makes the
//! operation a no-op, never an error; ids and relative order of untouched
//! siblings are always preserved.

use crate::domain::{
    Activity, ActivityId, CostItem, CostItemId, Project, ProjectId, QuantityUnitPair, UnitPairId,
    OTHER_UNIT,
};

/// Appends a blank activity and reports its freshly generated id.
pub fn add_activity(project: &Project) -> (Project, ActivityId) {
    let mut updated = project.clone();
    let activity = Activity::new();
    let id = activity.id.clone();
    updated.activities.push(activity);
    (updated, id)
}

pub fn remove_activity(project: &Project, activity_id: &ActivityId) -> Project {
    let mut updated = project.clone();
    updated.activities.retain(|a| &a.id != activity_id);
    updated
}

/// Replaces the activity sharing the given one's id; no-op when absent.
pub fn update_activity(project: &Project, activity: Activity) -> Project {
    let mut updated = project.clone();
    if let Some(slot) = updated.activities.iter_mut().find(|a| a.id == activity.id) {
        *slot = activity;
    }
    updated
}

/// Appends a blank cost item under the given activity. Returns `None` for
/// the new id when the activity is absent (the call is then a no-op).
pub fn add_cost_item(project: &Project, activity_id: &ActivityId) -> (Project, Option<CostItemId>) {
    let mut new_id = None;
    let updated = map_activity(project, activity_id, |activity| {
        let item = CostItem::new();
        new_id = Some(item.id.clone());
        activity.cost_items.push(item);
    });
    (updated, new_id)
}

pub fn remove_cost_item(
    project: &Project,
    activity_id: &ActivityId,
    cost_item_id: &CostItemId,
) -> Project {
    map_activity(project, activity_id, |activity| {
        activity.cost_items.retain(|c| &c.id != cost_item_id);
    })
}

pub fn update_cost_item(project: &Project, activity_id: &ActivityId, item: CostItem) -> Project {
    map_activity(project, activity_id, |activity| {
        if let Some(slot) = activity.cost_items.iter_mut().find(|c| c.id == item.id) {
            *slot = item;
        }
    })
}

/// Appends a `1 ×` pair under the given cost item.
pub fn add_unit_pair(
    project: &Project,
    activity_id: &ActivityId,
    cost_item_id: &CostItemId,
) -> (Project, Option<UnitPairId>) {
    let mut new_id = None;
    let updated = map_cost_item(project, activity_id, cost_item_id, |item| {
        let pair = QuantityUnitPair::new();
        new_id = Some(pair.id.clone());
        item.quantity_units.push(pair);
    });
    (updated, new_id)
}

pub fn remove_unit_pair(
    project: &Project,
    activity_id: &ActivityId,
    cost_item_id: &CostItemId,
    pair_id: &UnitPairId,
) -> Project {
    map_cost_item(project, activity_id, cost_item_id, |item| {
        item.quantity_units.retain(|p| &p.id != pair_id);
    })
}

/// Replaces the pair sharing the given one's id. A pair whose unit moved
/// away from `"อื่นๆ"` loses its custom unit text.
pub fn update_unit_pair(
    project: &Project,
    activity_id: &ActivityId,
    cost_item_id: &CostItemId,
    mut pair: QuantityUnitPair,
) -> Project {
    if pair.unit != OTHER_UNIT {
        pair.custom_unit = None;
    }
    map_cost_item(project, activity_id, cost_item_id, |item| {
        if let Some(slot) = item.quantity_units.iter_mut().find(|p| p.id == pair.id) {
            *slot = pair;
        }
    })
}

/// Commits one project into the list: replaces the entry sharing its id, or
/// appends with a freshly generated id when the id is empty or unknown. An
/// empty department falls back to the caller's work group, the way the form
/// fills it from the logged-in user.
pub fn upsert_project(
    projects: &[Project],
    mut project: Project,
    default_department: Option<&str>,
) -> (Vec<Project>, ProjectId) {
    if project
        .department
        .as_deref()
        .map(str::is_empty)
        .unwrap_or(true)
    {
        project.department = default_department.map(str::to_string);
    }

    let mut updated = projects.to_vec();
    let exists = !project.id.is_empty() && projects.iter().any(|p| p.id == project.id);
    if exists {
        let id = project.id.clone();
        if let Some(slot) = updated.iter_mut().find(|p| p.id == id) {
            *slot = project;
        }
        (updated, id)
    } else {
        project.id = ProjectId::generate();
        let id = project.id.clone();
        updated.push(project);
        (updated, id)
    }
}

pub(crate) fn map_activity(
    project: &Project,
    activity_id: &ActivityId,
    edit: impl FnOnce(&mut Activity),
) -> Project {
    let mut updated = project.clone();
    if let Some(activity) = updated.activities.iter_mut().find(|a| &a.id == activity_id) {
        edit(activity);
    }
    updated
}

fn map_cost_item(
    project: &Project,
    activity_id: &ActivityId,
    cost_item_id: &CostItemId,
    edit: impl FnOnce(&mut CostItem),
) -> Project {
    map_activity(project, activity_id, |activity| {
        if let Some(item) = activity
            .cost_items
            .iter_mut()
            .find(|c| &c.id == cost_item_id)
        {
            edit(item);
        }
    })
}
