//! Progress tracking: status changes, narrative reports and attachment
//! references, recorded per activity.

use crate::domain::{ActivityId, ActivityStatus, AttachmentRef, Project};
use crate::edit::map_activity;

/// Moves the activity to the given status. Any status may follow any other,
/// so a completed activity can be reopened.
pub fn set_status(project: &Project, activity_id: &ActivityId, status: ActivityStatus) -> Project {
    map_activity(project, activity_id, |activity| {
        activity.status = status;
    })
}

/// Replaces the free-text progress report wholesale.
pub fn set_progress_report(project: &Project, activity_id: &ActivityId, report: &str) -> Project {
    map_activity(project, activity_id, |activity| {
        activity.progress_report = report.to_string();
    })
}

/// Replaces the activity's attachment references wholesale.
pub fn set_attachments(
    project: &Project,
    activity_id: &ActivityId,
    attachments: Vec<AttachmentRef>,
) -> Project {
    map_activity(project, activity_id, |activity| {
        activity.attachments = attachments;
    })
}
