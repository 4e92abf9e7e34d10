//! File-backed project store: one JSON document holding the full project
//! list, plus a debounced watcher for cross-process change notification.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam::channel::{unbounded, Receiver};
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use sha2::{Digest, Sha256};
use thiserror::Error;

use ngop_core::{AttachmentRef, Project};

use crate::seed;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("store watch error: {0}")]
    Watch(#[from] notify_debouncer_full::notify::Error),
}

/// Notification that the persisted list changed underneath a subscriber.
/// The only sane reaction is a full reload; merging is never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Changed,
}

/// Owns the persisted project list. Pass it by reference to whoever needs
/// access; there is no global instance.
pub struct ProjectStore {
    path: PathBuf,
    // Digest of our own last write, used to drop self-inflicted watch events.
    last_written: Arc<Mutex<Option<[u8; 32]>>>,
}

impl ProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_written: Arc::new(Mutex::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted list. Never fails: a missing file means first
    /// run, so the seed dataset is returned and written back; an unreadable
    /// or unparsable file falls back to the seed without touching the file.
    /// An empty persisted list stays empty.
    pub fn load(&self) -> Vec<Project> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let seeded = seed::seed_projects();
                if let Err(e) = self.save(&seeded) {
                    tracing::warn!("could not persist the first-run seed: {e}");
                }
                return seeded;
            }
            Err(e) => {
                tracing::warn!(
                    "could not read {}: {e}; falling back to the seed dataset",
                    self.path.display()
                );
                return seed::seed_projects();
            }
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(mut projects) => {
                strip_attachments(&mut projects);
                projects
            }
            Err(e) => {
                tracing::warn!(
                    "could not parse {}: {e}; falling back to the seed dataset",
                    self.path.display()
                );
                seed::seed_projects()
            }
        }
    }

    /// Persists the full list as pretty JSON. Attachment references are
    /// session-scoped and never survive a save.
    pub fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        let mut snapshot = projects.to_vec();
        strip_attachments(&mut snapshot);

        let json = serde_json::to_string_pretty(&snapshot)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, &json)?;

        if let Ok(mut guard) = self.last_written.lock() {
            *guard = Some(digest(json.as_bytes()));
        }
        Ok(())
    }

    /// Starts watching the persisted file and returns a receiver of change
    /// events. Events caused by this store's own `save` are suppressed by
    /// comparing the file digest against the last write. Last writer wins;
    /// subscribers reload the full snapshot, they do not merge.
    pub fn subscribe(&self) -> Result<StoreWatcher, StoreError> {
        let (tx, rx) = unbounded();
        let path = self.path.clone();
        let last_written = Arc::clone(&self.last_written);

        let mut debouncer = new_debouncer(
            Duration::from_millis(500),
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    // The watch covers the whole parent directory, so match
                    // our file by name and ignore siblings.
                    let relevant = events.iter().any(|e| {
                        use notify_debouncer_full::notify::EventKind;
                        matches!(e.event.kind, EventKind::Modify(_) | EventKind::Create(_))
                            && e.event
                                .paths
                                .iter()
                                .any(|p| p.file_name() == path.file_name())
                    });
                    if !relevant {
                        return;
                    }

                    let current = std::fs::read(&path).ok().map(|bytes| digest(&bytes));
                    let own_write = current.is_some()
                        && last_written
                            .lock()
                            .map(|guard| *guard == current)
                            .unwrap_or(false);
                    if !own_write {
                        let _ = tx.send(StoreEvent::Changed);
                    }
                }
                Err(errors) => {
                    for e in errors {
                        tracing::warn!(err = %e, "store watcher error");
                    }
                }
            },
        )?;

        {
            use notify_debouncer_full::notify::Watcher as _;
            // Watch the parent directory: editors and atomic writers replace
            // the file, which would detach a watch on the file itself.
            let watch_path = self.path.parent().unwrap_or_else(|| Path::new("."));
            debouncer.watcher().watch(
                watch_path,
                notify_debouncer_full::notify::RecursiveMode::NonRecursive,
            )?;
        }

        Ok(StoreWatcher {
            rx,
            _debouncer: debouncer,
        })
    }
}

/// Keeps the debounced watcher alive; dropping it stops the file watch.
pub struct StoreWatcher {
    rx: Receiver<StoreEvent>,
    _debouncer: notify_debouncer_full::Debouncer<
        notify_debouncer_full::notify::RecommendedWatcher,
        notify_debouncer_full::FileIdMap,
    >,
}

impl StoreWatcher {
    pub fn events(&self) -> &Receiver<StoreEvent> {
        &self.rx
    }
}

/// Reads a file and turns it into a content-addressed attachment reference.
pub fn attachment_from_file(path: &Path) -> Result<AttachmentRef, StoreError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment");
    Ok(AttachmentRef::new(file_name, hex::encode(digest(&bytes))))
}

fn strip_attachments(projects: &mut [Project]) {
    for project in projects {
        for activity in &mut project.activities {
            activity.attachments.clear();
        }
    }
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngop_core::{Activity, ActivityStatus};
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> ProjectStore {
        ProjectStore::new(dir.path().join("projects.json"))
    }

    #[test]
    fn first_run_returns_the_seed_and_persists_it() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let projects = store.load();
        assert_eq!(projects, seed::seed_projects());
        // The seed is durable: the file now exists and holds the same list.
        assert!(store.path().exists());
        assert_eq!(store.load(), projects);
    }

    #[test]
    fn an_empty_list_stays_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn unparsable_file_falls_back_to_the_seed_without_overwriting() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load(), seed::seed_projects());
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "{not json");
    }

    #[test]
    fn save_after_load_is_byte_for_byte_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let projects = store.load();
        store.save(&projects).unwrap();
        let first = std::fs::read(store.path()).unwrap();

        store.save(&store.load()).unwrap();
        let second = std::fs::read(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn attachments_do_not_survive_a_save() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut project = ngop_core::Project::new("โครงการแนบไฟล์", None);
        let mut activity = Activity::new();
        activity
            .attachments
            .push(AttachmentRef::new("ภาพ.jpg", "ff00"));
        project.activities.push(activity);

        store.save(&[project]).unwrap();
        let reloaded = store.load();
        assert!(reloaded[0].activities[0].attachments.is_empty());
    }

    #[test]
    fn persisted_record_without_status_loads_as_not_started() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let raw = r#"[
          {
            "id": "p-1",
            "name": "โครงการเก่า",
            "activities": [
              {
                "id": "a-1",
                "name": "กิจกรรมเก่า",
                "startDate": "2026-10-01",
                "endDate": "",
                "targetGroup": "",
                "costItems": []
              }
            ]
          }
        ]"#;
        std::fs::write(store.path(), raw).unwrap();

        let projects = store.load();
        assert_eq!(projects[0].activities[0].status, ActivityStatus::NotStarted);
        assert_eq!(projects[0].activities[0].end_date, None);
    }

    #[test]
    fn external_write_delivers_a_change_event() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&[]).unwrap();

        let watcher = store.subscribe().unwrap();
        // Simulate another process rewriting the file.
        std::fs::write(store.path(), "[]\n").unwrap();

        let event = watcher
            .events()
            .recv_timeout(Duration::from_secs(10))
            .unwrap();
        assert_eq!(event, StoreEvent::Changed);
    }

    #[test]
    fn attachment_reference_carries_name_and_content_digest() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("รายงาน.jpg");
        std::fs::write(&file, b"binary-ish").unwrap();

        let reference = attachment_from_file(&file).unwrap();
        assert_eq!(reference.file_name, "รายงาน.jpg");
        assert_eq!(reference.digest.len(), 64);
        // Same content, same digest.
        assert_eq!(attachment_from_file(&file).unwrap().digest, reference.digest);
    }
}
