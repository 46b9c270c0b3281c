//! Task store persisted to a key-value slot.
//!
//! Reads and writes never fail outward: missing or corrupt content loads as
//! an empty list, a single unreadable record is skipped, and a failed save is
//! logged while the in-memory list keeps working.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::slot::{save_json, KeyValueStore};
use crate::task::{Task, TaskDraft, TaskIcon};

pub const TASKS_KEY: &str = "planner_tasks";

#[derive(Debug)]
pub struct TaskStore<S> {
    slot: S,
    tasks: Vec<Task>,
    loaded: bool,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// An empty, not yet loaded store. Mutations are not persisted until
    /// [`load`](Self::load) has run, so stored tasks are never overwritten
    /// by an empty list.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            tasks: Vec::new(),
            loaded: false,
        }
    }

    pub fn open(slot: S) -> Self {
        let mut store = Self::new(slot);
        store.load();
        store
    }

    pub fn load(&mut self) {
        self.tasks = read_tasks(&self.slot);
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let task = build_task(draft, Utc::now());
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    pub fn create_many(&mut self, drafts: impl IntoIterator<Item = TaskDraft>) -> Vec<Task> {
        let now = Utc::now();
        let created: Vec<Task> = drafts.into_iter().map(|d| build_task(d, now)).collect();
        self.tasks.extend(created.iter().cloned());
        self.persist();
        created
    }

    /// Replace the editable fields of task `id`. `id`, `createdAt` and the
    /// completion flag are kept.
    pub fn update(&mut self, id: &str, draft: TaskDraft) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.title = draft.title;
        task.description = draft.description;
        task.task_date = draft.task_date;
        task.task_time = draft.task_time.filter(|t| !t.trim().is_empty());
        task.priority = draft.priority;
        task.icon = Some(icon_or_default(draft.icon));
        let updated = task.clone();
        self.persist();
        Some(updated)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Flip the completion flag. Returns the new state.
    pub fn toggle_completion(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist();
        Some(completed)
    }

    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.persist();
    }

    fn persist(&self) {
        if !self.loaded {
            return;
        }
        if let Err(err) = save_json(&self.slot, TASKS_KEY, &self.tasks) {
            tracing::warn!(error = %err, "unable to save tasks, keeping them in memory");
        }
    }
}

fn read_tasks(slot: &impl KeyValueStore) -> Vec<Task> {
    let content = match slot.get(TASKS_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "unable to read stored tasks, starting empty");
            return Vec::new();
        }
    };
    let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "stored tasks are corrupt, starting empty");
            return Vec::new();
        }
    };
    records
        .into_iter()
        .filter_map(|record| {
            let id = record
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<missing>")
                .to_string();
            serde_json::from_value::<Task>(record)
                .map_err(|err| tracing::warn!(task_id = %id, error = %err, "skipping unreadable stored task"))
                .ok()
        })
        .collect()
}

fn build_task(draft: TaskDraft, now: DateTime<Utc>) -> Task {
    Task {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        description: draft.description,
        task_date: draft.task_date,
        task_time: draft.task_time.filter(|t| !t.trim().is_empty()),
        priority: draft.priority,
        completed: false,
        created_at: now,
        icon: Some(icon_or_default(draft.icon)),
    }
}

fn icon_or_default(icon: Option<String>) -> String {
    icon.filter(|tag| !tag.trim().is_empty())
        .unwrap_or_else(|| TaskIcon::default().tag().to_string())
}
