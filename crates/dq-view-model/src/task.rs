//! Task Entity
//!
//! Remediation tasks tracked on the task board. The backend owns them; the
//! frontend mirrors the list, filters it and sends drafts back.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Region names offered in the task form, in display order
pub const REGION_NAMES: &[&str] = &[
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh",
    "Goa", "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand",
    "Karnataka", "Kerala", "Madhya Pradesh", "Maharashtra", "Manipur",
    "Meghalaya", "Mizoram", "Nagaland", "Odisha", "Punjab",
    "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal", "Delhi", "Jammu and Kashmir",
];

/// Task identifier; the backend may send it as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => TaskId(n.to_string()),
            RawId::Float(n) => TaskId(n.to_string()),
            RawId::Text(s) => TaskId(s),
        })
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Strict parse used for UI controls; `None` for "all" or unknown values
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::parse(&s).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    /// Filter button / dropdown text
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Status a checkbox toggle asks for
    pub fn from_checkbox(checked: bool) -> Self {
        if checked { TaskStatus::Done } else { TaskStatus::Pending }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus::parse(&s).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Region tag
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub anomaly_type: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Task {
    pub fn description_text(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn region_tag(&self) -> Option<&str> {
        present(&self.state)
    }

    pub fn anomaly_tag(&self) -> Option<&str> {
        present(&self.anomaly_type)
    }

    pub fn assignee(&self) -> Option<&str> {
        present(&self.assigned_to)
    }
}

/// `data` payload of the task list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Body of a create or edit request; every field is sent, empty when unset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub state: String,
    pub anomaly_type: String,
    pub priority: String,
    pub status: String,
    pub assigned_to: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            state: String::new(),
            anomaly_type: String::new(),
            priority: Priority::default().as_str().to_string(),
            status: TaskStatus::default().as_str().to_string(),
            assigned_to: String::new(),
        }
    }
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            state: task.state.clone().unwrap_or_default(),
            anomaly_type: task.anomaly_type.clone().unwrap_or_default(),
            priority: task.priority.as_str().to_string(),
            status: task.status.as_str().to_string(),
            assigned_to: task.assigned_to.clone().unwrap_or_default(),
        }
    }

    /// New-task draft prefilled from `?title=&description=`
    pub fn prefilled(title: &str, description: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Body of the checkbox toggle PATCH
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: TaskStatus,
}

/// Status and priority filters, both optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |s| task.status == s)
            && self.priority.map_or(true, |p| task.priority == p)
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Header counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            TaskStats { total: tasks.len(), ..Default::default() },
            |mut stats, task| {
                match task.status {
                    TaskStatus::Pending => stats.pending += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Done => stats.done += 1,
                }
                stats
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(id: &str, status: TaskStatus, priority: Priority) -> Task {
        Task {
            id: TaskId::from(id),
            title: format!("Task {}", id),
            description: None,
            state: None,
            anomaly_type: None,
            priority,
            status,
            assigned_to: None,
        }
    }

    #[test]
    fn test_task_decodes_numeric_and_string_ids() {
        let list: TaskList = serde_json::from_value(json!({
            "tasks": [
                { "id": 7, "title": "Fix PINs", "status": "in_progress", "priority": "high" },
                { "id": "a1", "title": "Dedupe", "description": "", "state": "Kerala" }
            ]
        })).unwrap();
        assert_eq!(list.tasks[0].id, TaskId::from("7"));
        assert_eq!(list.tasks[0].status, TaskStatus::InProgress);
        assert_eq!(list.tasks[0].priority, Priority::High);
        assert_eq!(list.tasks[1].id, TaskId::from("a1"));
        assert_eq!(list.tasks[1].status, TaskStatus::Pending);
        assert_eq!(list.tasks[1].description_text(), None);
        assert_eq!(list.tasks[1].region_tag(), Some("Kerala"));
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let t: Task = serde_json::from_value(json!({
            "id": 1, "title": "x", "status": "archived", "priority": "urgent"
        })).unwrap();
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.priority, Priority::Medium);
    }

    #[test]
    fn test_status_wire_and_labels() {
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), json!("in_progress"));
        assert_eq!(serde_json::to_value(StatusPatch { status: TaskStatus::Done }).unwrap(), json!({ "status": "done" }));
        assert_eq!(TaskStatus::Done.label(), "DONE");
        assert_eq!(TaskStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(TaskStatus::from_checkbox(true), TaskStatus::Done);
        assert_eq!(TaskStatus::from_checkbox(false), TaskStatus::Pending);
    }

    #[test]
    fn test_title_only_form_sends_empty_defaults() {
        let form = TaskForm { title: "Verify Kerala PINs".into(), ..Default::default() };
        assert!(form.is_submittable());
        assert_eq!(serde_json::to_value(&form).unwrap(), json!({
            "title": "Verify Kerala PINs",
            "description": "",
            "state": "",
            "anomaly_type": "",
            "priority": "medium",
            "status": "pending",
            "assigned_to": ""
        }));
        assert!(!TaskForm::default().is_submittable());
    }

    #[test]
    fn test_form_from_task_prefills_every_field() {
        let mut t = task("3", TaskStatus::Done, Priority::Low);
        t.description = Some("desc".into());
        t.state = Some("Goa".into());
        t.assigned_to = Some("asha".into());
        let form = TaskForm::from_task(&t);
        assert_eq!(form.title, "Task 3");
        assert_eq!(form.description, "desc");
        assert_eq!(form.state, "Goa");
        assert_eq!(form.anomaly_type, "");
        assert_eq!(form.priority, "low");
        assert_eq!(form.status, "done");
        assert_eq!(form.assigned_to, "asha");
    }

    #[test]
    fn test_prefilled_form() {
        let form = TaskForm::prefilled("Check Goa", None);
        assert_eq!(form.title, "Check Goa");
        assert_eq!(form.description, "");
        assert_eq!(form.status, "pending");
    }

    #[test]
    fn test_filter_intersection() {
        let tasks = vec![
            task("1", TaskStatus::Done, Priority::High),
            task("2", TaskStatus::Done, Priority::Low),
            task("3", TaskStatus::Pending, Priority::High),
            task("4", TaskStatus::Done, Priority::High),
        ];
        let filter = TaskFilter { status: Some(TaskStatus::Done), priority: Some(Priority::High) };
        let ids: Vec<_> = filter.apply(&tasks).into_iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec!["1", "4"]);

        assert_eq!(TaskFilter::default().apply(&tasks).len(), 4);
        let by_priority = TaskFilter { status: None, priority: Some(Priority::Low) };
        assert_eq!(by_priority.apply(&tasks).len(), 1);
    }

    #[test]
    fn test_stats() {
        let tasks = vec![
            task("1", TaskStatus::Done, Priority::High),
            task("2", TaskStatus::Pending, Priority::Low),
            task("3", TaskStatus::InProgress, Priority::High),
            task("4", TaskStatus::Pending, Priority::High),
        ];
        assert_eq!(
            TaskStats::from_tasks(&tasks),
            TaskStats { total: 4, pending: 2, in_progress: 1, done: 1 }
        );
    }

    #[test]
    fn test_region_names() {
        assert_eq!(REGION_NAMES.len(), 30);
        assert!(REGION_NAMES.contains(&"Kerala"));
    }
}
