//! Task Board Controller
//!
//! Loaded task list, filters and optimistic status overrides live in a
//! `reactive_stores` store; modal state lives in plain signals.

use dq_view_model::{
    Endpoints, Priority, StatusConflict, StatusOverlay, Task, TaskFilter, TaskForm, TaskId,
    TaskStatus, TaskStats,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsValue;

use crate::api;
use crate::app::TASK_BOARD_PATH;

/// Task board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskBoardState {
    /// Last list the server returned
    pub tasks: Vec<Task>,
    /// Optimistic statuses not yet confirmed by a reload
    pub overlay: StatusOverlay,
    pub filter: TaskFilter,
    pub loading: bool,
}

#[derive(Clone, Copy)]
pub struct TaskBoardController {
    api: StoredValue<Endpoints>,
    reconcile_delay_ms: u32,
    pub store: Store<TaskBoardState>,
    pub modal_open: RwSignal<bool>,
    /// Task being edited; `None` in create mode
    pub editing: RwSignal<Option<TaskId>>,
    pub form: RwSignal<TaskForm>,
}

fn log_conflicts(conflicts: &[StatusConflict]) {
    for c in conflicts {
        match c.server {
            Some(server) => log::warn!(
                "task {} shown as {} but server has {}",
                c.id, c.optimistic.as_str(), server.as_str()
            ),
            None => log::warn!("task {} toggled but no longer on the server", c.id),
        }
    }
}

impl TaskBoardController {
    pub fn new(api: Endpoints, reconcile_delay_ms: u32) -> Self {
        Self {
            api: StoredValue::new(api),
            reconcile_delay_ms,
            store: Store::new(TaskBoardState::default()),
            modal_open: RwSignal::new(false),
            editing: RwSignal::new(None),
            form: RwSignal::new(TaskForm::default()),
        }
    }

    // ========================
    // Loading
    // ========================

    /// Replace local state with the server list.
    ///
    /// `through` is the toggle generation this reload reconciles; `None`
    /// reconciles every outstanding toggle.
    pub async fn reload(self, through: Option<u64>) {
        self.store.loading().set(true);
        match api::list_tasks(&self.api.get_value()).await {
            Ok(tasks) => {
                let conflicts = {
                    let overlay_field = self.store.overlay();
                    let mut overlay = overlay_field.write();
                    match through {
                        Some(generation) => overlay.reconcile(&tasks, generation),
                        None => overlay.reconcile_all(&tasks),
                    }
                };
                log_conflicts(&conflicts);
                log::debug!("loaded {} tasks", tasks.len());
                self.store.tasks().set(tasks);
            }
            Err(e) => log::error!("Error loading tasks: {}", e),
        }
        self.store.loading().set(false);
    }

    // ========================
    // Filtering
    // ========================

    pub fn filter(self) -> TaskFilter {
        self.store.filter().get()
    }

    /// Loaded tasks matching both filters
    pub fn visible_tasks(self) -> Vec<Task> {
        let filter = self.filter();
        self.store.tasks().with(|tasks| filter.apply(tasks))
    }

    pub fn stats(self) -> TaskStats {
        self.store.tasks().with(|tasks| TaskStats::from_tasks(tasks))
    }

    pub fn set_status_filter(self, status: Option<TaskStatus>) {
        self.store.filter().update(|f| f.status = status);
    }

    pub fn set_priority_filter(self, priority: Option<Priority>) {
        self.store.filter().update(|f| f.priority = priority);
    }

    /// Status to draw for `task`, optimistic override included
    pub fn display_status(self, task: &Task) -> TaskStatus {
        self.store.overlay().with(|o| o.effective(task))
    }

    pub fn is_updating(self, id: &TaskId) -> bool {
        self.store.overlay().with(|o| o.is_pending(id))
    }

    // ========================
    // Modal
    // ========================

    /// Open in edit mode for `id`, or in create mode with a fresh form
    pub fn open_modal(self, id: Option<TaskId>) {
        let existing = id.as_ref().and_then(|id| {
            self.store
                .tasks()
                .with_untracked(|tasks| tasks.iter().find(|t| &t.id == id).cloned())
        });
        match existing {
            Some(task) => {
                self.form.set(TaskForm::from_task(&task));
                self.editing.set(Some(task.id));
            }
            None => {
                self.form.set(TaskForm::default());
                self.editing.set(None);
            }
        }
        self.modal_open.set(true);
    }

    pub fn open_prefilled(self, form: TaskForm) {
        self.form.set(form);
        self.editing.set(None);
        self.modal_open.set(true);
    }

    pub fn close_modal(self) {
        self.modal_open.set(false);
        self.editing.set(None);
    }

    /// Create or update from the form; the modal closes only on success
    pub fn submit(self) {
        let form = self.form.get_untracked();
        if !form.is_submittable() {
            return;
        }
        let editing = self.editing.get_untracked();
        spawn_local(async move {
            let api = self.api.get_value();
            let result = match &editing {
                Some(id) => api::update_task(&api, id, &form).await,
                None => api::create_task(&api, &form).await,
            };
            match result {
                Ok(()) => {
                    self.close_modal();
                    self.reload(None).await;
                }
                Err(e) => {
                    log::error!("Error saving task: {}", e);
                    alert(&e.user_message());
                }
            }
        });
    }

    // ========================
    // Status toggle
    // ========================

    /// Show the new status at once, persist it, then let the server decide
    pub fn toggle_status(self, id: TaskId, checked: bool) {
        let status = TaskStatus::from_checkbox(checked);
        let generation = self.store.overlay().write().apply(id.clone(), status);
        let delay = self.reconcile_delay_ms;

        spawn_local(async move {
            match api::update_task_status(&self.api.get_value(), &id, status).await {
                Ok(()) => TimeoutFuture::new(delay).await,
                Err(e) => log::error!("Error updating status: {}", e),
            }
            self.reload(Some(generation)).await;
        });
    }

    // ========================
    // URL prefill
    // ========================

    /// `?title=…&description=…` opens a prefilled create form, then resets the URL to the board
    pub fn apply_url_prefill(self) {
        let Some(window) = web_sys::window() else { return };
        let location = window.location();
        let search = location.search().unwrap_or_default();
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else { return };
        let Some(title) = params.get("title").filter(|t| !t.is_empty()) else { return };

        let description = params.get("description");
        self.open_prefilled(TaskForm::prefilled(&title, description.as_deref()));

        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(TASK_BOARD_PATH));
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
