//! Task Endpoints

use dq_view_model::task::TaskList;
use dq_view_model::{ApiError, Endpoints, StatusPatch, Task, TaskForm, TaskId, TaskStatus};

use super::{get, send};

pub async fn list_tasks(api: &Endpoints) -> Result<Vec<Task>, ApiError> {
    let list: TaskList = get(&api.tasks()).await?;
    Ok(list.tasks)
}

pub async fn create_task(api: &Endpoints, form: &TaskForm) -> Result<(), ApiError> {
    send("POST", &api.tasks(), form).await
}

/// Partial update; the form carries every editable field
pub async fn update_task(api: &Endpoints, id: &TaskId, form: &TaskForm) -> Result<(), ApiError> {
    send("PATCH", &api.task(&id.0), form).await
}

pub async fn update_task_status(api: &Endpoints, id: &TaskId, status: TaskStatus) -> Result<(), ApiError> {
    send("PATCH", &api.task(&id.0), &StatusPatch { status }).await
}
