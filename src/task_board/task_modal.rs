//! Task Modal Component
//!
//! Create/edit form. Every field is bound to the controller's draft.

use dq_view_model::task::REGION_NAMES;
use dq_view_model::{Priority, TaskForm, TaskStatus};
use leptos::prelude::*;

use super::TaskBoardController;

type Getter = fn(&TaskForm) -> &String;
type Setter = fn(&mut TaskForm, String);

#[component]
pub fn TaskModal() -> impl IntoView {
    let ctrl = use_context::<TaskBoardController>().expect("TaskBoardController should be provided");
    let form = ctrl.form;

    let value = move |get: Getter| move || form.with(|f| get(f).clone());
    let input = move |set: Setter| move |ev: web_sys::Event| form.update(|f| set(f, event_target_value(&ev)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctrl.submit();
    };

    view! {
        <div
            id="taskModal"
            class="modal"
            style:display=move || if ctrl.modal_open.get() { "flex" } else { "none" }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id="modalTitle">
                        {move || if ctrl.editing.with(Option::is_some) { "Edit Task" } else { "Add New Task" }}
                    </h2>
                    <button id="closeModal" type="button" class="close-btn" on:click=move |_| ctrl.close_modal()>
                        "×"
                    </button>
                </div>

                <form id="taskForm" on:submit=on_submit>
                    <label for="taskTitle">"Title"</label>
                    <input
                        id="taskTitle"
                        type="text"
                        required
                        prop:value=value(|f| &f.title)
                        on:input=input(|f, v| f.title = v)
                    />

                    <label for="taskDescription">"Description"</label>
                    <textarea
                        id="taskDescription"
                        rows="3"
                        prop:value=value(|f| &f.description)
                        on:input=input(|f, v| f.description = v)
                    ></textarea>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="taskState">"State"</label>
                            <select
                                id="taskState"
                                prop:value=value(|f| &f.state)
                                on:change=input(|f, v| f.state = v)
                            >
                                <option value="">"Select state"</option>
                                {REGION_NAMES.iter().map(|name| view! {
                                    <option value=*name>{*name}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-field">
                            <label for="taskAnomalyType">"Anomaly Type"</label>
                            <input
                                id="taskAnomalyType"
                                type="text"
                                prop:value=value(|f| &f.anomaly_type)
                                on:input=input(|f, v| f.anomaly_type = v)
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="taskPriority">"Priority"</label>
                            <select
                                id="taskPriority"
                                prop:value=value(|f| &f.priority)
                                on:change=input(|f, v| f.priority = v)
                            >
                                {Priority::ALL.iter().map(|p| view! {
                                    <option value=p.as_str()>{p.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-field">
                            <label for="taskStatus">"Status"</label>
                            <select
                                id="taskStatus"
                                prop:value=value(|f| &f.status)
                                on:change=input(|f, v| f.status = v)
                            >
                                {TaskStatus::ALL.iter().map(|s| view! {
                                    <option value=s.as_str()>{s.title()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <label for="taskAssignee">"Assigned To"</label>
                    <input
                        id="taskAssignee"
                        type="text"
                        prop:value=value(|f| &f.assigned_to)
                        on:input=input(|f, v| f.assigned_to = v)
                    />

                    <div class="modal-actions">
                        <button id="cancelTaskBtn" type="button" class="secondary-btn" on:click=move |_| ctrl.close_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn">"Save Task"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
