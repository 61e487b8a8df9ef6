//! Data-Quality Dashboard App
//!
//! Picks the page controller for the current path.

use dq_view_model::AppConfig;
use leptos::prelude::*;

use crate::dashboard::DashboardPage;
use crate::task_board::TaskBoardPage;

/// Path prefix served by the task board
pub const TASK_BOARD_PATH: &str = "/todo";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Page {
    Dashboard,
    TaskBoard,
}

impl Page {
    fn for_path(path: &str) -> Self {
        if path == TASK_BOARD_PATH || path.starts_with("/todo/") {
            Page::TaskBoard
        } else {
            Page::Dashboard
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let path = window().location().pathname().unwrap_or_default();
    let page = Page::for_path(&path);
    log::info!("mounting {:?} for {}", page, path);

    match page {
        Page::Dashboard => view! { <DashboardPage config=config /> }.into_any(),
        Page::TaskBoard => view! { <TaskBoardPage config=config /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_path() {
        assert_eq!(Page::for_path("/"), Page::Dashboard);
        assert_eq!(Page::for_path("/dashboard"), Page::Dashboard);
        assert_eq!(Page::for_path("/todo"), Page::TaskBoard);
        assert_eq!(Page::for_path("/todo/"), Page::TaskBoard);
        assert_eq!(Page::for_path("/todolist"), Page::Dashboard);
    }

    #[test]
    fn test_prefill_redirect_target_is_the_board() {
        assert!(!TASK_BOARD_PATH.ends_with('/'));
        assert_eq!(Page::for_path(TASK_BOARD_PATH), Page::TaskBoard);
    }
}
