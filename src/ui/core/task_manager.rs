use super::actions::{Action, Mutation, Page, PageData};
use crate::api::{ApiError, EmsApi};
use crate::constants::{ERROR_ADD_EMPLOYEE, ERROR_DELETE_EMPLOYEE, ERROR_FETCH_EMPLOYEES, ERROR_MARK_ATTENDANCE};
use crate::loader;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Reports the end of a page load when dropped, whichever way the load task ends
struct LoadingGuard {
    sender: mpsc::UnboundedSender<Action>,
    page: Page,
    seq: u64,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.sender.send(Action::LoadingFinished {
            page: self.page,
            seq: self.seq,
        });
    }
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Spawn the loader for a page
    ///
    /// Sends [`Action::PageLoaded`] with the data, then [`Action::LoadingFinished`].
    pub fn spawn_load(&mut self, api: Arc<dyn EmsApi>, page: Page, seq: u64) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Load {} (#{})", page.title(), seq);

        let handle = tokio::spawn(async move {
            let _guard = LoadingGuard {
                sender: action_sender.clone(),
                page,
                seq,
            };

            let data = match page {
                Page::Dashboard => PageData::Dashboard(loader::load_dashboard(api.as_ref()).await),
                Page::Employees => PageData::Employees(api.list_employees().await.map_err(|e| {
                    log::warn!("Failed to fetch employees: {}", e);
                    ERROR_FETCH_EMPLOYEES.to_string()
                })),
                Page::Attendance => PageData::Attendance(loader::load_attendance_page(api.as_ref()).await),
            };

            let _ = action_sender.send(Action::PageLoaded { seq, data });
        });

        self.track(handle, description)
    }

    /// Spawn a create/delete/mark operation
    pub fn spawn_mutation(&mut self, api: Arc<dyn EmsApi>, mutation: Mutation) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = mutation.describe();

        let handle = tokio::spawn(async move {
            let action = match run_mutation(api.as_ref(), &mutation).await {
                Ok(message) => {
                    log::info!("{} succeeded", mutation.describe());
                    Action::MutationSucceeded { mutation, message }
                }
                Err(e) => {
                    log::warn!("{} failed: {}", mutation.describe(), e);
                    let message = e.user_message(fallback_message(&mutation));
                    Action::MutationFailed { mutation, message }
                }
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description)
    }

    /// Deliver `action` after `delay` unless the returned handle is aborted first
    pub fn schedule(&mut self, delay: Duration, action: Action) -> AbortHandle {
        let action_sender = self.action_sender.clone();
        let description = format!("Timer {:?}", delay);
        // the countdown starts now, not when the task is first polled
        let deadline = tokio::time::Instant::now() + delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = action_sender.send(action);
        });
        let abort = handle.abort_handle();

        self.track(handle, description);
        abort
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Task {} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

async fn run_mutation(api: &dyn EmsApi, mutation: &Mutation) -> Result<Option<String>, ApiError> {
    match mutation {
        Mutation::CreateEmployee(employee) => api.create_employee(employee).await.map(|ack| ack.message),
        Mutation::DeleteEmployee(employee_id) => api.delete_employee(employee_id).await.map(|_| None),
        Mutation::MarkAttendance(entry) => api.mark_attendance(entry).await.map(|ack| ack.message),
    }
}

fn fallback_message(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::CreateEmployee(_) => ERROR_ADD_EMPLOYEE,
        Mutation::DeleteEmployee(_) => ERROR_DELETE_EMPLOYEE,
        Mutation::MarkAttendance(_) => ERROR_MARK_ATTENDANCE,
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
