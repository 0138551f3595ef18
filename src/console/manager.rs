use crate::console::task::{validate_description, validate_title, Task, TaskError};

/// In-memory task list with sequential ids and linear scans. Single user,
/// single thread; state lives only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a task and append it to the list.
    pub fn add_task(&mut self, title: &str, description: &str) -> Result<Task, TaskError> {
        let task = Task::new(self.next_id, title, description)?;
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Update title and/or description. `None` keeps the current value.
    pub fn update_task(
        &mut self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<&Task>, TaskError> {
        // Validate before mutating so a bad field leaves the task untouched
        let title = title.map(validate_title).transpose()?;
        let description = description.map(validate_description).transpose()?;

        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                if let Some(title) = title {
                    task.title = title;
                }
                if let Some(description) = description {
                    task.description = description;
                }
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    pub fn set_completed(&mut self, id: u64, completed: bool) -> Option<&Task> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = completed;
                Some(task)
            }
            None => None,
        }
    }

    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }
}
