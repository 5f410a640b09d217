// Job tracker: kanban board of job applications grouped by status.

pub mod board;
pub mod handlers;
