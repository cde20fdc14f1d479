// One submodule per verb. Each takes the repository and its parsed
// arguments, performs one unit of work and prints the result.

pub mod add;
pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

use tasktracker_core::models::TaskId;

pub(crate) fn not_found_message(id: TaskId) -> String {
    format!("Couldn't find task with id: {id}")
}
