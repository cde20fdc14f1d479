use tasktracker_core::models::{format_timestamp, Task};

/// Total width of a row whose values fit their columns.
pub const TABLE_WIDTH: usize = 91;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTask {
    pub id: String,
    pub name: String,
    pub status: String,
    pub created: String,
    pub updated: String,
}

impl From<&Task> for ViewTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            name: task.description.clone(),
            status: task.status.to_string(),
            created: format_timestamp(&task.created_at),
            updated: task
                .updated_at
                .as_ref()
                .map_or_else(|| "-".to_string(), format_timestamp),
        }
    }
}

fn format_row(id: &str, name: &str, status: &str, created: &str, updated: &str) -> String {
    // Values wider than their column are printed in full, never truncated.
    format!("{id:>3}  {name:<30}  {status:<12}  {created:<19}  {updated:<19}")
}

/// Renders the fixed-width table: header, divider, then one row per task.
pub fn render_tasks(tasks: &[ViewTask]) -> String {
    let mut out = String::new();
    out.push_str(&format_row("ID", "NAME", "STATUS", "CREATED", "UPDATED"));
    out.push('\n');
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for task in tasks {
        out.push_str(&format_row(
            &task.id,
            &task.name,
            &task.status,
            &task.created,
            &task.updated,
        ));
        out.push('\n');
    }
    out
}

pub fn display_tasks(tasks: &[ViewTask]) {
    print!("{}", render_tasks(tasks));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;
    use tasktracker_core::models::{TaskStatus, TIMESTAMP_FORMAT};

    fn task(id: i64, description: &str, status: TaskStatus, updated: Option<&str>) -> Task {
        let parse = |raw: &str| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).unwrap();
        Task {
            id,
            description: description.to_string(),
            status,
            created_at: parse("2024-05-01 09:30:00"),
            updated_at: updated.map(parse),
        }
    }

    #[test]
    fn empty_table_has_header_and_divider_only() {
        let rendered = render_tasks(&[]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            " ID  NAME                            STATUS        CREATED              UPDATED            "
        );
        assert_eq!(lines[1], "-".repeat(91));
        assert_eq!(lines[0].len(), TABLE_WIDTH);
    }

    #[test]
    fn missing_updated_at_renders_dash() {
        let view = ViewTask::from(&task(1, "write spec", TaskStatus::Todo, None));
        let rendered = render_tasks(&[view]);
        let row = rendered.lines().nth(2).unwrap();

        assert_eq!(
            row,
            "  1  write spec                      todo          2024-05-01 09:30:00  -                  "
        );
    }

    #[test]
    fn updated_row_shows_timestamp() {
        let view = ViewTask::from(&task(
            12,
            "ship it",
            TaskStatus::InProgress,
            Some("2024-05-02 10:00:05"),
        ));
        let rendered = render_tasks(&[view]);
        let row = rendered.lines().nth(2).unwrap();

        assert_eq!(
            row,
            " 12  ship it                         in-progress   2024-05-01 09:30:00  2024-05-02 10:00:05"
        );
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "a".repeat(45);
        let view = ViewTask::from(&task(3, &name, TaskStatus::Done, None));
        let rendered = render_tasks(&[view]);
        let row = rendered.lines().nth(2).unwrap();

        assert!(row.contains(&name));
        assert_eq!(row.chars().count(), TABLE_WIDTH + 15);
    }

    proptest! {
        #[test]
        fn fitting_rows_have_fixed_width(
            id in 1i64..1000,
            name in "[a-zA-Z0-9 ]{0,30}",
            status_idx in 0usize..3,
        ) {
            let status = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done][status_idx];
            let view = ViewTask::from(&task(id, &name, status, None));
            let rendered = render_tasks(&[view]);
            let row = rendered.lines().nth(2).unwrap();

            prop_assert_eq!(row.chars().count(), TABLE_WIDTH);
            prop_assert_eq!(row[..3].trim_start(), id.to_string());
            let status_column = format!("{:<12}", status.as_str());
            let updated_column = format!("{:<19}", "-");
            prop_assert_eq!(&row[37..49], status_column.as_str());
            prop_assert!(row.ends_with(&updated_column));
        }
    }
}
