use tasktracker_core::models::Task;

/// Pretty-printed JSON array with 2-space indentation.
pub fn render_tasks(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}

pub fn display_tasks(tasks: &[Task]) -> serde_json::Result<()> {
    println!("{}", render_tasks(tasks)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tasktracker_core::models::{TaskStatus, TIMESTAMP_FORMAT};

    fn ts(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn empty_list_is_an_empty_array() {
        assert_eq!(render_tasks(&[]).unwrap(), "[]");
    }

    #[test]
    fn renders_two_space_indented_objects() {
        let tasks = vec![Task {
            id: 1,
            description: "a".to_string(),
            status: TaskStatus::Done,
            created_at: ts("2024-05-01 09:30:00"),
            updated_at: None,
        }];

        let expected = r#"[
  {
    "id": 1,
    "name": "a",
    "status": "done",
    "created_at": "2024-05-01 09:30:00",
    "updated_at": null
  }
]"#;
        assert_eq!(render_tasks(&tasks).unwrap(), expected);
    }

    #[test]
    fn output_round_trips() {
        let tasks = vec![
            Task {
                id: 2,
                description: "quote \" and ünïcode".to_string(),
                status: TaskStatus::InProgress,
                created_at: ts("2024-05-01 09:30:00"),
                updated_at: Some(ts("2024-05-03 18:00:00")),
            },
            Task {
                id: 5,
                description: String::new(),
                status: TaskStatus::Todo,
                created_at: ts("2024-05-04 00:00:00"),
                updated_at: None,
            },
        ];

        let rendered = render_tasks(&tasks).unwrap();
        let parsed: Vec<Task> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, tasks);
        assert_eq!(render_tasks(&parsed).unwrap(), rendered);
    }
}
