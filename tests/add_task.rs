#[cfg(test)]
mod tests {
    use ptm::commands::demo::{add_samples, SAMPLE_TASKS};
    use ptm::db::repository::TaskRepository;
    use ptm::db::tasks::JsonTaskRepository;
    use ptm::libs::error::{Field, RepositoryError, TaskError};
    use ptm::libs::task::{Priority, TaskCollection, TaskStatus, TIMESTAMP_FORMAT};
    use ptm::libs::validator::TaskManager;
    use chrono::NaiveDateTime;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AddTaskContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        manager: TaskManager<JsonTaskRepository>,
    }

    impl TestContext for AddTaskContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks_database.json");
            let manager = TaskManager::new(JsonTaskRepository::new(&db_path));
            AddTaskContext { _temp_dir: temp_dir, db_path, manager }
        }
    }

    impl AddTaskContext {
        fn stored(&self) -> TaskCollection {
            self.manager.repository().load()
        }
    }

    /// Keeps tasks in memory and counts writes.
    #[derive(Default)]
    struct MemoryRepository {
        tasks: RefCell<TaskCollection>,
        saves: RefCell<usize>,
    }

    impl TaskRepository for MemoryRepository {
        fn load(&self) -> TaskCollection {
            self.tasks.borrow().clone()
        }

        fn save(&self, tasks: &TaskCollection) -> Result<(), RepositoryError> {
            *self.tasks.borrow_mut() = tasks.clone();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_add_valid_task(ctx: &mut AddTaskContext) {
        let task = ctx
            .manager
            .add_new_task("Buy book", Some("Software engineering book"), "2025-07-20", "High")
            .unwrap();

        assert!(uuid::Uuid::parse_str(&task.id).is_ok());
        assert_eq!(task.title, "Buy book");
        assert_eq!(task.description, "Software engineering book");
        assert_eq!(task.due_date, "2025-07-20");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::NotCompleted);
        assert_eq!(task.created_at, task.last_updated_at);
        assert!(NaiveDateTime::parse_from_str(&task.created_at, TIMESTAMP_FORMAT).is_ok());

        assert_eq!(ctx.stored(), vec![task]);
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_title_is_trimmed_and_description_defaults_to_empty(ctx: &mut AddTaskContext) {
        let task = ctx.manager.add_new_task("  Exercise  ", None, "2025-07-21", "Medium").unwrap();

        assert_eq!(task.title, "Exercise");
        assert_eq!(task.description, "");
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_ids_are_unique(ctx: &mut AddTaskContext) {
        let first = ctx.manager.add_new_task("Task 1", None, "2025-07-20", "Low").unwrap();
        let second = ctx.manager.add_new_task("Task 2", None, "2025-07-20", "Low").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ctx.stored().len(), 2);
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_blank_title_is_rejected_without_writing(ctx: &mut AddTaskContext) {
        for title in ["", "   ", "\t\n"] {
            let result = ctx.manager.add_new_task(title, Some("No title"), "2025-07-22", "Low");
            assert!(matches!(result, Err(TaskError::EmptyField(Field::Title))));
        }
        assert!(!ctx.db_path.exists());
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_blank_due_date_is_rejected(ctx: &mut AddTaskContext) {
        let result = ctx.manager.add_new_task("Buy book", None, "  ", "High");
        assert!(matches!(result, Err(TaskError::EmptyField(Field::DueDate))));
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_title_is_checked_before_due_date(ctx: &mut AddTaskContext) {
        let result = ctx.manager.add_new_task("", None, "", "Nope");
        assert!(matches!(result, Err(TaskError::EmptyField(Field::Title))));
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_malformed_due_dates_are_rejected(ctx: &mut AddTaskContext) {
        for due in ["2025/07/20", "July 20 2025", "20-07-2025", "2025-13-40", "2025-7-20"] {
            let result = ctx.manager.add_new_task("Buy book", None, due, "High");
            match result {
                Err(TaskError::InvalidDateFormat(value)) => assert_eq!(value, due),
                other => panic!("expected InvalidDateFormat for {due}, got {other:?}"),
            }
        }
        assert!(!ctx.db_path.exists());
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_unknown_priorities_are_rejected(ctx: &mut AddTaskContext) {
        for priority in ["high", "HIGH", "Urgent", "", " High"] {
            let result = ctx.manager.add_new_task("Buy book", None, "2025-07-20", priority);
            assert!(matches!(result, Err(TaskError::InvalidPriority(_))), "{priority:?}");
        }
        assert!(!ctx.db_path.exists());
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_duplicate_title_and_due_date_is_rejected(ctx: &mut AddTaskContext) {
        ctx.manager.add_new_task("Buy book", None, "2025-07-20", "High").unwrap();
        let before = fs::read_to_string(&ctx.db_path).unwrap();

        let result = ctx.manager.add_new_task("buy book", Some("Another description"), "2025-07-20", "Low");
        match result {
            Err(TaskError::DuplicateTask { title, due_date }) => {
                assert_eq!(title, "buy book");
                assert_eq!(due_date, "2025-07-20");
            }
            other => panic!("expected DuplicateTask, got {other:?}"),
        }

        assert_eq!(fs::read_to_string(&ctx.db_path).unwrap(), before);
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_same_title_on_another_day_is_accepted(ctx: &mut AddTaskContext) {
        ctx.manager.add_new_task("Buy book", None, "2025-07-20", "High").unwrap();
        ctx.manager.add_new_task("Buy book", None, "2025-07-21", "High").unwrap();

        assert_eq!(ctx.stored().len(), 2);
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_existing_tasks_are_preserved(ctx: &mut AddTaskContext) {
        let first = ctx.manager.add_new_task("Buy book", None, "2025-07-20", "High").unwrap();
        let second = ctx.manager.add_new_task("Exercise", None, "2025-07-21", "Medium").unwrap();

        assert_eq!(ctx.stored(), vec![first, second]);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let manager = TaskManager::new(JsonTaskRepository::new(temp_dir.path()));

        let result = manager.add_new_task("Buy book", None, "2025-07-20", "High");
        assert!(matches!(result, Err(TaskError::Repository(RepositoryError::Write { .. }))));
    }

    #[test]
    fn test_manager_works_with_any_repository() {
        let manager = TaskManager::new(MemoryRepository::default());

        manager.add_new_task("Buy book", None, "2025-07-20", "High").unwrap();
        let duplicate = manager.add_new_task("BUY BOOK", None, "2025-07-20", "Low");
        let invalid = manager.add_new_task("Exercise", None, "2025-02-30", "Low");

        assert!(matches!(duplicate, Err(TaskError::DuplicateTask { .. })));
        assert!(matches!(invalid, Err(TaskError::InvalidDateFormat(_))));
        assert_eq!(manager.repository().tasks.borrow().len(), 1);
        assert_eq!(*manager.repository().saves.borrow(), 1);
    }

    const STORE_WITH_UNKNOWN_STATUS: &str = r#"[
        {
            "id": "5f0c9a52-8d0e-4a4e-9d0e-1f5b7c1d2e3a",
            "title": "Keep me",
            "description": "",
            "due_date": "2025-07-01",
            "priority": "Low",
            "status": "Not completed",
            "created_at": "2025-06-01T08:00:00",
            "last_updated_at": "2025-06-01T08:00:00"
        },
        {
            "id": "9b1d7e44-2c6f-4f0a-8b3e-6a2d4c8e0f17",
            "title": "Hand edited",
            "description": "",
            "due_date": "2025-07-02",
            "priority": "Medium",
            "status": "In progress",
            "created_at": "2025-06-01T08:00:00",
            "last_updated_at": "2025-06-01T08:00:00"
        }
    ]"#;

    #[test_context(AddTaskContext)]
    #[test]
    fn test_unreadable_record_still_counts_for_duplicates(ctx: &mut AddTaskContext) {
        fs::write(&ctx.db_path, STORE_WITH_UNKNOWN_STATUS).unwrap();

        let result = ctx.manager.add_new_task("keep me", None, "2025-07-01", "Low");

        assert!(matches!(result, Err(TaskError::DuplicateTask { .. })));
        assert_eq!(fs::read_to_string(&ctx.db_path).unwrap(), STORE_WITH_UNKNOWN_STATUS);
    }

    #[test_context(AddTaskContext)]
    #[test]
    fn test_store_with_unreadable_record_is_not_overwritten(ctx: &mut AddTaskContext) {
        fs::write(&ctx.db_path, STORE_WITH_UNKNOWN_STATUS).unwrap();

        let result = ctx.manager.add_new_task("Exercise", None, "2025-07-03", "Medium");

        match result {
            Err(TaskError::Repository(RepositoryError::Record { index, .. })) => assert_eq!(index, 1),
            other => panic!("expected a record error, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&ctx.db_path).unwrap(), STORE_WITH_UNKNOWN_STATUS);
    }

    #[test]
    fn test_sample_tasks_add_two_and_reject_untitled() {
        let manager = TaskManager::new(MemoryRepository::default());

        let outcomes = add_samples(&manager);

        assert_eq!(outcomes.len(), SAMPLE_TASKS.len());
        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_ok());
        assert!(matches!(outcomes[2], Err(TaskError::EmptyField(Field::Title))));

        let stored = manager.repository().load();
        let titles: Vec<&str> = stored.iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, ["Buy book", "Exercise"]);
    }
}
