#[cfg(test)]
mod tests {
    use dayplan::db::{db::Db, tasks::Tasks};
    use dayplan::libs::error::TaskError;
    use dayplan::libs::task::{NewTask, Priority, Status};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            StoreTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    impl StoreTestContext {
        fn open(&self) -> Tasks {
            Tasks::new(Db::open(&self.db_path).unwrap()).unwrap()
        }
    }

    fn task(title: &str, date: &str, time: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            date: date.to_string(),
            time: time.to_string(),
            priority: Priority::Low,
            status: Status::Pending,
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_assigns_unique_ids(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();

        let first = tasks.create(&task("One", "2024-05-01", "09:00")).unwrap();
        let second = tasks.create(&task("Two", "2024-05-01", "09:00")).unwrap();

        assert_ne!(first, second);
        assert_eq!(tasks.count().unwrap(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_orders_by_date_then_time(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();

        tasks.create(&task("B", "2024-05-02", "08:00")).unwrap();
        tasks.create(&task("A", "2024-05-01", "09:00")).unwrap();
        tasks.create(&task("C", "2024-05-01", "07:30")).unwrap();

        let titles: Vec<String> = tasks.list_all_ordered().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip_preserves_fields(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();
        let new_task = NewTask {
            title: "Dentist".to_string(),
            description: "Bring insurance card".to_string(),
            date: "2024-06-10".to_string(),
            time: "15:45".to_string(),
            priority: Priority::High,
            status: Status::InProgress,
        };

        let id = tasks.create(&new_task).unwrap();
        let stored = tasks.list_all_ordered().unwrap();

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert!(stored[0].matches(&new_task));
        assert_eq!(tasks.get(id).unwrap(), Some(stored[0].clone()));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_status_is_idempotent(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();
        let id = tasks.create(&task("Laundry", "2024-05-01", "18:00")).unwrap();

        tasks.update_status(id, Status::Completed).unwrap();
        tasks.update_status(id, Status::Completed).unwrap();

        let stored = tasks.get(id).unwrap().unwrap();
        assert_eq!(stored.status, Status::Completed);
        assert_eq!(tasks.count().unwrap(), 1);

        // Any status can be assigned directly at the store level.
        tasks.update_status(id, Status::Pending).unwrap();
        assert_eq!(tasks.get(id).unwrap().unwrap().status, Status::Pending);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_status_missing_task(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();

        let result = tasks.update_status(42, Status::Completed);
        assert!(matches!(result, Err(TaskError::NotFound(42))));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_and_delete_again(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();
        let id = tasks.create(&task("Call mom", "2024-05-01", "20:00")).unwrap();

        tasks.delete(id).unwrap();
        assert!(tasks.get(id).unwrap().is_none());
        assert!(tasks.list_all_ordered().unwrap().iter().all(|t| t.id != id));

        let again = tasks.delete(id);
        assert!(matches!(again, Err(TaskError::NotFound(deleted)) if deleted == id));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_ids_are_not_reused_after_delete(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();
        tasks.create(&task("First", "2024-05-01", "09:00")).unwrap();
        let last = tasks.create(&task("Second", "2024-05-01", "10:00")).unwrap();

        tasks.delete(last).unwrap();
        let next = tasks.create(&task("Third", "2024-05-01", "11:00")).unwrap();

        assert!(next > last);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_initialize_keeps_existing_records(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();
        let id = tasks.create(&task("Keep me", "2024-05-01", "09:00")).unwrap();
        tasks.initialize().unwrap();
        tasks.initialize().unwrap();
        drop(tasks);

        let reopened = ctx.open();
        let stored = reopened.list_all_ordered().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].title, "Keep me");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_accepts_spanish_labels(ctx: &mut StoreTestContext) {
        let tasks = ctx.open();
        tasks
            .conn
            .execute(
                "INSERT INTO tasks (title, description, date, time, priority, status) VALUES ('Old', '', '2023-01-01', '09:00', 'Alta', 'En progreso')",
                [],
            )
            .unwrap();

        let stored = tasks.list_all_ordered().unwrap();
        assert_eq!(stored[0].priority, Priority::High);
        assert_eq!(stored[0].status, Status::InProgress);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unknown_stored_status_is_persistence_error(ctx: &mut StoreTestContext) {
        let tasks = ctx.open();
        tasks
            .conn
            .execute(
                "INSERT INTO tasks (title, description, date, time, priority, status) VALUES ('Odd', '', '2023-01-01', '09:00', 'Low', 'Someday')",
                [],
            )
            .unwrap();

        let result = tasks.list_all_ordered();
        assert!(matches!(result, Err(TaskError::Persistence(_))));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_locked_database_is_not_retried(ctx: &mut StoreTestContext) {
        let mut tasks = ctx.open();
        let other = Db::open(&ctx.db_path).unwrap();
        other.conn.execute_batch("BEGIN IMMEDIATE").unwrap();

        let result = tasks.create(&task("Blocked", "2024-05-01", "09:00"));
        assert!(matches!(result, Err(TaskError::Persistence(_))));

        other.conn.execute_batch("ROLLBACK").unwrap();
        assert!(tasks.create(&task("Unblocked", "2024-05-01", "09:00")).is_ok());
    }
}
