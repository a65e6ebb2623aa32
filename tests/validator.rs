#[cfg(test)]
mod tests {
    use dayplan::libs::error::{Field, ValidationError};
    use dayplan::libs::task::{Priority, Status, TaskInput};
    use dayplan::libs::validator::{is_canonical, validate, Validator};

    fn input(title: &str, date: &str, time: &str) -> TaskInput {
        TaskInput::new(title, "", date, time, "Low", "Pending")
    }

    #[test]
    fn test_trims_text_fields() {
        let task = validate(&TaskInput::new("  Gym ", "  legs day ", " 2024-05-01 ", " 07:00 ", "High", "Pending")).unwrap();

        assert_eq!(task.title, "Gym");
        assert_eq!(task.description, "legs day");
        assert_eq!(task.date, "2024-05-01");
        assert_eq!(task.time, "07:00");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Pending);
    }

    #[test]
    fn test_title_is_required() {
        let err = validate(&input("   ", "2024-05-01", "09:00")).unwrap_err();
        assert_eq!(err, ValidationError::Required(Field::Title));
        assert_eq!(err.field(), Field::Title);
    }

    #[test]
    fn test_date_is_required() {
        let err = validate(&input("Gym", " ", "09:00")).unwrap_err();
        assert_eq!(err, ValidationError::Required(Field::Date));
    }

    #[test]
    fn test_lenient_accepts_empty_time_and_free_date_text() {
        let task = validate(&input("Gym", "tomorrow", "  ")).unwrap();
        assert_eq!(task.date, "tomorrow");
        assert_eq!(task.time, "");
    }

    #[test]
    fn test_priority_and_status_aliases() {
        let task = validate(&TaskInput::new("Gym", "", "2024-05-01", "09:00", "media", "en progreso")).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, Status::InProgress);

        assert_eq!("In progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("COMPLETADO".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("baja".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let err = validate(&TaskInput::new("Gym", "", "2024-05-01", "09:00", "Urgent", "Pending")).unwrap_err();
        assert_eq!(err.field(), Field::Priority);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = validate(&TaskInput::new("Gym", "", "2024-05-01", "09:00", "Low", "Done-ish")).unwrap_err();
        assert_eq!(err.field(), Field::Status);
    }

    #[test]
    fn test_strict_rejects_impossible_dates_and_times() {
        let strict = Validator::strict();

        let err = strict.validate(&input("Gym", "2024-02-30", "09:00")).unwrap_err();
        assert_eq!(err.field(), Field::Date);

        let err = strict.validate(&input("Gym", "2024-02-01", "25:00")).unwrap_err();
        assert_eq!(err.field(), Field::Time);

        let err = strict.validate(&input("Gym", "2024-02-01", "")).unwrap_err();
        assert_eq!(err, ValidationError::Required(Field::Time));
    }

    #[test]
    fn test_strict_accepts_canonical_values() {
        let task = Validator::strict().validate(&input("Gym", "2024-02-29", "23:59")).unwrap();
        assert_eq!(task.date, "2024-02-29");
        assert_eq!(task.time, "23:59");
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("2024-05-01", "09:00"));
        assert!(!is_canonical("tomorrow", "09:00"));
        assert!(!is_canonical("2024-05-01", ""));
    }
}
