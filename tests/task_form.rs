use admin_board::core::models::{Priority, TaskDraft};
use admin_board::features::kanban::services::{split_tags, FormError, TaskForm};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn form(title: &str) -> TaskForm {
    TaskForm {
        title: title.to_string(),
        ..TaskForm::default()
    }
}

#[test]
fn blank_title_is_rejected() {
    assert_eq!(form("").validate(), Err(FormError::BlankTitle));
    assert_eq!(form("   \t").validate(), Err(FormError::BlankTitle));
}

#[test]
fn full_form_becomes_draft() {
    let input = TaskForm {
        title: "  Design new landing page ".into(),
        description: "Hero section first".into(),
        priority: "high".into(),
        assignee: "John Doe".into(),
        due_date: "2024-01-25".into(),
        tags: "Design, UI/UX".into(),
    };

    let draft = input.validate().unwrap();

    assert_eq!(
        draft,
        TaskDraft {
            title: "Design new landing page".into(),
            description: "Hero section first".into(),
            priority: Priority::High,
            assignee: "John Doe".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 25),
            tags: vec!["Design".into(), "UI/UX".into()],
        }
    );
}

#[test]
fn defaults_are_medium_priority_and_no_due_date() {
    let draft = form("Quick note").validate().unwrap();
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.due_date, None);
    assert!(draft.tags.is_empty());
}

#[test]
fn tags_are_trimmed_and_empty_entries_dropped() {
    assert_eq!(
        split_tags(" Design ,, Frontend,  ,Urgent,"),
        vec!["Design", "Frontend", "Urgent"]
    );
    assert_eq!(split_tags("Design, Design"), vec!["Design", "Design"]);
    assert!(split_tags(" , ").is_empty());
}

#[test]
fn malformed_due_date_is_rejected() {
    let input = TaskForm {
        due_date: "25/01/2024".into(),
        ..form("Dated")
    };
    assert_eq!(
        input.validate(),
        Err(FormError::InvalidDueDate("25/01/2024".into()))
    );
}

#[test]
fn unknown_priority_is_rejected() {
    let input = TaskForm {
        priority: "urgent".into(),
        ..form("Prioritized")
    };
    assert_eq!(
        input.validate(),
        Err(FormError::InvalidPriority("urgent".into()))
    );
}
