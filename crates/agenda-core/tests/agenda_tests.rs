mod common;

use std::fs;

use agenda_core::{AgendaError, Response, Status};
use common::{create_test_agenda, reopen};
use serde_json::{json, Value};

#[test]
fn test_complete_session_workflow() {
    let (_temp_dir, data_path, mut agenda) = create_test_agenda();

    for line in [
        "add schedule 회의 2024-05-15 14:00",
        "add todo 빨래하기",
        "add to buy oat milk",
        "update schedule 회의 completed",
        "update todo 2",
        "done 1",
    ] {
        let response = agenda.run_line(line).expect("command should succeed");
        assert!(
            matches!(response, Some(Response::Changed(ref outcome)) if outcome.is_persisted()),
            "{line:?} did not persist"
        );
    }

    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        json!({
            "schedules": [
                {"task": "회의", "datetime": "2024-05-15 14:00", "status": "completed"}
            ],
            "todos": [
                {"task": "빨래하기", "status": "completed"},
                {"task": "buy oat milk", "status": "completed"}
            ]
        })
    );

    // A new session sees the saved document but no checkpoint.
    let mut reopened = reopen(&data_path);
    assert_eq!(reopened.document(), agenda.document());
    assert!(matches!(reopened.undo(), Err(AgendaError::NothingToUndo)));
}

#[test]
fn test_undo_reverts_file_contents() {
    let (_temp_dir, data_path, mut agenda) = create_test_agenda();
    agenda.run_line("add todo first").unwrap();
    let saved = fs::read_to_string(&data_path).unwrap();

    agenda.run_line("rm 1").unwrap();
    assert!(reopen(&data_path).document().todos.is_empty());

    agenda.run_line("undo").unwrap();
    assert_eq!(fs::read_to_string(&data_path).unwrap(), saved);
    assert!(matches!(
        agenda.run_line("undo"),
        Err(AgendaError::NothingToUndo)
    ));
}

#[test]
fn test_hand_written_document_is_accepted() {
    let (_temp_dir, data_path, _agenda) = create_test_agenda();
    fs::write(
        &data_path,
        r#"{"todos": [{"task": "old"}, {"task": "done", "status": "completed"}]}"#,
    )
    .unwrap();

    let agenda = reopen(&data_path);
    let todos = &agenda.document().todos;
    assert!(agenda.document().schedules.is_empty());
    assert_eq!(todos[0].status, Status::Pending);
    assert_eq!(todos[1].status, Status::Completed);
}

#[test]
fn test_malformed_document_is_replaced_on_first_save() {
    let (_temp_dir, data_path, _agenda) = create_test_agenda();
    fs::write(&data_path, "{\"schedules\": [{\"task\": \"x\", \"datetime\": \"soon\"}]}").unwrap();

    let mut agenda = reopen(&data_path);
    assert!(matches!(
        agenda.take_load_warning(),
        Some(AgendaError::MalformedDocument { .. })
    ));
    assert!(agenda.document().is_empty());

    agenda.add_todo("fresh start").unwrap();
    assert_eq!(reopen(&data_path).document().todos.len(), 1);
}

#[test]
fn test_list_all_shows_both_views() {
    let (_temp_dir, _data_path, mut agenda) = create_test_agenda();
    agenda.run_line("add todo laundry").unwrap();

    let Some(Response::Overview(overview)) = agenda.run_line("list all").unwrap() else {
        panic!("expected overview");
    };
    let text = overview.to_string();
    assert!(text.starts_with("No schedules registered.\n"));
    assert!(text.ends_with("## Todos\n\n1. ○ laundry (pending)\n"));
}
