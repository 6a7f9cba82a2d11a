use cmdtree_core::{
    ApplyOutcome, ConfigError, EditorConfig, EditorError, ResolutionKind, WorkspaceEditor,
};
use cmdtree_test_utils::{
    chain_response, command, group, response, sample_response, SAMPLE_RESPONSE_JSON,
};
use std::sync::Arc;

fn editor() -> WorkspaceEditor {
    WorkspaceEditor::new("network-ws", EditorConfig::default()).unwrap()
}

#[test]
fn test_stale_response_is_discarded() {
    let mut ed = editor();
    let slow = ed.begin_fetch();
    let fast = ed.begin_fetch();

    let newer = response(vec![group("fresh")]);
    assert!(ed.apply_response(fast, &newer).unwrap().is_applied());

    let outcome = ed.apply_response(slow, &sample_response()).unwrap();
    assert_eq!(
        outcome,
        ApplyOutcome::Stale {
            ticket: slow,
            latest: fast
        }
    );
    assert!(ed.state().is_selected("group:fresh"));
    assert_eq!(ed.state().forest().len(), 1);
}

#[test]
fn test_in_order_responses_both_apply() {
    let mut ed = editor();
    let first = ed.begin_fetch();
    let second = ed.begin_fetch();

    assert!(ed.apply_response(first, &response(vec![group("a")])).unwrap().is_applied());
    assert!(ed.apply_response(second, &response(vec![group("b")])).unwrap().is_applied());
    assert_eq!(ed.installed(), Some(second));
}

#[test]
fn test_replayed_ticket_is_stale() {
    let mut ed = editor();
    let ticket = ed.begin_fetch();
    ed.apply_response(ticket, &sample_response()).unwrap();

    let again = ed.apply_response(ticket, &sample_response()).unwrap();
    assert!(!again.is_applied());
}

#[test]
fn test_decode_failure_keeps_last_good_state() {
    let mut ed = editor();
    let first = ed.begin_fetch();
    ed.apply_json(first, SAMPLE_RESPONSE_JSON).unwrap();
    assert!(ed.select("command:network/vnet/list"));
    let before = Arc::clone(ed.state().tree());

    let second = ed.begin_fetch();
    let err = ed.apply_json(second, "{\"plane\": 3").unwrap_err();

    assert!(matches!(err, EditorError::Decode(_)));
    assert!(Arc::ptr_eq(&before, ed.state().tree()));
    assert!(ed.state().is_selected("command:network/vnet/list"));
    assert_eq!(ed.installed(), Some(first));
}

#[test]
fn test_fetch_failure_keeps_last_good_state() {
    let mut ed = editor();
    let first = ed.begin_fetch();
    ed.apply_response(first, &sample_response()).unwrap();
    let before = Arc::clone(ed.state().tree());

    let second = ed.begin_fetch();
    ed.apply_failure(second, &"connection refused");

    assert!(Arc::ptr_eq(&before, ed.state().tree()));
    assert_eq!(ed.installed(), Some(first));

    // a later fetch still applies
    let third = ed.begin_fetch();
    assert!(ed.apply_response(third, &response(vec![group("x")])).unwrap().is_applied());
}

#[test]
fn test_depth_guard_error() {
    let mut ed = WorkspaceEditor::new("ws", EditorConfig::default().with_max_depth(4)).unwrap();
    let ticket = ed.begin_fetch();
    let err = ed.apply_response(ticket, &chain_response(5)).unwrap_err();

    assert!(matches!(err, EditorError::Build(_)));
    assert!(ed.state().forest().is_empty());
    assert!(ed.installed().is_none());
}

#[test]
fn test_zero_depth_config_is_rejected() {
    let err = WorkspaceEditor::new("ws", EditorConfig::default().with_max_depth(0)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_selection_carries_over_rebuild() {
    let mut ed = editor();
    let first = ed.begin_fetch();
    ed.apply_response(first, &sample_response()).unwrap();
    assert!(ed.select("command:network/vnet/delete"));

    // delete command removed by the backend
    let second = ed.begin_fetch();
    let next = response(vec![group("network").with_group(
        group("network/vnet").with_command(command("network/vnet/list")),
    )]);
    let outcome = ed.apply_response(second, &next).unwrap();

    assert_eq!(
        outcome,
        ApplyOutcome::Applied {
            selection: ResolutionKind::Ancestor
        }
    );
    assert!(ed.state().is_selected("group:network/vnet"));
}

#[test]
fn test_picker_opens_when_tree_empties() {
    let mut ed = editor();
    let first = ed.begin_fetch();
    ed.apply_response(first, &sample_response()).unwrap();
    assert!(!ed.state().show_resource_picker());

    let second = ed.begin_fetch();
    ed.apply_json(second, r#"{"plane":"mgmt-plane","commandTree":{}}"#)
        .unwrap();

    assert!(ed.state().show_resource_picker());
    assert!(ed.state().selected().is_none());
    assert_eq!(
        ed.state().plane(),
        "mgmt-plane",
        "plane still comes from the new response"
    );
}

#[test]
fn test_picker_stays_open_until_closed() {
    let mut ed = editor();
    ed.open_resource_picker();

    let ticket = ed.begin_fetch();
    ed.apply_response(ticket, &sample_response()).unwrap();
    assert!(ed.state().show_resource_picker());

    ed.close_resource_picker();
    assert!(!ed.state().show_resource_picker());
}
