use crate::common::{task, three_tasks, RecordingCallbacks};
use makeitso::ui::screens::tasks::preview::{buffer_to_string, render_preview};
use makeitso::ui::screens::tasks::{ContentEvent, TasksScreenContent, TasksScreenState};
use makeitso::ui::Theme;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn draw(content: &TasksScreenContent<'_, RecordingCallbacks>, state: &mut TasksScreenState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(50, 16)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            content.render(f, area, state);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn test_empty_list_renders_toolbar_and_fab() {
    let theme = Theme::default();
    let content = TasksScreenContent::new(&[], RecordingCallbacks::default(), "Tasks", &theme);
    assert!(content.rows().is_empty());

    let text = buffer_to_string(&draw(&content, &mut TasksScreenState::default()));
    assert!(text.contains("Tasks"));
    assert!(text.contains(theme.icons.settings()));
    assert!(text.contains("Add"));
}

#[test]
fn test_rows_follow_input_order_and_keys() {
    let theme = Theme::default();
    let tasks = three_tasks();
    let content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);

    let keys: Vec<_> = content.rows().iter().map(|row| row.key).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert!(content.rows().iter().all(|row| row.options.is_empty()));

    let text = buffer_to_string(&draw(&content, &mut TasksScreenState::default()));
    let water = text.find("Water the plants").unwrap();
    let dentist = text.find("Book dentist").unwrap();
    let read = text.find("Read chapter 4").unwrap();
    assert!(water < dentist && dentist < read);
}

#[test]
fn test_duplicate_titles_stay_distinct_rows() {
    let theme = Theme::default();
    let tasks = vec![task("1", "Same"), task("2", "Same")];
    let content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);

    let rows = content.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(content.row("2").unwrap().key, "2");
}

#[test]
fn test_add_click_reports_add_task_once() {
    let theme = Theme::default();
    let tasks = three_tasks();
    let mut content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);

    assert!(content.dispatch(ContentEvent::AddClick));
    let callbacks = content.into_callbacks();
    assert_eq!(callbacks.adds, vec!["add_task"]);
    assert!(callbacks.settings.is_empty());
    assert!(callbacks.checks.is_empty());
}

#[test]
fn test_settings_click_reports_settings_once() {
    let theme = Theme::default();
    let mut content = TasksScreenContent::new(&[], RecordingCallbacks::default(), "Tasks", &theme);

    assert!(content.dispatch(ContentEvent::SettingsClick));
    let callbacks = content.into_callbacks();
    assert_eq!(callbacks.settings, vec!["settings"]);
    assert!(callbacks.adds.is_empty());
}

#[test]
fn test_check_change_targets_only_that_row() {
    let theme = Theme::default();
    let tasks = three_tasks();
    let mut content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);

    assert!(content.dispatch(ContentEvent::CheckChange { key: "b".to_string() }));
    assert!(!content.dispatch(ContentEvent::CheckChange {
        key: "gone".to_string()
    }));
    assert_eq!(content.into_callbacks().checks, vec!["b"]);
}

#[test]
fn test_action_click_carries_title_and_task() {
    let theme = Theme::default();
    let tasks = three_tasks();
    let mut content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);

    content.dispatch(ContentEvent::ActionClick {
        key: "c".to_string(),
        action: "Toggle flag".to_string(),
    });
    assert_eq!(
        content.into_callbacks().actions,
        vec![("Toggle flag".to_string(), "c".to_string())]
    );
}

#[test]
fn test_render_is_idempotent_and_silent() {
    let theme = Theme::default();
    let tasks = three_tasks();
    let content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);
    let mut state = TasksScreenState::default();

    let first = draw(&content, &mut state);
    let second = draw(&content, &mut state);
    assert_eq!(first, second);

    let callbacks = content.into_callbacks();
    assert!(callbacks.adds.is_empty());
    assert!(callbacks.settings.is_empty());
    assert!(callbacks.checks.is_empty());
    assert!(callbacks.actions.is_empty());
}

#[test]
fn test_empty_options_menu_shows_placeholder() {
    let theme = Theme::default();
    let tasks = three_tasks();
    let content = TasksScreenContent::new(&tasks, RecordingCallbacks::default(), "Tasks", &theme);
    let mut state = TasksScreenState::default();
    state.options_menu = Some(makeitso::ui::screens::tasks::OptionsMenuState {
        key: "a".to_string(),
        selected: 0,
    });

    let text = buffer_to_string(&draw(&content, &mut state));
    assert!(text.contains("No actions available"));
}

#[test]
fn test_selection_wraps_and_follows_key() {
    let tasks = three_tasks();
    let mut state = TasksScreenState::default();

    state.select_previous(&tasks);
    assert_eq!(state.selected_index(), Some(2));
    state.select_next(&tasks);
    assert_eq!(state.selected_index(), Some(0));
    state.select_next(&tasks);
    assert_eq!(state.selected_key.as_deref(), Some("b"));

    // "b" moves to the front
    let reordered = vec![task("b", "Book dentist"), task("a", "Water the plants")];
    state.reconcile(&reordered);
    assert_eq!(state.selected_index(), Some(0));
    assert_eq!(state.selected_task(&reordered).unwrap().id, "b");

    // "b" is gone, selection clamps
    let remaining = vec![task("a", "Water the plants")];
    state.reconcile(&remaining);
    assert_eq!(state.selected_key.as_deref(), Some("a"));

    state.reconcile(&[]);
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_preview_renders_without_view_model() {
    let theme = Theme::default();
    let buffer = render_preview(40, 12, &theme).unwrap();
    let text = buffer_to_string(&buffer);
    assert_eq!(text.lines().count(), 12);
    assert!(text.contains("Tasks"));
    assert!(text.contains("Add"));
}
