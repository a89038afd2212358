use crate::common::three_tasks;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use makeitso::navigation::Destination;
use makeitso::store::TaskStore;
use makeitso::ui::core::{EventType, Lifecycle};
use makeitso::ui::screens::tasks::preview::buffer_to_string;
use makeitso::ui::{App, Theme};
use makeitso::view_model::LocalTasksViewModel;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn app() -> (App, TaskStore) {
    let store = TaskStore::new(three_tasks());
    let view_model = Arc::new(LocalTasksViewModel::new(store.clone(), true));
    let mut app = App::new(view_model, "Tasks", Theme::default());
    app.start();
    (app, store)
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_start_collects_tasks() {
    let (app, _) = app();
    assert_eq!(app.screen().lifecycle(), Lifecycle::Started);
    assert_eq!(app.screen().tasks().len(), 3);
    assert!(app.current_destination().is_none());
}

#[test]
fn test_navigation_stops_and_back_restarts() {
    let (mut app, _) = app();

    app.handle_event(key(KeyCode::Char('a')));
    assert_eq!(app.current_destination(), Some(&Destination::AddTask));
    assert_eq!(app.screen().lifecycle(), Lifecycle::Stopped);

    // Screen keys are ignored while another destination is shown
    app.handle_event(key(KeyCode::Char('s')));
    assert_eq!(app.current_destination(), Some(&Destination::AddTask));

    app.handle_event(key(KeyCode::Esc));
    assert!(app.current_destination().is_none());
    assert_eq!(app.screen().lifecycle(), Lifecycle::Started);
}

#[test]
fn test_focus_drives_lifecycle() {
    let (mut app, _) = app();

    app.handle_event(EventType::FocusLost);
    assert_eq!(app.screen().lifecycle(), Lifecycle::Stopped);
    assert!(!app.screen().is_collecting());

    app.handle_event(EventType::FocusGained);
    assert_eq!(app.screen().lifecycle(), Lifecycle::Started);
}

#[test]
fn test_check_round_trips_through_store() {
    let (mut app, store) = app();
    let first = app.screen().tasks()[0].id.clone();

    app.handle_event(key(KeyCode::Char(' ')));
    assert!(store.get(&first).unwrap().completed);

    app.handle_event(EventType::Tick);
    assert!(app.screen().tasks()[0].completed);
}

#[test]
fn test_quit_keys() {
    let (mut first, _) = app();
    first.handle_event(key(KeyCode::Char('q')));
    assert!(first.should_quit());

    let (mut second, _) = app();
    second.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(second.should_quit());
}

#[test]
fn test_render_shows_destination_placeholder() {
    let (mut app, _) = app();
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("Water the plants"));

    app.handle_event(key(KeyCode::Char('s')));
    terminal.draw(|f| app.render(f)).unwrap();
    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("settings"));
    assert!(text.contains("Press Esc to go back"));
}
