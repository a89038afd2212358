use crate::common::{task, three_tasks, FakeViewModel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use makeitso::navigation::Destination;
use makeitso::ui::core::{Action, Component, Lifecycle};
use makeitso::ui::screens::TasksScreen;
use makeitso::ui::Theme;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Opened = Arc<Mutex<Vec<Destination>>>;

fn screen(view_model: &Arc<FakeViewModel>) -> (TasksScreen<FakeViewModel>, Opened) {
    let opened: Opened = Arc::default();
    let sink = Arc::clone(&opened);
    let screen = TasksScreen::new(
        Arc::clone(view_model),
        move |destination| sink.lock().unwrap().push(destination),
        "Tasks",
        Theme::default(),
    );
    (screen, opened)
}

fn press(screen: &mut TasksScreen<FakeViewModel>, code: KeyCode) -> Action {
    let action = screen.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE));
    screen.update(action)
}

fn draw(screen: &mut TasksScreen<FakeViewModel>) {
    let mut terminal = Terminal::new(TestBackend::new(50, 16)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            screen.render(f, area);
        })
        .unwrap();
}

#[test]
fn test_collects_only_while_started() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, _) = screen(&view_model);

    assert_eq!(screen.lifecycle(), Lifecycle::Initialized);
    assert!(screen.tasks().is_empty());
    assert_eq!(view_model.tasks.receiver_count(), 0);

    screen.on_start();
    assert!(screen.is_collecting());
    assert_eq!(screen.tasks().len(), 3);
    assert_eq!(view_model.tasks.receiver_count(), 1);

    view_model.tasks.send_replace(vec![task("z", "Only")]);
    assert!(screen.tick());
    assert_eq!(screen.tasks()[0].id, "z");

    screen.on_stop();
    assert_eq!(screen.lifecycle(), Lifecycle::Stopped);
    assert_eq!(view_model.tasks.receiver_count(), 0);
}

#[test]
fn test_restart_shows_latest_snapshot() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, _) = screen(&view_model);

    screen.on_start();
    screen.on_stop();
    view_model.tasks.send_replace(vec![task("x", "First"), task("y", "Second")]);
    view_model.tasks.send_replace(vec![task("y", "Second")]);

    assert!(!screen.tick());
    assert_eq!(screen.tasks().len(), 3);

    screen.on_start();
    assert_eq!(screen.tasks().len(), 1);
    assert_eq!(screen.tasks()[0].id, "y");
}

#[test]
fn test_add_and_settings_keys_navigate_once() {
    let view_model = Arc::new(FakeViewModel::new(Vec::new()));
    let (mut screen, opened) = screen(&view_model);
    screen.on_start();

    assert_eq!(press(&mut screen, KeyCode::Char('a')), Action::None);
    assert_eq!(*opened.lock().unwrap(), vec![Destination::AddTask]);

    press(&mut screen, KeyCode::Char('s'));
    let routes: Vec<_> = opened.lock().unwrap().iter().map(Destination::route).collect();
    assert_eq!(routes, vec!["add_task", "settings"]);
}

#[test]
fn test_check_key_reaches_selected_row_only() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, opened) = screen(&view_model);
    screen.on_start();

    press(&mut screen, KeyCode::Down);
    press(&mut screen, KeyCode::Char(' '));
    assert_eq!(*view_model.checked.lock().unwrap(), vec!["b"]);
    assert!(opened.lock().unwrap().is_empty());
}

#[test]
fn test_check_on_empty_list_does_nothing() {
    let view_model = Arc::new(FakeViewModel::new(Vec::new()));
    let (mut screen, _) = screen(&view_model);
    screen.on_start();

    press(&mut screen, KeyCode::Char('x'));
    assert!(view_model.checked.lock().unwrap().is_empty());
}

#[test]
fn test_options_menu_without_options_closes_quietly() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, opened) = screen(&view_model);
    screen.on_start();

    press(&mut screen, KeyCode::Enter);
    assert!(screen.state().options_menu.is_some());

    // Navigation keys go to the menu while it is open
    press(&mut screen, KeyCode::Char('a'));
    assert!(opened.lock().unwrap().is_empty());

    press(&mut screen, KeyCode::Enter);
    assert!(screen.state().options_menu.is_none());
    assert!(opened.lock().unwrap().is_empty());

    press(&mut screen, KeyCode::Char('o'));
    press(&mut screen, KeyCode::Esc);
    assert!(screen.state().options_menu.is_none());
}

#[test]
fn test_unhandled_keys_bubble_up() {
    let view_model = Arc::new(FakeViewModel::new(Vec::new()));
    let (mut screen, _) = screen(&view_model);
    assert_eq!(press(&mut screen, KeyCode::Char('z')), Action::None);
    assert_eq!(screen.update(Action::Quit), Action::Quit);
}

#[tokio::test]
async fn test_options_load_once_across_renders() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, _) = screen(&view_model);
    screen.on_start();

    draw(&mut screen);
    assert!(screen.options_effect_launched());
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(view_model.loads(), 1);

    draw(&mut screen);
    screen.on_stop();
    screen.on_start();
    draw(&mut screen);
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(view_model.loads(), 1);
}

#[test]
fn test_render_without_runtime_skips_effect() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, _) = screen(&view_model);
    screen.on_start();

    draw(&mut screen);
    assert!(!screen.options_effect_launched());
    assert_eq!(view_model.loads(), 0);
}

#[tokio::test]
async fn test_dispose_is_final() {
    let view_model = Arc::new(FakeViewModel::new(three_tasks()));
    let (mut screen, _) = screen(&view_model);
    screen.on_start();
    screen.dispose();

    assert_eq!(screen.lifecycle(), Lifecycle::Disposed);
    assert!(!screen.is_collecting());

    screen.on_start();
    assert_eq!(screen.lifecycle(), Lifecycle::Disposed);

    draw(&mut screen);
    assert!(!screen.options_effect_launched());
}
