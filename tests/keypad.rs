//! 通过按键/点击驱动完整应用

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::{Terminal, backend::TestBackend};

use tipcalc::config::Settings;
use tipcalc::models::{BillState, NumButton};
use tipcalc::ui::{App, handle_event, handle_key_event, render};

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        handle_key_event(app, KeyCode::Char(c));
    }
}

fn key_press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn typed_bill_concatenates() {
    for digits in ["7", "42", "908", "1000", "99999"] {
        let mut app = App::default();
        type_keys(&mut app, digits);
        assert_eq!(app.bill.bill(), digits);
        assert_eq!(app.bill.display(), format!("${digits}"));
    }
}

#[test]
fn leading_zeros_are_dropped() {
    let mut app = App::default();
    type_keys(&mut app, "0");
    assert_eq!(app.bill.display(), "$0");
    assert_eq!(app.bill.tip_labels(), ["10%", "20%", "30%"]);

    type_keys(&mut app, "00705");
    assert_eq!(app.bill.bill(), "705");
}

#[test]
fn hundred_then_clear() {
    let mut app = App::default();
    type_keys(&mut app, "100");
    assert_eq!(app.bill.tip_labels(), ["$10", "$20", "$30"]);

    handle_key_event(&mut app, KeyCode::Esc);
    assert_eq!(app.bill.display(), "$0");
    assert_eq!(app.bill.tip_labels(), ["10%", "20%", "30%"]);
}

#[test]
fn excess_digits_leave_state_unchanged() {
    let mut app = App::default();
    type_keys(&mut app, "12345");
    let before = app.bill.clone();
    type_keys(&mut app, "678");
    assert_eq!(app.bill, before);
}

#[test]
fn configured_limit_and_dedup() {
    let settings = Settings {
        max_bill_digits: 9,
        dedup_tips: true,
        ..Settings::default()
    };
    let mut app = App::new(settings.bill_state());
    type_keys(&mut app, "123456789");
    assert_eq!(app.bill.bill(), "123456789");

    handle_key_event(&mut app, KeyCode::Char('c'));
    type_keys(&mut app, "5");
    assert_eq!(app.bill.tip_labels(), ["--", "$1", "$2"]);

    handle_key_event(&mut app, KeyCode::Char('s'));
    assert_eq!(app.bill.tip_labels(), ["$1", "$1", "$2"]);
}

#[test]
fn key_release_is_ignored() {
    let mut app = App::default();
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('3'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert!(!handle_event(&mut app, release));
    assert_eq!(app.bill.bill(), "");

    assert!(!handle_event(&mut app, key_press(KeyCode::Char('3'))));
    assert_eq!(app.bill.bill(), "3");
    assert!(handle_event(&mut app, key_press(KeyCode::Char('q'))));
}

fn click(app: &mut App, button: NumButton) {
    let (area, _) = app
        .keypad_areas
        .iter()
        .find(|(_, b)| *b == button)
        .copied()
        .unwrap();
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x + area.width / 2,
        row: area.y + area.height / 2,
        modifiers: KeyModifiers::NONE,
    });
    handle_event(app, event);
}

#[test]
fn clicking_rendered_keys() {
    let mut app = App::new(BillState::default());
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    terminal.draw(|f| render(f, &mut app)).unwrap();

    click(&mut app, NumButton::Two);
    click(&mut app, NumButton::Zero);
    click(&mut app, NumButton::Zero);
    assert_eq!(app.bill.display(), "$200");
    assert_eq!(app.bill.tip_labels(), ["$20", "$40", "$60"]);

    click(&mut app, NumButton::Clear);
    assert_eq!(app.bill.display(), "$0");
}
