use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C arrives as a key event in raw mode; treat it as interrupt.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Cycle the process listing sort key
        KeyCode::Char('s') => app.cycle_sort(),

        // Toggle dark/light theme
        KeyCode::Char('t') => app.toggle_theme(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MockProvider;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        App::new(Box::new(MockProvider::default()))
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits_even_with_help_open() {
        let mut app = app();
        app.show_help = true;
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn test_any_key_closes_help_first() {
        let mut app = app();
        app.show_help = true;
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(app.running);
        assert!(!app.show_help);
    }
}
