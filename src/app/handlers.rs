//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Apply one key event. Releases and repeats are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(c @ '1'..='9') => {
                let number = c as usize - '0' as usize;
                // Out-of-range digits are rejected by the controller
                let _ = self.select_view_number(number);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.next_view(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.prev_view(),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_row(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_row(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::chart::ChartView;
    use crate::config::DashboardConfig;
    use crate::table::LogSort;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(DashboardConfig::default()).unwrap()
    }

    #[test]
    fn test_number_keys_select_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.active_view(), ChartView::Radial);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view(), ChartView::Area);
    }

    #[test]
    fn test_out_of_range_digit_keeps_view() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.active_view(), ChartView::Bar);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_arrow_and_vim_keys_cycle() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.active_view(), ChartView::Radial);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.active_view(), ChartView::Pie);
    }

    #[test]
    fn test_sort_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort(), LogSort::Oldest);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = self::app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
