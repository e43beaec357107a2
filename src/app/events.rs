use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, DetailTab, Focus};

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The failure notice blocks input; any key dismisses it
        if self.notification.is_visible() {
            self.notification.dismiss();
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::SearchInput => self.handle_search_input_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Tab: adopt the highlighted suggestion (if any), then advance focus
        if key.code == KeyCode::Tab {
            if self.focus == Focus::SearchInput
                && self.autocomplete.is_visible()
                && let Some(suggestion) = self.autocomplete.selected()
            {
                let text = suggestion.to_string();
                self.adopt_suggestion(&text);
            }
            self.toggle_focus();
            return true;
        }

        if key.code == KeyCode::BackTab {
            self.toggle_focus();
            return true;
        }

        // q: exit, but only when not typing in the search field
        if key.code == KeyCode::Char('q')
            && !key.modifiers.contains(KeyModifiers::CONTROL)
            && self.focus == Focus::Results
        {
            self.should_quit = true;
            return true;
        }

        false
    }

    /// Keys while the search field is focused
    fn handle_search_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.autocomplete.is_visible() {
                    self.autocomplete.hide();
                }
            }
            KeyCode::Down => {
                if self.autocomplete.is_visible() {
                    self.autocomplete.select_next();
                }
            }
            KeyCode::Up => {
                if self.autocomplete.is_visible() {
                    self.autocomplete.select_previous();
                }
            }
            KeyCode::Enter => {
                if self.autocomplete.is_visible()
                    && let Some(suggestion) = self.autocomplete.selected()
                {
                    let text = suggestion.to_string();
                    self.adopt_suggestion(&text);
                } else {
                    self.submit_search();
                }
            }
            _ => {
                let before = self.query().to_string();
                self.input.input(key);
                if self.query() != before {
                    self.refresh_suggestions();
                }
            }
        }
    }

    /// Keys while the results pane is focused
    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.result_cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.result_cursor_up(),
            KeyCode::Enter => self.select_drug(self.result_cursor),
            KeyCode::Right | KeyCode::Char('l') => self.select_tab(self.active_tab.next()),
            KeyCode::Left | KeyCode::Char('h') => self.select_tab(self.active_tab.previous()),
            KeyCode::Char('1') => self.select_tab(DetailTab::Summary),
            KeyCode::Char('2') => self.select_tab(DetailTab::Sentiment),
            KeyCode::Char('3') => self.select_tab(DetailTab::Recommendations),
            KeyCode::Char('4') => self.select_tab(DetailTab::SideEffects),
            KeyCode::Char('/') => self.set_focus(Focus::SearchInput),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        let next = match self.focus {
            Focus::SearchInput => Focus::Results,
            Focus::Results => Focus::SearchInput,
        };
        self.set_focus(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{test_app, test_drug};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_updates_query_and_suggestions() {
        let mut app = test_app();
        type_str(&mut app, "pro");

        assert_eq!(app.query(), "pro");
        assert!(app.autocomplete.is_visible());
        assert_eq!(app.autocomplete.suggestions(), ["Ibuprofen", "Naproxen"]);
        assert_eq!(app.autocomplete.active_index(), None);
    }

    #[test]
    fn test_each_keystroke_reflects_latest_query() {
        let mut app = test_app();
        // Typing "napro" then continuing to "naprox": the list always
        // matches the most recent text, never a stale prefix
        type_str(&mut app, "napro");
        assert_eq!(app.autocomplete.suggestions(), ["Naproxen"]);
        type_str(&mut app, "x");
        assert_eq!(app.autocomplete.suggestions(), ["Naproxen"]);
        type_str(&mut app, "z");
        assert!(!app.autocomplete.is_visible());
    }

    #[test]
    fn test_backspace_to_empty_hides_dropdown() {
        let mut app = test_app();
        type_str(&mut app, "a");
        assert!(app.autocomplete.is_visible());

        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.query(), "");
        assert!(!app.autocomplete.is_visible());
    }

    #[test]
    fn test_down_up_navigate_suggestions() {
        let mut app = test_app();
        type_str(&mut app, "pro");

        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.autocomplete.active_index(), Some(0));
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.autocomplete.active_index(), Some(1));

        app.handle_key_event(key(KeyCode::Up));
        app.handle_key_event(key(KeyCode::Up));
        assert_eq!(app.autocomplete.active_index(), None);
    }

    #[test]
    fn test_enter_with_highlight_adopts() {
        let mut app = test_app();
        type_str(&mut app, "pro");
        app.handle_key_event(key(KeyCode::Down));

        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.query(), "Ibuprofen");
        assert!(!app.autocomplete.is_visible());
        // Adoption is not a submit
        assert!(!app.is_loading());
    }

    #[test]
    fn test_enter_without_highlight_submits() {
        use std::sync::mpsc;
        use crate::api::ApiRequest;

        let mut app = test_app();
        let (tx, rx) = mpsc::channel();
        app.request_tx = Some(tx);
        type_str(&mut app, "pro");

        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.query(), "pro");
        assert!(matches!(rx.try_recv().unwrap(), ApiRequest::Search { .. }));
    }

    #[test]
    fn test_escape_hides_dropdown_keeps_query() {
        let mut app = test_app();
        type_str(&mut app, "pro");

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.autocomplete.is_visible());
        assert_eq!(app.query(), "pro");
    }

    #[test]
    fn test_tab_with_highlight_adopts_and_advances_focus() {
        let mut app = test_app();
        type_str(&mut app, "pro");
        app.handle_key_event(key(KeyCode::Down));

        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.query(), "Ibuprofen");
        assert_eq!(app.focus, Focus::Results);
    }

    #[test]
    fn test_tab_without_highlight_just_switches_focus() {
        let mut app = test_app();
        type_str(&mut app, "pro");

        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.query(), "pro");
        assert_eq!(app.focus, Focus::Results);
        assert!(!app.autocomplete.is_visible());
    }

    #[test]
    fn test_results_navigation_and_selection() {
        let mut app = test_app();
        app.search_results = vec![test_drug("Ibuprofen"), test_drug("Naproxen")];
        app.set_focus(Focus::Results);

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.selected.as_ref().unwrap().name, "Naproxen");
    }

    #[test]
    fn test_tab_switching_in_results() {
        let mut app = test_app();
        app.set_focus(Focus::Results);

        app.handle_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.active_tab, DetailTab::Recommendations);

        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.active_tab, DetailTab::SideEffects);

        app.handle_key_event(key(KeyCode::Left));
        assert_eq!(app.active_tab, DetailTab::Recommendations);
    }

    #[test]
    fn test_q_quits_only_from_results() {
        let mut app = test_app();
        type_str(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.query(), "q");

        app.set_focus(Focus::Results);
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = test_app();
        app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_slash_returns_to_search() {
        let mut app = test_app();
        app.set_focus(Focus::Results);
        app.handle_key_event(key(KeyCode::Char('/')));
        assert_eq!(app.focus, Focus::SearchInput);
    }

    #[test]
    fn test_notification_blocks_and_dismisses_on_any_key() {
        let mut app = test_app();
        app.notification.show("Search failed.");

        app.handle_key_event(key(KeyCode::Char('x')));
        assert!(!app.notification.is_visible());
        // The keystroke was consumed, not typed
        assert_eq!(app.query(), "");
    }
}
