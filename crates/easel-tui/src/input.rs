//! Key handling for the prompt form.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};
use easel_rs::catalog::Catalog;
use easel_rs::form::{self, Control};

use crate::app::{App, InputMode};
use crate::clipboard;

pub(crate) fn handle_key_event(key: crossterm::event::KeyEvent, app: &mut App) {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Browse => handle_browse_key(key, app),
        InputMode::SelectOption => handle_select_option_key(key, app),
        InputMode::EditText => handle_edit_text_key(key, app),
        InputMode::EditPrompt => handle_edit_prompt_key(key, app),
    }
}

fn handle_browse_key(key: crossterm::event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(',') => app.show_logs = !app.show_logs,
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor + 1 < form::field_count() {
                app.cursor += 1;
            }
        }
        KeyCode::Home => app.cursor = 0,
        KeyCode::End => app.cursor = form::field_count().saturating_sub(1),
        KeyCode::Enter => activate_field(app),
        KeyCode::Char(' ') => {
            if let Some(spec) = form::field_at(app.cursor)
                && let Control::Flag(field) = spec.control
            {
                app.fields.toggle(field);
                app.field_changed();
            }
        }
        KeyCode::Char('y') => {
            // The indicator flips even when the platform copy fails; the
            // failure is only logged.
            let prompt = app.current_prompt();
            match clipboard::copy(&prompt) {
                Ok(()) => tracing::debug!("copied {} chars to clipboard", prompt.chars().count()),
                Err(e) => tracing::warn!("clipboard copy failed: {e}"),
            }
            app.mark_copied(Instant::now());
        }
        KeyCode::Char('e') => {
            app.input_buffer = app.current_prompt();
            app.input_mode = InputMode::EditPrompt;
            app.status_message = None;
        }
        _ => {}
    }
}

/// Enter on a form row: open a dropdown for choice fields and
/// suggestion-backed text fields, start inline editing for plain text
/// fields, toggle flags.
fn activate_field(app: &mut App) {
    let Some(spec) = form::field_at(app.cursor) else {
        return;
    };

    match spec.control {
        Control::Choice(field) => {
            let catalog = Catalog::for_choice(field);
            app.option_cursor = catalog.position(app.fields.choice(field)).unwrap_or(0);
            app.option_target = Some(spec.control);
            app.input_mode = InputMode::SelectOption;
            app.status_message = None;
        }
        Control::Text(field) => {
            if let Some(catalog) = Catalog::suggestions_for(field) {
                app.option_cursor = catalog.position(app.fields.text(field)).unwrap_or(0);
                app.option_target = Some(spec.control);
                app.input_mode = InputMode::SelectOption;
            } else {
                app.input_buffer = app.fields.text(field).to_string();
                app.edit_target = Some(field);
                app.input_mode = InputMode::EditText;
            }
            app.status_message = None;
        }
        Control::Flag(field) => {
            app.fields.toggle(field);
            app.field_changed();
        }
    }
}

fn handle_select_option_key(key: crossterm::event::KeyEvent, app: &mut App) {
    let option_count = app.dropdown_catalog().map_or(0, |c| c.len());
    if option_count == 0 {
        app.option_target = None;
        app.input_mode = InputMode::Browse;
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.option_cursor = app.option_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.option_cursor + 1 < option_count {
                app.option_cursor += 1;
            }
        }
        KeyCode::PageUp => {
            app.option_cursor = app.option_cursor.saturating_sub(10);
        }
        KeyCode::PageDown => {
            app.option_cursor = (app.option_cursor + 10).min(option_count - 1);
        }
        KeyCode::Enter => {
            let value = app.dropdown_catalog().and_then(|c| c.option_at(app.option_cursor));
            if let (Some(value), Some(target)) = (value, app.option_target) {
                match target {
                    Control::Choice(field) => app.fields.set_choice(field, value),
                    Control::Text(field) => app.fields.set_text(field, value),
                    Control::Flag(_) => {}
                }
                app.field_changed();
                app.status_message = Some(format!("{} updated.", target.label()));
            }
            app.option_target = None;
            app.input_mode = InputMode::Browse;
        }
        KeyCode::Char('e') => {
            // Only text-backed dropdowns can switch to a typed value.
            if let Some(Control::Text(field)) = app.option_target {
                let prefill = app
                    .dropdown_catalog()
                    .and_then(|c| c.option_at(app.option_cursor))
                    .unwrap_or("");
                app.input_buffer = prefill.to_string();
                app.edit_target = Some(field);
                app.input_mode = InputMode::EditText;
            }
        }
        KeyCode::Esc => {
            app.option_target = None;
            app.input_mode = InputMode::Browse;
        }
        _ => {}
    }
}

fn handle_edit_text_key(key: crossterm::event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            // Committed verbatim: the assembler treats any non-empty text
            // as set, whitespace included.
            if let Some(field) = app.edit_target {
                let value = std::mem::take(&mut app.input_buffer);
                app.fields.set_text(field, value);
                app.field_changed();
                app.status_message = Some(format!("{} updated.", field.label()));
            }
            app.edit_target = None;
            app.option_target = None;
            app.input_mode = InputMode::Browse;
        }
        KeyCode::Esc => {
            // Cancel. If the edit started from a suggestion dropdown,
            // return there.
            app.input_buffer.clear();
            app.edit_target = None;
            if app.option_target.is_some() {
                app.input_mode = InputMode::SelectOption;
            } else {
                app.input_mode = InputMode::Browse;
            }
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

fn handle_edit_prompt_key(key: crossterm::event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.prompt_override = Some(std::mem::take(&mut app.input_buffer));
            app.input_mode = InputMode::Browse;
            app.status_message = Some("Prompt edited. Any field change rebuilds it.".into());
        }
        KeyCode::Esc => {
            app.input_buffer.clear();
            app.input_mode = InputMode::Browse;
            app.status_message = Some("Edit discarded.".into());
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_rs::assemble::AssembleConfig;
    use easel_rs::catalog;
    use easel_rs::fields::{ChoiceField, FlagField, TextField};
    use std::time::Duration;

    fn app() -> App {
        App::new(AssembleConfig::default(), Duration::from_millis(2000))
    }

    fn key(code: KeyCode) -> crossterm::event::KeyEvent {
        crossterm::event::KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn row_of(control: Control) -> usize {
        form::fields()
            .position(|f| f.control == control)
            .expect("control should be in the form")
    }

    #[test]
    fn enter_on_a_choice_row_opens_its_dropdown() {
        let mut app = app();
        app.cursor = row_of(Control::Choice(ChoiceField::Medium));
        handle_key_event(key(KeyCode::Enter), &mut app);

        assert!(matches!(app.input_mode, InputMode::SelectOption));
        assert_eq!(app.option_target, Some(Control::Choice(ChoiceField::Medium)));
        assert_eq!(app.option_cursor, 0, "unset field highlights the sentinel");
    }

    #[test]
    fn dropdown_enter_commits_the_highlighted_option() {
        let mut app = app();
        app.cursor = row_of(Control::Choice(ChoiceField::Medium));
        handle_key_event(key(KeyCode::Enter), &mut app);

        app.option_cursor = catalog::MEDIUM.position("Oil Painting").unwrap();
        handle_key_event(key(KeyCode::Enter), &mut app);

        assert_eq!(app.fields.choice(ChoiceField::Medium), "Oil Painting");
        assert!(matches!(app.input_mode, InputMode::Browse));
        assert!(app.option_target.is_none());
    }

    #[test]
    fn dropdown_esc_leaves_the_field_alone() {
        let mut app = app();
        app.cursor = row_of(Control::Choice(ChoiceField::Lighting));
        handle_key_event(key(KeyCode::Enter), &mut app);
        handle_key_event(key(KeyCode::Down), &mut app);
        handle_key_event(key(KeyCode::Esc), &mut app);

        assert_eq!(app.fields.choice(ChoiceField::Lighting), "None");
        assert!(matches!(app.input_mode, InputMode::Browse));
    }

    #[test]
    fn space_toggles_the_flag_under_the_cursor() {
        let mut app = app();
        app.cursor = row_of(Control::Flag(FlagField::Tile));

        handle_key_event(key(KeyCode::Char(' ')), &mut app);
        assert!(app.fields.flag(FlagField::Tile));

        handle_key_event(key(KeyCode::Char(' ')), &mut app);
        assert!(!app.fields.flag(FlagField::Tile));
    }

    #[test]
    fn suggestion_dropdown_switches_to_a_typed_value() {
        let mut app = app();
        app.cursor = row_of(Control::Text(TextField::Artist));
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(matches!(app.input_mode, InputMode::SelectOption));

        handle_key_event(key(KeyCode::Char('e')), &mut app);
        assert!(matches!(app.input_mode, InputMode::EditText));
        assert_eq!(app.edit_target, Some(TextField::Artist));
        assert_eq!(app.input_buffer, "None", "prefilled with the highlighted option");

        app.input_buffer = "Monet".to_string();
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert_eq!(app.fields.text(TextField::Artist), "Monet");
        assert!(matches!(app.input_mode, InputMode::Browse));
    }

    #[test]
    fn text_edit_commits_verbatim() {
        let mut app = app();
        app.cursor = row_of(Control::Text(TextField::Subject));
        handle_key_event(key(KeyCode::Enter), &mut app);
        assert!(matches!(app.input_mode, InputMode::EditText));

        for c in " padded ".chars() {
            handle_key_event(key(KeyCode::Char(c)), &mut app);
        }
        handle_key_event(key(KeyCode::Enter), &mut app);

        assert_eq!(app.fields.text(TextField::Subject), " padded ");
    }

    #[test]
    fn copy_key_flips_the_indicator_even_without_a_clipboard() {
        let mut app = app();
        handle_key_event(key(KeyCode::Char('y')), &mut app);
        assert!(app.copied_at.is_some());
    }

    #[test]
    fn committing_a_field_discards_the_prompt_override() {
        let mut app = app();
        app.prompt_override = Some("hand tuned".to_string());

        app.cursor = row_of(Control::Choice(ChoiceField::Mood));
        handle_key_event(key(KeyCode::Enter), &mut app);
        app.option_cursor = catalog::MOOD.position("Serene").unwrap();
        handle_key_event(key(KeyCode::Enter), &mut app);

        assert!(app.prompt_override.is_none());
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app();
        app.input_mode = InputMode::EditText;
        let ctrl_c = crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key_event(ctrl_c, &mut app);
        assert!(app.should_quit);
    }

    #[test]
    fn browse_cursor_stays_in_bounds() {
        let mut app = app();
        handle_key_event(key(KeyCode::Up), &mut app);
        assert_eq!(app.cursor, 0);

        handle_key_event(key(KeyCode::End), &mut app);
        assert_eq!(app.cursor, form::field_count() - 1);
        handle_key_event(key(KeyCode::Down), &mut app);
        assert_eq!(app.cursor, form::field_count() - 1);
    }
}
