//! Rendering for the prompt form.

use std::time::Instant;

use easel_rs::form::{self, Control};
use easel_rs::trace::{LogLevel, LogLine};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, InputMode};

// ── Public Utilities ──────────────────────────────────────────────────

/// Truncate a string to a maximum number of characters, appending "..."
/// if truncated. Counts chars, not bytes, so multi-byte text never splits.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// Checkbox glyph for a flag field.
pub fn flag_glyph(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Scroll offset that keeps `cursor_line` visible in a viewport of
/// `viewport` lines, pinning the cursor to the bottom edge once it moves
/// past the first screenful.
pub fn follow_cursor(cursor_line: usize, viewport: usize) -> usize {
    cursor_line.saturating_sub(viewport.saturating_sub(1))
}

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Outer layout: [flex] form or dropdown | [6] preview | [3] input bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(area);

    let dropdown_open = matches!(app.input_mode, InputMode::SelectOption)
        || (matches!(app.input_mode, InputMode::EditText) && app.option_target.is_some());

    if dropdown_open {
        render_dropdown(frame, chunks[0], app);
    } else if app.show_logs {
        let mid = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);
        render_form(frame, mid[0], app);
        render_logs(frame, mid[1], &app.logs);
    } else {
        render_form(frame, chunks[0], app);
    }

    render_preview(frame, chunks[1], app);
    render_input(frame, chunks[2], app);
}

// ── Form Pane ─────────────────────────────────────────────────────────

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let value_width = (area.width.saturating_sub(32) as usize).max(8);

    let section_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Cyan);
    let selected_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);
    let unset_style = Style::default().fg(Color::DarkGray);
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut flat = 0usize;

    for section in form::FORM {
        lines.push(Line::from(Span::styled(section.title, section_style)));

        for spec in section.fields {
            let is_selected = flat == app.cursor;
            if is_selected {
                cursor_line = lines.len();
            }

            let marker = if is_selected { "> " } else { "  " };
            let label = format!("{:<24}", spec.control.label());

            let value_span = match spec.control {
                Control::Text(field) => {
                    let value = app.fields.text(field);
                    if value.is_empty() {
                        Span::styled(truncate_str(spec.placeholder, value_width), placeholder_style)
                    } else {
                        Span::styled(truncate_str(value, value_width), value_style)
                    }
                }
                Control::Choice(field) => {
                    let value = app.fields.choice(field);
                    if value == app.assemble_config.unset_sentinel {
                        Span::styled(value.to_string(), unset_style)
                    } else {
                        Span::styled(truncate_str(value, value_width), value_style)
                    }
                }
                Control::Flag(field) => {
                    let on = app.fields.flag(field);
                    let style = if on {
                        Style::default().fg(Color::Green)
                    } else {
                        unset_style
                    };
                    Span::styled(flag_glyph(on), style)
                }
            };

            lines.push(Line::from(vec![
                Span::styled(marker, selected_style),
                Span::styled(label, if is_selected { selected_style } else { label_style }),
                value_span,
            ]));
            flat += 1;
        }

        lines.push(Line::from(""));
    }

    let scroll = follow_cursor(cursor_line, inner_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Fields ");

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

// ── Dropdown Pane ─────────────────────────────────────────────────────

fn render_dropdown(frame: &mut Frame, area: Rect, app: &App) {
    let Some(catalog) = app.dropdown_catalog() else {
        return;
    };
    let inner_height = area.height.saturating_sub(2) as usize;

    let group_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let selected_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut flat = 0usize;

    for group in catalog.groups {
        lines.push(Line::from(Span::styled(group.label, group_style)));
        for option in group.options {
            let is_selected = flat == app.option_cursor;
            if is_selected {
                cursor_line = lines.len();
            }
            let marker = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                selected_style
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(*option, style),
            ]));
            flat += 1;
        }
    }

    let scroll = follow_cursor(cursor_line, inner_height);

    let label = app.option_target.map_or("Options", |t| t.label());
    let title = if matches!(app.option_target, Some(Control::Text(_))) {
        format!(" {label}  [Enter] select  [e] type custom  [Esc] cancel ")
    } else {
        format!(" {label}  [Enter] select  [Esc] cancel ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

// ── Preview Pane ──────────────────────────────────────────────────────

fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let editing = matches!(app.input_mode, InputMode::EditPrompt);
    let prompt = if editing {
        app.input_buffer.clone()
    } else {
        app.current_prompt()
    };

    let mut title = if editing {
        " Prompt (editing) ".to_string()
    } else if app.prompt_override.is_some() {
        " Prompt (edited) ".to_string()
    } else {
        " Prompt ".to_string()
    };

    let copied = app.copied_active_at(Instant::now());
    if copied {
        title.push_str("[copied] ");
    }

    let text = if prompt.is_empty() {
        Text::styled(
            "Fill in fields to compose a prompt. [y] copies it.",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Text::styled(prompt, Style::default().fg(Color::White))
    };

    let border_color = if copied { Color::Green } else { Color::Blue };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine]) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(logs.len());

    for log in logs {
        // Only info and up reach the pane.
        if matches!(log.level, LogLevel::Trace | LogLevel::Debug) {
            continue;
        }
        let time_span = Span::styled(
            format!("{} ", log.time),
            Style::default().fg(Color::DarkGray),
        );
        let level_span = Span::styled(
            format!("{} ", log.level.label()),
            log_level_style(log.level),
        );
        let msg_span = Span::raw(&log.message);
        lines.push(Line::from(vec![time_span, level_span, msg_span]));
    }

    // Follow the tail.
    let scroll = lines.len().saturating_sub(inner_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

// ── Input Bar ─────────────────────────────────────────────────────────

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let (title, style) = match app.input_mode {
        InputMode::Browse => {
            let hint = if let Some(ref msg) = app.status_message {
                msg.clone()
            } else {
                "[Enter] edit  [Space] toggle  [y] copy  [e] edit prompt  [,] logs  [q] quit"
                    .to_string()
            };
            (format!(" {hint} "), Style::default().fg(Color::DarkGray))
        }
        InputMode::SelectOption => (
            " [Up/Down] navigate  [Enter] select  [Esc] cancel ".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::EditText => {
            let label = app.edit_target.map_or("text", |f| f.label());
            let char_count = app.input_buffer.chars().count();
            (
                format!(" Editing {label} ({char_count} chars)  [Enter] confirm  [Esc] cancel "),
                Style::default().fg(Color::Cyan),
            )
        }
        InputMode::EditPrompt => {
            let char_count = app.input_buffer.chars().count();
            (
                format!(" Editing prompt ({char_count} chars)  [Enter] keep  [Esc] discard "),
                Style::default().fg(Color::Green),
            )
        }
    };

    let input_text = match app.input_mode {
        InputMode::Browse => match form::field_at(app.cursor) {
            Some(spec) => format!("{}: {}", spec.control.label(), spec.help),
            None => String::new(),
        },
        InputMode::SelectOption => String::new(),
        InputMode::EditText | InputMode::EditPrompt => {
            format!("> {}\u{2588}", app.input_buffer)
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    let paragraph = Paragraph::new(input_text).block(block);
    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_str_short() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn truncate_str_long() {
        let result = truncate_str("hello world this is long", 11);
        assert_eq!(result, "hello world...");
    }

    #[test]
    fn truncate_str_counts_chars_not_bytes() {
        // "Cézanne" is 8 bytes but 7 chars; no split inside the 'é'.
        assert_eq!(truncate_str("Cézanne", 7), "Cézanne");
        assert_eq!(truncate_str("Cézanne", 3), "Céz...");
    }

    #[test]
    fn flag_glyph_states() {
        assert_eq!(flag_glyph(true), "[x]");
        assert_eq!(flag_glyph(false), "[ ]");
    }

    #[test]
    fn follow_cursor_within_first_screen() {
        assert_eq!(follow_cursor(0, 10), 0);
        assert_eq!(follow_cursor(9, 10), 0);
    }

    #[test]
    fn follow_cursor_pins_to_bottom_edge() {
        assert_eq!(follow_cursor(10, 10), 1);
        assert_eq!(follow_cursor(25, 10), 16);
    }

    #[test]
    fn log_level_styles_differ_by_severity() {
        assert_ne!(
            log_level_style(LogLevel::Info),
            log_level_style(LogLevel::Warn)
        );
        assert_ne!(
            log_level_style(LogLevel::Warn),
            log_level_style(LogLevel::Error)
        );
    }
}
