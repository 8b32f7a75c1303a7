//! TUI-local state.

use std::time::{Duration, Instant};

use easel_rs::assemble::{AssembleConfig, assemble};
use easel_rs::catalog::Catalog;
use easel_rs::fields::{ChoiceField, PromptFields, TextField};
use easel_rs::form::Control;
use easel_rs::trace::LogLine;

/// Input mode for the TUI.
pub(crate) enum InputMode {
    /// Browse mode: arrow keys move between fields, Enter activates one.
    Browse,
    /// Dropdown mode: arrow keys navigate options, Enter commits.
    SelectOption,
    /// Inline text editing: Enter commits, Esc cancels.
    EditText,
    /// Editing the assembled prompt itself. Enter keeps the edit until the
    /// next field change, Esc discards it.
    EditPrompt,
}

/// TUI-local state.
pub(crate) struct App {
    pub(crate) fields: PromptFields,
    pub(crate) assemble_config: AssembleConfig,
    pub(crate) input_mode: InputMode,
    /// Flat index of the highlighted form row.
    pub(crate) cursor: usize,
    /// Highlighted option in the open dropdown.
    pub(crate) option_cursor: usize,
    /// Field the open dropdown edits, if any.
    pub(crate) option_target: Option<Control>,
    /// Field the inline text editor edits, if any.
    pub(crate) edit_target: Option<TextField>,
    pub(crate) input_buffer: String,
    /// Hand-edited prompt. Cleared by any field change.
    pub(crate) prompt_override: Option<String>,
    /// When the last copy happened; drives the "copied" indicator.
    pub(crate) copied_at: Option<Instant>,
    /// How long the "copied" indicator stays up.
    pub(crate) copy_flash: Duration,
    /// Status messages shown temporarily at the bottom.
    pub(crate) status_message: Option<String>,
    /// Whether the logs pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    pub(crate) logs: Vec<LogLine>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new(assemble_config: AssembleConfig, copy_flash: Duration) -> Self {
        let mut fields = assemble_config.blank_fields();
        // Widescreen is the default the form opens with; everything else
        // starts unset.
        fields.set_choice(ChoiceField::AspectRatio, "16:9");

        Self {
            fields,
            assemble_config,
            input_mode: InputMode::Browse,
            cursor: 0,
            option_cursor: 0,
            option_target: None,
            edit_target: None,
            input_buffer: String::new(),
            prompt_override: None,
            copied_at: None,
            copy_flash,
            status_message: None,
            show_logs: false,
            logs: Vec::new(),
            should_quit: false,
        }
    }

    /// The prompt shown in the preview pane and copied by `y`: the hand
    /// edit if one is live, otherwise the assembled fields.
    pub(crate) fn current_prompt(&self) -> String {
        match &self.prompt_override {
            Some(text) => text.clone(),
            None => assemble(&self.fields, &self.assemble_config),
        }
    }

    /// Record that a field changed. Any hand-edited prompt is discarded so
    /// the preview rebuilds from the fields.
    pub(crate) fn field_changed(&mut self) {
        self.prompt_override = None;
    }

    /// The catalog behind the open dropdown: the field's own catalog for
    /// choice fields, the suggestion list for text fields.
    pub(crate) fn dropdown_catalog(&self) -> Option<&'static Catalog> {
        match self.option_target {
            Some(Control::Choice(field)) => Some(Catalog::for_choice(field)),
            Some(Control::Text(field)) => Catalog::suggestions_for(field),
            _ => None,
        }
    }

    /// Record a copy. Overwriting the timestamp restarts the indicator
    /// instead of stacking a second timer.
    pub(crate) fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Whether the "copied" indicator should be showing at `now`.
    pub(crate) fn copied_active_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.duration_since(at) < self.copy_flash)
    }
}
