//! The prompt form record and its typed field handles.
//!
//! [`PromptFields`] is the single in-memory draft the whole tool operates on:
//! one named member per form control, mutated field-by-field as the user
//! edits and handed to [`assemble`](crate::assemble::assemble) to produce
//! the output string. The record is plain serializable data with no behavior
//! of its own.
//!
//! The three handle enums ([`TextField`], [`ChoiceField`], [`FlagField`])
//! exist so generic code (the form renderer, the CLI flag mapper) can address
//! fields without stringly-typed lookups; adding a field without wiring its
//! accessor is a compile error, not a runtime surprise.

use serde::{Deserialize, Serialize};

use crate::catalog::UNSET_VALUE;

// ── Field handles ──────────────────────────────────────────────────

/// A free-text field. Values are unconstrained and echoed into the
/// output verbatim (no trimming, no escaping).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Subject,
    Environment,
    Artist,
    FilmStyle,
    IgnoreWords,
    StyleReference,
    StyleReferenceUrl,
}

/// An enumerated-choice field. The value is always a member of the field's
/// catalog, including the unset sentinel. Populating callers (dropdowns,
/// validated CLI flags) uphold that; the record itself does not check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceField {
    Medium,
    View,
    Camera,
    Lens,
    Lighting,
    Mood,
    Movement,
    TimeEpoch,
    AspectRatio,
}

/// A boolean flag field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagField {
    Tile,
    StyleRaw,
    StyleRandom,
}

impl TextField {
    /// Every text field, in form order.
    pub const ALL: [TextField; 7] = [
        TextField::Subject,
        TextField::Environment,
        TextField::Artist,
        TextField::FilmStyle,
        TextField::IgnoreWords,
        TextField::StyleReference,
        TextField::StyleReferenceUrl,
    ];

    /// Human-readable label for form rows and CLI messages.
    pub const fn label(self) -> &'static str {
        match self {
            TextField::Subject => "Subject",
            TextField::Environment => "Environment",
            TextField::Artist => "Artist",
            TextField::FilmStyle => "Film Style",
            TextField::IgnoreWords => "Ignore Words",
            TextField::StyleReference => "Style Reference",
            TextField::StyleReferenceUrl => "Style Reference URL",
        }
    }
}

impl ChoiceField {
    /// Every choice field, in form order.
    pub const ALL: [ChoiceField; 9] = [
        ChoiceField::Medium,
        ChoiceField::View,
        ChoiceField::Camera,
        ChoiceField::Lens,
        ChoiceField::Lighting,
        ChoiceField::Mood,
        ChoiceField::Movement,
        ChoiceField::TimeEpoch,
        ChoiceField::AspectRatio,
    ];

    /// Human-readable label for form rows and CLI messages.
    pub const fn label(self) -> &'static str {
        match self {
            ChoiceField::Medium => "Medium",
            ChoiceField::View => "View",
            ChoiceField::Camera => "Camera",
            ChoiceField::Lens => "Lens",
            ChoiceField::Lighting => "Lighting",
            ChoiceField::Mood => "Mood",
            ChoiceField::Movement => "Art Movement",
            ChoiceField::TimeEpoch => "Time Epoch",
            ChoiceField::AspectRatio => "Aspect Ratio",
        }
    }
}

impl FlagField {
    /// Every flag field, in form order.
    pub const ALL: [FlagField; 3] = [FlagField::Tile, FlagField::StyleRaw, FlagField::StyleRandom];

    /// Human-readable label for form rows and CLI messages.
    pub const fn label(self) -> &'static str {
        match self {
            FlagField::Tile => "Tile",
            FlagField::StyleRaw => "Style Raw",
            FlagField::StyleRandom => "Random Style Reference",
        }
    }
}

// ── PromptFields ───────────────────────────────────────────────────

/// The complete prompt draft: every form field, by name.
///
/// `Default` yields an all-unset record, with choice fields at the catalog
/// sentinel and everything else empty or off. There is exactly one draft
/// per session; it is never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptFields {
    // Free text.
    pub subject: String,
    pub environment: String,
    pub artist: String,
    pub film_style: String,
    pub ignore_words: String,
    pub style_reference: String,
    pub style_reference_url: String,

    // Enumerated choices.
    pub medium: String,
    pub view: String,
    pub camera: String,
    pub lens: String,
    pub lighting: String,
    pub mood: String,
    pub movement: String,
    pub time_epoch: String,
    pub aspect_ratio: String,

    // Flags.
    pub tile: bool,
    pub style_raw: bool,
    pub style_random: bool,
}

impl Default for PromptFields {
    fn default() -> Self {
        Self {
            subject: String::new(),
            environment: String::new(),
            artist: String::new(),
            film_style: String::new(),
            ignore_words: String::new(),
            style_reference: String::new(),
            style_reference_url: String::new(),
            medium: UNSET_VALUE.to_string(),
            view: UNSET_VALUE.to_string(),
            camera: UNSET_VALUE.to_string(),
            lens: UNSET_VALUE.to_string(),
            lighting: UNSET_VALUE.to_string(),
            mood: UNSET_VALUE.to_string(),
            movement: UNSET_VALUE.to_string(),
            time_epoch: UNSET_VALUE.to_string(),
            aspect_ratio: UNSET_VALUE.to_string(),
            tile: false,
            style_raw: false,
            style_random: false,
        }
    }
}

impl PromptFields {
    /// An all-unset draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a free-text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Subject => &self.subject,
            TextField::Environment => &self.environment,
            TextField::Artist => &self.artist,
            TextField::FilmStyle => &self.film_style,
            TextField::IgnoreWords => &self.ignore_words,
            TextField::StyleReference => &self.style_reference,
            TextField::StyleReferenceUrl => &self.style_reference_url,
        }
    }

    /// Write a free-text field (verbatim, no trimming).
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Subject => self.subject = value,
            TextField::Environment => self.environment = value,
            TextField::Artist => self.artist = value,
            TextField::FilmStyle => self.film_style = value,
            TextField::IgnoreWords => self.ignore_words = value,
            TextField::StyleReference => self.style_reference = value,
            TextField::StyleReferenceUrl => self.style_reference_url = value,
        }
    }

    /// Read an enumerated-choice field.
    pub fn choice(&self, field: ChoiceField) -> &str {
        match field {
            ChoiceField::Medium => &self.medium,
            ChoiceField::View => &self.view,
            ChoiceField::Camera => &self.camera,
            ChoiceField::Lens => &self.lens,
            ChoiceField::Lighting => &self.lighting,
            ChoiceField::Mood => &self.mood,
            ChoiceField::Movement => &self.movement,
            ChoiceField::TimeEpoch => &self.time_epoch,
            ChoiceField::AspectRatio => &self.aspect_ratio,
        }
    }

    /// Write an enumerated-choice field. Catalog membership is the caller's
    /// responsibility.
    pub fn set_choice(&mut self, field: ChoiceField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ChoiceField::Medium => self.medium = value,
            ChoiceField::View => self.view = value,
            ChoiceField::Camera => self.camera = value,
            ChoiceField::Lens => self.lens = value,
            ChoiceField::Lighting => self.lighting = value,
            ChoiceField::Mood => self.mood = value,
            ChoiceField::Movement => self.movement = value,
            ChoiceField::TimeEpoch => self.time_epoch = value,
            ChoiceField::AspectRatio => self.aspect_ratio = value,
        }
    }

    /// Read a boolean flag.
    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::Tile => self.tile,
            FlagField::StyleRaw => self.style_raw,
            FlagField::StyleRandom => self.style_random,
        }
    }

    /// Write a boolean flag.
    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        match field {
            FlagField::Tile => self.tile = value,
            FlagField::StyleRaw => self.style_raw = value,
            FlagField::StyleRandom => self.style_random = value,
        }
    }

    /// Flip a boolean flag.
    pub fn toggle(&mut self, field: FlagField) {
        let current = self.flag(field);
        self.set_flag(field, !current);
    }
}
