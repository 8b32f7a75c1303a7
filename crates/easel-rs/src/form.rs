//! Static form schema.
//!
//! [`FORM`] declares every editable field once: which control renders it
//! and which section it belongs to. Renderers walk this table instead of
//! hard-coding field lists, so adding a field here is the whole job of
//! putting it on screen.

use crate::fields::{ChoiceField, FlagField, TextField};

/// What kind of widget edits a field, and which field it edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Free text, edited inline.
    Text(TextField),
    /// One value from a fixed catalog.
    Choice(ChoiceField),
    /// On or off.
    Flag(FlagField),
}

impl Control {
    /// Display label of the underlying field.
    pub const fn label(self) -> &'static str {
        match self {
            Control::Text(f) => f.label(),
            Control::Choice(f) => f.label(),
            Control::Flag(f) => f.label(),
        }
    }
}

/// One row of the form.
pub struct FieldSpec {
    pub control: Control,
    /// Single-line hint shown alongside the field.
    pub help: &'static str,
    /// Ghost text for empty text fields. Empty for other controls.
    pub placeholder: &'static str,
}

/// A titled run of fields.
pub struct FormSection {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

/// The whole form, in display order.
pub static FORM: &[FormSection] = &[
    FormSection {
        title: "Medium",
        fields: &[FieldSpec {
            control: Control::Choice(ChoiceField::Medium),
            help: "Overall medium or technique",
            placeholder: "",
        }],
    },
    FormSection {
        title: "Subject",
        fields: &[FieldSpec {
            control: Control::Text(TextField::Subject),
            help: "Main subject of the image",
            placeholder: "a fox in mid-leap",
        }],
    },
    FormSection {
        title: "Environment",
        fields: &[FieldSpec {
            control: Control::Text(TextField::Environment),
            help: "Where the scene takes place",
            placeholder: "a snowy forest at dusk",
        }],
    },
    FormSection {
        title: "Composition",
        fields: &[
            FieldSpec {
                control: Control::Choice(ChoiceField::View),
                help: "Framing and perspective",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Choice(ChoiceField::Camera),
                help: "Camera body",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Choice(ChoiceField::Lens),
                help: "Lens and aperture",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Choice(ChoiceField::Lighting),
                help: "Lighting setup or condition",
                placeholder: "",
            },
        ],
    },
    FormSection {
        title: "Style",
        fields: &[
            FieldSpec {
                control: Control::Choice(ChoiceField::Mood),
                help: "Emotional tone",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Choice(ChoiceField::Movement),
                help: "Art movement",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Text(TextField::Artist),
                help: "Rendered as 'by <artist>'",
                placeholder: "Claude Monet",
            },
            FieldSpec {
                control: Control::Text(TextField::FilmStyle),
                help: "Rendered as '<film> film style'",
                placeholder: "Blade Runner",
            },
            FieldSpec {
                control: Control::Choice(ChoiceField::TimeEpoch),
                help: "Rendered as 'Time Period: <epoch>'",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Text(TextField::StyleReference),
                help: "Seed number for --sref",
                placeholder: "42",
            },
            FieldSpec {
                control: Control::Flag(FlagField::StyleRandom),
                help: "Emit --sref random instead of the number",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Text(TextField::StyleReferenceUrl),
                help: "Reference image URL, placed first in the prompt",
                placeholder: "https://example.com/ref.png",
            },
        ],
    },
    FormSection {
        title: "Parameters",
        fields: &[
            FieldSpec {
                control: Control::Choice(ChoiceField::AspectRatio),
                help: "Emitted as --ar",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Text(TextField::IgnoreWords),
                help: "Comma-separated words for --no",
                placeholder: "blur, text",
            },
            FieldSpec {
                control: Control::Flag(FlagField::Tile),
                help: "Emit --tile",
                placeholder: "",
            },
            FieldSpec {
                control: Control::Flag(FlagField::StyleRaw),
                help: "Emit --style raw",
                placeholder: "",
            },
        ],
    },
];

/// All field specs across sections, in display order.
pub fn fields() -> impl Iterator<Item = &'static FieldSpec> {
    FORM.iter().flat_map(|s| s.fields.iter())
}

/// Number of fields in the form.
pub fn field_count() -> usize {
    FORM.iter().map(|s| s.fields.len()).sum()
}

/// The field spec at a flat display-order index.
pub fn field_at(index: usize) -> Option<&'static FieldSpec> {
    fields().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_appears_exactly_once() {
        let controls: Vec<Control> = fields().map(|f| f.control).collect();
        let expected =
            TextField::ALL.len() + ChoiceField::ALL.len() + FlagField::ALL.len();
        assert_eq!(controls.len(), expected);

        for field in TextField::ALL {
            let hits = controls
                .iter()
                .filter(|c| **c == Control::Text(field))
                .count();
            assert_eq!(hits, 1, "{} appears {hits} times", field.label());
        }
        for field in ChoiceField::ALL {
            let hits = controls
                .iter()
                .filter(|c| **c == Control::Choice(field))
                .count();
            assert_eq!(hits, 1, "{} appears {hits} times", field.label());
        }
        for field in FlagField::ALL {
            let hits = controls
                .iter()
                .filter(|c| **c == Control::Flag(field))
                .count();
            assert_eq!(hits, 1, "{} appears {hits} times", field.label());
        }
    }

    #[test]
    fn field_at_walks_sections_in_order() {
        assert_eq!(
            field_at(0).map(|f| f.control),
            Some(Control::Choice(ChoiceField::Medium))
        );
        assert_eq!(
            field_at(field_count() - 1).map(|f| f.control),
            Some(Control::Flag(FlagField::StyleRaw))
        );
        assert!(field_at(field_count()).is_none());
    }

    #[test]
    fn labels_come_from_the_field_handles() {
        assert_eq!(Control::Text(TextField::Subject).label(), "Subject");
        assert_eq!(Control::Choice(ChoiceField::Medium).label(), "Medium");
        assert_eq!(Control::Flag(FlagField::Tile).label(), "Tile");
    }

    #[test]
    fn suggestion_backed_fields_stay_free_text() {
        let controls: Vec<Control> = fields().map(|f| f.control).collect();
        assert!(controls.contains(&Control::Text(TextField::Artist)));
        assert!(controls.contains(&Control::Text(TextField::FilmStyle)));
    }
}
