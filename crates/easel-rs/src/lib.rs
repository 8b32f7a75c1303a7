//! Structured prompt composer for Midjourney-style image generators.
//!
//! `easel-rs` turns a form full of fields (subject, medium, camera, mood,
//! engine flags) into a single well-ordered prompt string. The core
//! abstraction is [`PromptFields`](fields::PromptFields), one plain struct
//! holding every field, plus [`assemble`](assemble::assemble), a pure
//! function that renders it. There is no hidden state: same fields in, same
//! prompt out, every time.
//!
//! # Getting started
//!
//! ```
//! use easel_rs::prelude::*;
//!
//! let mut fields = PromptFields::default();
//! fields.set_choice(ChoiceField::Medium, "Oil Painting");
//! fields.set_text(TextField::Subject, "a fox");
//! fields.set_flag(FlagField::Tile, true);
//!
//! let prompt = assemble(&fields, &AssembleConfig::default());
//! assert_eq!(prompt, "Oil Painting of a fox --tile");
//! ```
//!
//! # Where to find things
//!
//! If you're looking for how to...
//!
//! - **Hold form state:** see [`PromptFields`](fields::PromptFields) and the
//!   field handles [`TextField`](fields::TextField),
//!   [`ChoiceField`](fields::ChoiceField), [`FlagField`](fields::FlagField).
//!   Every field is addressed through a handle, so generic code (renderers,
//!   CLI flag mapping) iterates tables instead of naming fields one by one.
//!
//! - **Assemble the prompt:** call [`assemble`](assemble::assemble) for the
//!   final string or [`assemble_parts`](assemble::assemble_parts) to get the
//!   descriptive body and the parameter suffix separately. Rendering knobs
//!   (unset sentinel, environment prefix, version token) live on
//!   [`AssembleConfig`](assemble::AssembleConfig).
//!
//! - **Offer options:** [`Catalog::for_choice`](catalog::Catalog::for_choice)
//!   maps every enumerated field to its grouped option list, and
//!   [`Catalog::suggestions_for`](catalog::Catalog::suggestions_for) returns
//!   the artist / film-style suggestion lists for the free-text fields that
//!   have one.
//!
//! - **Render a form:** walk [`form::FORM`], the static schema declaring
//!   every field's section, control kind, help line, and placeholder.
//!
//! - **Capture logs inside a TUI:** install
//!   [`LogCaptureLayer`](trace::LogCaptureLayer) and drain its
//!   [`LogBuffer`](trace::LogBuffer) once per frame.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fields`] | [`PromptFields`](fields::PromptFields) state struct and typed field handles |
//! | [`catalog`] | Grouped option lists for every enumerated field |
//! | [`assemble`] | Pure prompt assembly: segments, parameters, final join |
//! | [`form`] | Static form schema driving renderers and the CLI |
//! | [`trace`] | Tracing layer that captures log lines for interactive frontends |
//!
//! # Design principles
//!
//! 1. **Assembly is pure.** [`assemble`](assemble::assemble) is a total
//!    function over its inputs, with no validation and no I/O. Bad input
//!    produces an odd prompt, never an error.
//!
//! 2. **Fields are handles, not field names.** Renderers and flag mappers
//!    match on [`TextField`](fields::TextField) /
//!    [`ChoiceField`](fields::ChoiceField) / [`FlagField`](fields::FlagField)
//!    values, so adding a field is a table entry, not a code hunt.
//!
//! 3. **Catalogs are data.** The option lists constrain what pickers offer,
//!    never what the assembler accepts. Swapping a catalog changes the menu,
//!    not the semantics.

pub mod assemble;
pub mod catalog;
pub mod fields;
pub mod form;
pub mod prelude;
pub mod trace;

// Re-export the two things almost every caller touches.
pub use assemble::assemble;
pub use fields::PromptFields;
