//! Prompt assembly.
//!
//! [`assemble`] turns a [`PromptFields`] snapshot into the final prompt
//! string. It is a pure function over its inputs, with no validation and
//! no I/O. Unset fields vanish from the output without leaving a stray
//! joiner behind, so an all-default snapshot renders as the empty string.
//!
//! The output has two halves. Descriptive segments ("Oil Painting of a
//! fox", "by Claude Monet") join with `", "` to form the body; engine
//! parameters (`--tile`, `--ar 16:9`) join with spaces to form the suffix.
//! [`assemble_parts`] exposes the halves before the final join for callers
//! that render them separately.

use crate::catalog::UNSET_VALUE;
use crate::fields::{ChoiceField, FlagField, PromptFields, TextField};

/// Rendering knobs that are fixed for the lifetime of a session rather
/// than edited per prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembleConfig {
    /// Choice value meaning "not selected". Compared verbatim.
    pub unset_sentinel: String,
    /// Word placed before the environment segment ("in" turns "a forest"
    /// into "in a forest"). `None` or empty emits the environment bare.
    pub environment_prefix: Option<String>,
    /// Fixed parameter emitted after all other engine parameters, e.g.
    /// "--v 6.1". `None` or empty appends nothing.
    pub version_token: Option<String>,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            unset_sentinel: UNSET_VALUE.to_string(),
            environment_prefix: None,
            version_token: None,
        }
    }
}

impl AssembleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the unset sentinel.
    pub fn with_unset_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.unset_sentinel = sentinel.into();
        self
    }

    /// Prefix the environment segment with a word such as "in".
    pub fn with_environment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.environment_prefix = Some(prefix.into());
        self
    }

    /// Emit a fixed parameter such as "--v 6.1" after all other engine
    /// parameters.
    pub fn with_version_token(mut self, token: impl Into<String>) -> Self {
        self.version_token = Some(token.into());
        self
    }

    /// An all-unset draft under this config, with every choice field
    /// holding the configured sentinel rather than the default one.
    ///
    /// Callers that reconfigure the sentinel must start from this rather
    /// than [`PromptFields::default`], or the default sentinel word would
    /// count as a selection.
    pub fn blank_fields(&self) -> PromptFields {
        let mut fields = PromptFields::default();
        if self.unset_sentinel != UNSET_VALUE {
            for field in ChoiceField::ALL {
                fields.set_choice(field, &self.unset_sentinel);
            }
        }
        fields
    }
}

/// The assembled prompt before the final body/suffix join.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptParts {
    /// Descriptive segments in emission order, joined with `", "`.
    pub segments: Vec<String>,
    /// Engine parameters in emission order, joined with `" "`.
    pub parameters: Vec<String>,
}

impl PromptParts {
    /// The descriptive half of the prompt.
    pub fn body(&self) -> String {
        self.segments.join(", ")
    }

    /// The parameter half of the prompt.
    pub fn suffix(&self) -> String {
        self.parameters.join(" ")
    }

    /// Body and suffix joined with a single space. When either half is
    /// empty the other is returned alone, so the result never carries a
    /// dangling separator.
    pub fn render(&self) -> String {
        let body = self.body();
        let suffix = self.suffix();
        match (body.is_empty(), suffix.is_empty()) {
            (true, true) => String::new(),
            (false, true) => body,
            (true, false) => suffix,
            (false, false) => format!("{body} {suffix}"),
        }
    }
}

/// Assemble the final prompt string for a field snapshot.
pub fn assemble(fields: &PromptFields, config: &AssembleConfig) -> String {
    assemble_parts(fields, config).render()
}

/// Assemble the prompt as separate segments and parameters.
pub fn assemble_parts(fields: &PromptFields, config: &AssembleConfig) -> PromptParts {
    let mut parts = PromptParts::default();

    let url = fields.text(TextField::StyleReferenceUrl);
    if !url.is_empty() {
        parts.segments.push(url.to_string());
    }

    let medium = chosen(fields, ChoiceField::Medium, config);
    let subject = fields.text(TextField::Subject);
    match (medium, subject.is_empty()) {
        (Some(medium), false) => parts.segments.push(format!("{medium} of {subject}")),
        (Some(medium), true) => parts.segments.push(medium.to_string()),
        (None, false) => parts.segments.push(subject.to_string()),
        (None, true) => {}
    }

    let environment = fields.text(TextField::Environment);
    if !environment.is_empty() {
        match config.environment_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                parts.segments.push(format!("{prefix} {environment}"));
            }
            _ => parts.segments.push(environment.to_string()),
        }
    }

    for field in [
        ChoiceField::View,
        ChoiceField::Camera,
        ChoiceField::Lens,
        ChoiceField::Lighting,
        ChoiceField::Mood,
        ChoiceField::Movement,
    ] {
        if let Some(value) = chosen(fields, field, config) {
            parts.segments.push(value.to_string());
        }
    }

    // The artist and film fields are free text but usually filled from a
    // picker, so the sentinel can land in them. Never emit "by None".
    if let Some(artist) = typed(fields, TextField::Artist, config) {
        parts.segments.push(format!("by {artist}"));
    }
    if let Some(film) = typed(fields, TextField::FilmStyle, config) {
        parts.segments.push(format!("{film} film style"));
    }

    if let Some(epoch) = chosen(fields, ChoiceField::TimeEpoch, config) {
        parts.segments.push(format!("Time Period: {epoch}"));
    }

    if fields.flag(FlagField::Tile) {
        parts.parameters.push("--tile".to_string());
    }
    if fields.flag(FlagField::StyleRaw) {
        parts.parameters.push("--style raw".to_string());
    }
    if let Some(ratio) = chosen(fields, ChoiceField::AspectRatio, config) {
        parts.parameters.push(format!("--ar {ratio}"));
    }
    let ignore = fields.text(TextField::IgnoreWords);
    if !ignore.is_empty() {
        parts.parameters.push(format!("--no {ignore}"));
    }
    // The random flag wins over an explicit reference number.
    if fields.flag(FlagField::StyleRandom) {
        parts.parameters.push("--sref random".to_string());
    } else {
        let reference = fields.text(TextField::StyleReference);
        if !reference.is_empty() {
            parts.parameters.push(format!("--sref {reference}"));
        }
    }
    if let Some(token) = config.version_token.as_deref()
        && !token.is_empty()
    {
        parts.parameters.push(token.to_string());
    }

    parts
}

/// The value of a choice field, unless it is empty or the sentinel.
fn chosen<'a>(
    fields: &'a PromptFields,
    field: ChoiceField,
    config: &AssembleConfig,
) -> Option<&'a str> {
    let value = fields.choice(field);
    (!value.is_empty() && value != config.unset_sentinel).then_some(value)
}

/// The value of a sentinel-guarded text field.
fn typed<'a>(
    fields: &'a PromptFields,
    field: TextField,
    config: &AssembleConfig,
) -> Option<&'a str> {
    let value = fields.text(field);
    (!value.is_empty() && value != config.unset_sentinel).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AssembleConfig {
        AssembleConfig::default()
    }

    #[test]
    fn default_fields_render_empty() {
        let fields = PromptFields::default();
        assert_eq!(assemble(&fields, &cfg()), "");
    }

    #[test]
    fn all_unset_omits_every_marker() {
        let out = assemble(&PromptFields::default(), &cfg());
        for marker in [
            ", ",
            "by ",
            "film style",
            "Time Period:",
            "--tile",
            "--style raw",
            "--ar",
            "--no",
            "--sref",
        ] {
            assert!(!out.contains(marker), "unexpected '{marker}' in '{out}'");
        }
    }

    #[test]
    fn same_fields_same_output() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        fields.set_choice(ChoiceField::Medium, "Oil Painting");
        fields.set_flag(FlagField::Tile, true);
        let config = cfg();
        assert_eq!(assemble(&fields, &config), assemble(&fields, &config));
        assert_eq!(assemble(&fields.clone(), &config), assemble(&fields, &config));
    }

    #[test]
    fn medium_and_subject_join_with_of() {
        let mut fields = PromptFields::default();
        fields.set_choice(ChoiceField::Medium, "Oil Painting");
        fields.set_text(TextField::Subject, "a fox");
        let parts = assemble_parts(&fields, &cfg());
        assert_eq!(parts.body(), "Oil Painting of a fox");
        assert_eq!(parts.suffix(), "");
        assert_eq!(parts.render(), "Oil Painting of a fox");
    }

    #[test]
    fn medium_alone_skips_the_joiner() {
        let mut fields = PromptFields::default();
        fields.set_choice(ChoiceField::Medium, "Watercolor");
        assert_eq!(assemble(&fields, &cfg()), "Watercolor");
    }

    #[test]
    fn subject_alone_skips_the_joiner() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        assert_eq!(assemble(&fields, &cfg()), "a fox");
    }

    #[test]
    fn style_reference_url_comes_first() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::StyleReferenceUrl, "https://example.com/ref.png");
        fields.set_choice(ChoiceField::Medium, "Photography");
        fields.set_text(TextField::Subject, "a harbor");
        assert_eq!(
            assemble(&fields, &cfg()),
            "https://example.com/ref.png, Photography of a harbor"
        );
    }

    #[test]
    fn environment_is_bare_without_prefix() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        fields.set_text(TextField::Environment, "a snowy forest");
        assert_eq!(assemble(&fields, &cfg()), "a fox, a snowy forest");
    }

    #[test]
    fn environment_prefix_is_applied_when_configured() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        fields.set_text(TextField::Environment, "a snowy forest");
        let config = cfg().with_environment_prefix("in");
        assert_eq!(assemble(&fields, &config), "a fox, in a snowy forest");
    }

    #[test]
    fn empty_prefix_behaves_like_none() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Environment, "a snowy forest");
        let config = cfg().with_environment_prefix("");
        assert_eq!(assemble(&fields, &config), "a snowy forest");
    }

    #[test]
    fn descriptors_keep_field_order() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a dancer");
        fields.set_choice(ChoiceField::Movement, "Cubism");
        fields.set_choice(ChoiceField::View, "Close-up");
        fields.set_choice(ChoiceField::Mood, "Serene");
        fields.set_choice(ChoiceField::Camera, "Leica M11");
        fields.set_choice(ChoiceField::Lighting, "Golden hour");
        fields.set_choice(ChoiceField::Lens, "85mm f/1.4");
        assert_eq!(
            assemble(&fields, &cfg()),
            "a dancer, Close-up, Leica M11, 85mm f/1.4, Golden hour, Serene, Cubism"
        );
    }

    #[test]
    fn artist_renders_with_by() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        fields.set_text(TextField::Artist, "Claude Monet");
        assert_eq!(assemble(&fields, &cfg()), "a fox, by Claude Monet");
    }

    #[test]
    fn by_none_is_never_emitted() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        fields.set_text(TextField::Artist, "None");
        let out = assemble(&fields, &cfg());
        assert!(!out.contains("by "), "sentinel artist leaked into '{out}'");
    }

    #[test]
    fn film_style_sentinel_is_ignored() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a fox");
        fields.set_text(TextField::FilmStyle, "None");
        let out = assemble(&fields, &cfg());
        assert!(!out.contains("film style"), "sentinel film leaked into '{out}'");
    }

    #[test]
    fn time_epoch_gets_labelled() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a castle");
        fields.set_choice(ChoiceField::TimeEpoch, "Medieval");
        assert_eq!(assemble(&fields, &cfg()), "a castle, Time Period: Medieval");
    }

    #[test]
    fn tile_and_ratio_follow_the_body() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a city");
        fields.set_choice(ChoiceField::AspectRatio, "16:9");
        fields.set_flag(FlagField::Tile, true);
        let parts = assemble_parts(&fields, &cfg());
        assert_eq!(parts.body(), "a city");
        let out = parts.render();
        assert!(out.ends_with("--tile --ar 16:9"), "got '{out}'");
        assert_eq!(out, "a city --tile --ar 16:9");
    }

    #[test]
    fn parameters_keep_fixed_order() {
        let mut fields = PromptFields::default();
        fields.set_flag(FlagField::Tile, true);
        fields.set_flag(FlagField::StyleRaw, true);
        fields.set_flag(FlagField::StyleRandom, true);
        fields.set_choice(ChoiceField::AspectRatio, "16:9");
        fields.set_text(TextField::IgnoreWords, "blur, text");
        let parts = assemble_parts(&fields, &cfg());
        assert_eq!(
            parts.suffix(),
            "--tile --style raw --ar 16:9 --no blur, text --sref random"
        );
    }

    #[test]
    fn random_reference_wins_over_explicit() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Artist, "Monet");
        fields.set_text(TextField::FilmStyle, "Noir");
        fields.set_flag(FlagField::StyleRandom, true);
        fields.set_text(TextField::StyleReference, "42");
        let parts = assemble_parts(&fields, &cfg());
        assert_eq!(parts.body(), "by Monet, Noir film style");
        assert_eq!(parts.suffix(), "--sref random");
        assert!(!parts.render().contains("--sref 42"));
    }

    #[test]
    fn artist_and_film_join_after_earlier_segments() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a lighthouse");
        fields.set_text(TextField::Artist, "Monet");
        fields.set_text(TextField::FilmStyle, "Noir");
        fields.set_flag(FlagField::StyleRandom, true);
        fields.set_text(TextField::StyleReference, "42");
        let out = assemble(&fields, &cfg());
        assert!(out.contains(", by Monet, Noir film style"), "got '{out}'");
        assert!(out.ends_with("--sref random"), "got '{out}'");
    }

    #[test]
    fn explicit_reference_used_when_random_off() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::StyleReference, "42");
        assert_eq!(assemble(&fields, &cfg()), "--sref 42");
    }

    #[test]
    fn version_token_lands_last() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, "a city");
        fields.set_flag(FlagField::Tile, true);
        let config = cfg().with_version_token("--v 6.1");
        assert_eq!(assemble(&fields, &config), "a city --tile --v 6.1");
    }

    #[test]
    fn version_token_alone_still_renders() {
        let config = cfg().with_version_token("--v 6.1");
        assert_eq!(assemble(&PromptFields::default(), &config), "--v 6.1");
    }

    #[test]
    fn custom_sentinel_frees_the_default_word() {
        let config = cfg().with_unset_sentinel("Unset");
        let mut fields = config.blank_fields();
        fields.set_choice(ChoiceField::Medium, "None");
        fields.set_text(TextField::Subject, "a fox");
        assert_eq!(assemble(&fields, &config), "None of a fox");
    }

    #[test]
    fn blank_fields_render_empty_under_any_sentinel() {
        let config = cfg().with_unset_sentinel("Unset");
        assert_eq!(assemble(&config.blank_fields(), &config), "");
        assert_eq!(assemble(&cfg().blank_fields(), &cfg()), "");
    }

    #[test]
    fn whitespace_subject_counts_as_set() {
        let mut fields = PromptFields::default();
        fields.set_text(TextField::Subject, " ");
        let parts = assemble_parts(&fields, &cfg());
        assert_eq!(parts.segments.len(), 1);
        assert_eq!(parts.render(), " ");
    }

    #[test]
    fn render_collapses_when_a_half_is_empty() {
        let body_only = PromptParts {
            segments: vec!["a fox".to_string()],
            parameters: vec![],
        };
        assert_eq!(body_only.render(), "a fox");

        let suffix_only = PromptParts {
            segments: vec![],
            parameters: vec!["--tile".to_string()],
        };
        assert_eq!(suffix_only.render(), "--tile");

        assert_eq!(PromptParts::default().render(), "");
    }
}
