//! Compose a Midjourney-style prompt from command-line flags and print it.
//!
//! Every form field maps to one flag. Enumerated fields are checked against
//! their catalogs; free-text fields pass through verbatim.
//!
//! # Examples
//!
//! ```sh
//! # Compose from flags
//! easel --medium "Oil Painting" --subject "a fox"
//!
//! # Engine parameters land after the descriptive body
//! easel --subject "a city" --ar 16:9 --tile
//!
//! # See what a dropdown would offer
//! easel --list lighting
//!
//! # Machine-readable output with the parts broken out
//! easel --subject "a fox" --tile --json
//! ```

use clap::Parser;
use std::process;

use easel_rs::assemble::{AssembleConfig, assemble_parts};
use easel_rs::catalog::{self, Catalog, UNSET_VALUE};
use easel_rs::fields::{ChoiceField, FlagField, PromptFields, TextField};

/// Compose a Midjourney-style prompt from flags and print it.
#[derive(Parser)]
#[command(name = "easel")]
struct Cli {
    // ── Subject matter ─────────────────────────────────────────
    /// Main subject of the image
    #[arg(long)]
    subject: Option<String>,

    /// Where the scene takes place
    #[arg(long)]
    environment: Option<String>,

    /// Medium or technique (catalog value, see --list medium)
    #[arg(long)]
    medium: Option<String>,

    // ── Composition ────────────────────────────────────────────
    /// Framing and perspective (see --list view)
    #[arg(long)]
    view: Option<String>,

    /// Camera body (see --list camera)
    #[arg(long)]
    camera: Option<String>,

    /// Lens and aperture (see --list lens)
    #[arg(long)]
    lens: Option<String>,

    /// Lighting setup or condition (see --list lighting)
    #[arg(long)]
    lighting: Option<String>,

    // ── Style ──────────────────────────────────────────────────
    /// Emotional tone (see --list mood)
    #[arg(long)]
    mood: Option<String>,

    /// Art movement (see --list movement)
    #[arg(long)]
    movement: Option<String>,

    /// Artist whose style to evoke, rendered as "by <artist>"
    #[arg(long)]
    artist: Option<String>,

    /// Film whose look to evoke, rendered as "<film> film style"
    #[arg(long = "film")]
    film_style: Option<String>,

    /// Historical period, rendered as "Time Period: <epoch>"
    #[arg(long = "epoch")]
    time_epoch: Option<String>,

    // ── Style reference ────────────────────────────────────────
    /// Style reference seed number (emitted as --sref <n>)
    #[arg(long = "sref")]
    style_reference: Option<String>,

    /// Reference image URL, placed first in the prompt
    #[arg(long = "sref-url")]
    style_reference_url: Option<String>,

    /// Emit --sref random instead of the seed number
    #[arg(long = "random-sref")]
    random_sref: bool,

    // ── Engine parameters ──────────────────────────────────────
    /// Aspect ratio (see --list ar)
    #[arg(long = "ar")]
    aspect_ratio: Option<String>,

    /// Words the engine should avoid (emitted as --no <words>)
    #[arg(long = "no", value_name = "WORDS")]
    ignore_words: Option<String>,

    /// Emit --tile for seamless patterns
    #[arg(long)]
    tile: bool,

    /// Emit --style raw
    #[arg(long = "style-raw")]
    style_raw: bool,

    // ── Rendering ──────────────────────────────────────────────
    /// Word placed before the environment segment (e.g. "in")
    #[arg(long = "env-prefix")]
    env_prefix: Option<String>,

    /// Choice value treated as "not selected"
    #[arg(long, default_value = UNSET_VALUE)]
    sentinel: String,

    /// Fixed parameter emitted after all other engine parameters (e.g. "--v 6.1")
    #[arg(long = "version-token")]
    version_token: Option<String>,

    // ── Output mode ────────────────────────────────────────────
    /// Print the prompt parts as pretty JSON
    #[arg(long)]
    json: bool,

    /// Print a catalog instead of composing (medium, view, camera, lens,
    /// lighting, mood, movement, epoch, ar, artist, film)
    #[arg(long, value_name = "CATALOG")]
    list: Option<String>,
}

// ── Helpers ────────────────────────────────────────────────────────

/// Set a choice field after checking the value against its catalog.
fn set_choice_checked(
    fields: &mut PromptFields,
    field: ChoiceField,
    value: &Option<String>,
    flag: &str,
) -> Result<(), String> {
    if let Some(value) = value {
        let options = Catalog::for_choice(field);
        if !options.contains(value) {
            return Err(format!(
                "'{value}' is not a {} option (see easel --list {flag})",
                field.label()
            ));
        }
        fields.set_choice(field, value);
    }
    Ok(())
}

fn build_fields(cli: &Cli, config: &AssembleConfig) -> Result<PromptFields, String> {
    let mut fields = config.blank_fields();

    if let Some(v) = &cli.subject {
        fields.set_text(TextField::Subject, v);
    }
    if let Some(v) = &cli.environment {
        fields.set_text(TextField::Environment, v);
    }
    if let Some(v) = &cli.artist {
        fields.set_text(TextField::Artist, v);
    }
    if let Some(v) = &cli.film_style {
        fields.set_text(TextField::FilmStyle, v);
    }
    if let Some(v) = &cli.style_reference {
        fields.set_text(TextField::StyleReference, v);
    }
    if let Some(v) = &cli.style_reference_url {
        fields.set_text(TextField::StyleReferenceUrl, v);
    }
    if let Some(v) = &cli.ignore_words {
        fields.set_text(TextField::IgnoreWords, v);
    }

    set_choice_checked(&mut fields, ChoiceField::Medium, &cli.medium, "medium")?;
    set_choice_checked(&mut fields, ChoiceField::View, &cli.view, "view")?;
    set_choice_checked(&mut fields, ChoiceField::Camera, &cli.camera, "camera")?;
    set_choice_checked(&mut fields, ChoiceField::Lens, &cli.lens, "lens")?;
    set_choice_checked(&mut fields, ChoiceField::Lighting, &cli.lighting, "lighting")?;
    set_choice_checked(&mut fields, ChoiceField::Mood, &cli.mood, "mood")?;
    set_choice_checked(&mut fields, ChoiceField::Movement, &cli.movement, "movement")?;
    set_choice_checked(&mut fields, ChoiceField::TimeEpoch, &cli.time_epoch, "epoch")?;
    set_choice_checked(&mut fields, ChoiceField::AspectRatio, &cli.aspect_ratio, "ar")?;

    fields.set_flag(FlagField::Tile, cli.tile);
    fields.set_flag(FlagField::StyleRaw, cli.style_raw);
    fields.set_flag(FlagField::StyleRandom, cli.random_sref);

    Ok(fields)
}

fn build_config(cli: &Cli) -> AssembleConfig {
    let mut config = AssembleConfig::new().with_unset_sentinel(&cli.sentinel);
    if let Some(prefix) = &cli.env_prefix {
        config = config.with_environment_prefix(prefix);
    }
    if let Some(token) = &cli.version_token {
        config = config.with_version_token(token);
    }
    config
}

fn catalog_by_name(name: &str) -> Result<&'static Catalog, String> {
    let catalog = match name.to_lowercase().as_str() {
        "medium" => Catalog::for_choice(ChoiceField::Medium),
        "view" => Catalog::for_choice(ChoiceField::View),
        "camera" => Catalog::for_choice(ChoiceField::Camera),
        "lens" => Catalog::for_choice(ChoiceField::Lens),
        "lighting" => Catalog::for_choice(ChoiceField::Lighting),
        "mood" => Catalog::for_choice(ChoiceField::Mood),
        "movement" | "art-movement" => Catalog::for_choice(ChoiceField::Movement),
        "epoch" | "time-epoch" => Catalog::for_choice(ChoiceField::TimeEpoch),
        "ar" | "aspect-ratio" => Catalog::for_choice(ChoiceField::AspectRatio),
        "artist" => &catalog::ARTIST,
        "film" | "film-style" => &catalog::FILM_STYLE,
        other => {
            return Err(format!(
                "unknown catalog '{other}': expected one of medium, view, camera, \
                 lens, lighting, mood, movement, epoch, ar, artist, film"
            ));
        }
    };
    Ok(catalog)
}

/// Render a catalog as indented groups, the way a dropdown shows it.
fn render_catalog(name: &str) -> Result<String, String> {
    let catalog = catalog_by_name(name)?;
    let mut out = String::new();
    for group in catalog.groups {
        out.push_str(group.label);
        out.push('\n');
        for option in group.options {
            out.push_str("  ");
            out.push_str(option);
            out.push('\n');
        }
    }
    Ok(out.trim_end().to_string())
}

fn run(cli: &Cli) -> Result<String, String> {
    if let Some(name) = &cli.list {
        return render_catalog(name);
    }

    let config = build_config(cli);
    let fields = build_fields(cli, &config)?;
    let parts = assemble_parts(&fields, &config);

    if cli.json {
        let value = serde_json::json!({
            "prompt": parts.render(),
            "body": parts.body(),
            "suffix": parts.suffix(),
            "segments": parts.segments,
            "parameters": parts.parameters,
        });
        return serde_json::to_string_pretty(&value)
            .map_err(|e| format!("failed to format JSON output: {e}"));
    }

    Ok(parts.render())
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("args should parse")
    }

    #[test]
    fn flags_compose_a_prompt() {
        let cli = parse(&["easel", "--medium", "Oil Painting", "--subject", "a fox"]);
        assert_eq!(run(&cli).unwrap(), "Oil Painting of a fox");
    }

    #[test]
    fn engine_parameters_follow_the_body() {
        let cli = parse(&["easel", "--subject", "a city", "--ar", "16:9", "--tile"]);
        assert_eq!(run(&cli).unwrap(), "a city --tile --ar 16:9");
    }

    #[test]
    fn unknown_choice_value_is_rejected() {
        let cli = parse(&["easel", "--medium", "Crayon"]);
        let err = run(&cli).unwrap_err();
        assert!(err.contains("Crayon"), "got '{err}'");
        assert!(err.contains("--list medium"), "got '{err}'");
    }

    #[test]
    fn artist_stays_free_text() {
        let cli = parse(&["easel", "--subject", "a fox", "--artist", "my neighbor Pat"]);
        assert_eq!(run(&cli).unwrap(), "a fox, by my neighbor Pat");
    }

    #[test]
    fn sentinel_flag_changes_what_counts_as_unset() {
        let cli = parse(&["easel", "--medium", "None", "--sentinel", "Unset"]);
        assert_eq!(run(&cli).unwrap(), "None");
    }

    #[test]
    fn list_prints_grouped_options() {
        let cli = parse(&["easel", "--list", "ar"]);
        let out = run(&cli).unwrap();
        assert!(out.contains("Landscape"));
        assert!(out.contains("  16:9"));
    }

    #[test]
    fn unknown_catalog_name_is_rejected() {
        let cli = parse(&["easel", "--list", "sandwich"]);
        assert!(run(&cli).unwrap_err().contains("unknown catalog"));
    }

    #[test]
    fn json_output_carries_the_parts() {
        let cli = parse(&["easel", "--subject", "a fox", "--tile", "--json"]);
        let out = run(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["prompt"], "a fox --tile");
        assert_eq!(value["body"], "a fox");
        assert_eq!(value["suffix"], "--tile");
        assert_eq!(value["segments"][0], "a fox");
        assert_eq!(value["parameters"][0], "--tile");
    }
}
