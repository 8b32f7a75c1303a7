//! Custom config example: turn every assembly knob and walk the form schema.
//!
//! Demonstrates:
//! - `AssembleConfig` builders (sentinel, environment prefix, version token)
//! - Starting a draft from `blank_fields` when the sentinel is customized
//! - Iterating `FORM` and fetching catalogs and suggestion lists per field
//!
//! # Usage
//!
//! ```bash
//! cargo run --example custom_config
//! ```

use easel_rs::prelude::*;

// ── Schema walk ─────────────────────────────────────────────────────

/// Print every field the form offers, with its control kind and options.
fn print_schema() {
    for section in FORM {
        println!("{}", section.title);
        for spec in section.fields {
            match spec.control {
                Control::Choice(field) => {
                    let catalog = Catalog::for_choice(field);
                    println!(
                        "  {} (choice, {} options)",
                        spec.control.label(),
                        catalog.len()
                    );
                }
                Control::Text(field) => match Catalog::suggestions_for(field) {
                    Some(catalog) => println!(
                        "  {} (text, {} suggestions)",
                        spec.control.label(),
                        catalog.len()
                    ),
                    None => println!(
                        "  {} (text, e.g. \"{}\")",
                        spec.control.label(),
                        spec.placeholder
                    ),
                },
                Control::Flag(_) => {
                    println!("  {} (flag)", spec.control.label());
                }
            }
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────

fn main() {
    print_schema();

    // Every knob turned: "Unset" means unset, environments read "in ...",
    // and a version token rides at the end of the parameters.
    let config = AssembleConfig::new()
        .with_unset_sentinel("Unset")
        .with_environment_prefix("in")
        .with_version_token("--v 6.1");

    // With a custom sentinel the draft must come from the config, so the
    // default sentinel word stays available as a real value.
    let mut fields = config.blank_fields();
    fields.set_choice(ChoiceField::Medium, "Film Still");
    fields.set_text(TextField::Subject, "a lighthouse keeper");
    fields.set_text(TextField::Environment, "a storm at sea");
    fields.set_choice(ChoiceField::Lighting, "Low key lighting");
    fields.set_flag(FlagField::StyleRaw, true);

    println!();
    println!("{}", assemble(&fields, &config));
}
