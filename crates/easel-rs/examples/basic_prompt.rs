//! Minimal composer example: fill a few fields and print the prompt.
//!
//! Shows the whole library surface most callers need: set fields through
//! their typed handles, assemble, and look at the body/suffix split.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_prompt
//! ```

use easel_rs::prelude::*;

fn main() {
    // 1. Start from an all-unset draft.
    let mut fields = PromptFields::default();

    // 2. Fill in what the image should be.
    fields.set_choice(ChoiceField::Medium, "Oil Painting");
    fields.set_text(TextField::Subject, "a fox in mid-leap");
    fields.set_text(TextField::Environment, "a snowy forest at dusk");
    fields.set_choice(ChoiceField::Lighting, "Golden hour");
    fields.set_text(TextField::Artist, "Claude Monet");

    // 3. Engine parameters ride along as flags and choices.
    fields.set_choice(ChoiceField::AspectRatio, "16:9");
    fields.set_flag(FlagField::Tile, true);

    // 4. Assemble. Same fields in, same prompt out, every time.
    let config = AssembleConfig::new().with_environment_prefix("in");
    let parts = assemble_parts(&fields, &config);

    println!("prompt:  {}", parts.render());
    println!("body:    {}", parts.body());
    println!("suffix:  {}", parts.suffix());
}
