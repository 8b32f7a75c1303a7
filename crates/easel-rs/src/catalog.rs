//! Option catalogs for the enumerated form fields.
//!
//! A [`Catalog`] is the fixed list of allowed values for one field, organised
//! into labelled groups the way the form renders them (e.g. the camera list
//! splits into "Still Cameras" and "Cinema Cameras"). Catalog content is
//! data, not behavior: the assembler never consults it, and swapping in a
//! different list changes nothing but what the dropdowns offer.
//!
//! Every catalog leads with [`UNSET_VALUE`] so "clear this field" is always
//! the first thing a picker offers. The artist and film-style catalogs back
//! free-text fields; they are suggestion lists, not constraints.

use crate::fields::{ChoiceField, TextField};

/// The distinguished option meaning "no selection made".
pub const UNSET_VALUE: &str = "None";

/// A labelled run of options within a catalog.
pub struct OptionGroup {
    pub label: &'static str,
    pub options: &'static [&'static str],
}

/// The fixed list of allowed values for one field, in display order.
pub struct Catalog {
    pub groups: &'static [OptionGroup],
}

impl Catalog {
    /// The catalog constraining an enumerated field. Total: every choice
    /// field has one.
    pub fn for_choice(field: ChoiceField) -> &'static Catalog {
        match field {
            ChoiceField::Medium => &MEDIUM,
            ChoiceField::View => &VIEW,
            ChoiceField::Camera => &CAMERA,
            ChoiceField::Lens => &LENS,
            ChoiceField::Lighting => &LIGHTING,
            ChoiceField::Mood => &MOOD,
            ChoiceField::Movement => &ART_MOVEMENT,
            ChoiceField::TimeEpoch => &TIME_EPOCH,
            ChoiceField::AspectRatio => &ASPECT_RATIO,
        }
    }

    /// Suggestion list for a free-text field, where one exists. Picking a
    /// suggestion writes it into the field; typing anything else is equally
    /// valid.
    pub fn suggestions_for(field: TextField) -> Option<&'static Catalog> {
        match field {
            TextField::Artist => Some(&ARTIST),
            TextField::FilmStyle => Some(&FILM_STYLE),
            _ => None,
        }
    }

    /// All options across groups, in display order.
    pub fn options(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().flat_map(|g| g.options.iter().copied())
    }

    /// Total option count across groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.options.len()).sum()
    }

    /// True when the catalog holds no options (never the case for the
    /// shipped catalogs).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `value` is a member of this catalog (sentinel included).
    pub fn contains(&self, value: &str) -> bool {
        self.options().any(|o| o == value)
    }

    /// The option at a flat display-order index.
    pub fn option_at(&self, index: usize) -> Option<&'static str> {
        self.options().nth(index)
    }

    /// Flat display-order index of `value`, if present.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options().position(|o| o == value)
    }
}

// ── Catalog data ───────────────────────────────────────────────────

pub static MEDIUM: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Basic",
            options: &[
                UNSET_VALUE,
                "Digital Art",
                "Photography",
                "Commercial Photography",
                "Film Still",
                "Cinematic Portrait",
                "3D Render",
                "3D Clay Rendered Icon",
            ],
        },
        OptionGroup {
            label: "Traditional Art",
            options: &[
                "Oil Painting",
                "Watercolor",
                "Ink Drawing",
                "Pencil Drawing",
                "Charcoal Drawing",
                "Pastel",
            ],
        },
        OptionGroup {
            label: "Digital Styles",
            options: &["Vector Art", "Pixel Art", "Comic Style"],
        },
        OptionGroup {
            label: "Decorative Arts",
            options: &["Stained Glass", "Mosaic", "Collage"],
        },
    ],
};

pub static VIEW: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Basic",
            options: &[
                UNSET_VALUE,
                "Front view",
                "Back view",
                "Profile view",
                "Three-quarter view",
            ],
        },
        OptionGroup {
            label: "Distance",
            options: &["Close-up", "Wide angle", "Macro", "Telephoto"],
        },
        OptionGroup {
            label: "Perspective",
            options: &[
                "Aerial view",
                "Bird's eye view",
                "Worm's eye view",
                "First person",
                "Third person",
                "Over the shoulder",
                "Isometric",
            ],
        },
        OptionGroup {
            label: "Special Effects",
            options: &[
                "Shallow depth of field",
                "Dutch angle",
                "Panoramic",
                "Fish eye",
                "Tilt shift",
                "Double exposure",
                "Motion blur",
                "Long exposure",
            ],
        },
    ],
};

pub static CAMERA: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Still Cameras",
            options: &[
                UNSET_VALUE,
                "Canon EOS R5",
                "Sony A7R IV",
                "Nikon Z9",
                "Fujifilm GFX 100S",
                "Hasselblad X2D",
                "Leica M11",
                "Phase One IQ4",
                "Canon 5D Mark IV",
                "Sony A1",
                "Nikon D850",
                "Fujifilm X-T4",
                "Panasonic S1R",
                "Olympus OM-1",
            ],
        },
        OptionGroup {
            label: "Cinema Cameras",
            options: &[
                "RED V-Raptor",
                "ARRI Alexa Mini",
                "Blackmagic URSA",
                "Canon C70",
                "Sony FX9",
                "RED Komodo",
            ],
        },
    ],
};

pub static LENS: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Prime Lenses",
            options: &[
                UNSET_VALUE,
                "16mm f/2.8",
                "20mm f/1.8",
                "24mm f/1.4",
                "28mm f/1.8",
                "35mm f/1.4",
                "40mm f/2",
                "50mm f/1.2",
                "85mm f/1.4",
                "90mm f/2.8",
                "100mm f/2.8 Macro",
            ],
        },
        OptionGroup {
            label: "Zoom Lenses",
            options: &[
                "14-24mm f/2.8",
                "24-70mm f/2.8",
                "70-200mm f/2.8",
                "100-400mm f/4.5-5.6",
            ],
        },
        OptionGroup {
            label: "Super Telephoto",
            options: &["200mm f/2", "300mm f/2.8", "400mm f/2.8", "600mm f/4"],
        },
    ],
};

pub static LIGHTING: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Basic",
            options: &[UNSET_VALUE, "Natural light", "Soft lighting", "Hard lighting"],
        },
        OptionGroup {
            label: "Studio Techniques",
            options: &[
                "Studio lighting",
                "Dramatic lighting",
                "Cinematic lighting",
                "High key lighting",
                "Low key lighting",
            ],
        },
        OptionGroup {
            label: "Portrait Lighting",
            options: &[
                "Rembrandt lighting",
                "Split lighting",
                "Butterfly lighting",
                "Loop lighting",
                "Broad lighting",
                "Short lighting",
            ],
        },
        OptionGroup {
            label: "Natural Conditions",
            options: &["Golden hour", "Blue hour", "Moonlight"],
        },
        OptionGroup {
            label: "Special Effects",
            options: &[
                "Rim lighting",
                "Backlight",
                "Volumetric lighting",
                "Practical lighting",
                "Accent lighting",
            ],
        },
    ],
};

pub static MOOD: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Basic Moods",
            options: &[UNSET_VALUE, "Vibrant", "Moody", "Dramatic", "Energetic"],
        },
        OptionGroup {
            label: "Peaceful Moods",
            options: &["Serene", "Peaceful", "Minimalistic", "Ethereal"],
        },
        OptionGroup {
            label: "Atmospheric Moods",
            options: &["Mysterious", "Whimsical", "Melancholic", "Elegant"],
        },
        OptionGroup {
            label: "Dynamic Moods",
            options: &["Rustic", "Chaotic", "Dynamic"],
        },
        OptionGroup {
            label: "Additional Moods",
            options: &["Nostalgic", "Playful", "Mystical", "Tranquil", "Bold"],
        },
    ],
};

pub static ART_MOVEMENT: Catalog = Catalog {
    groups: &[OptionGroup {
        label: "Art Movements",
        options: &[
            UNSET_VALUE,
            "Art Deco",
            "Art Nouveau",
            "Baroque",
            "Bauhaus",
            "Cubism",
            "Expressionism",
            "Impressionism",
            "Minimalism",
            "Pop Art",
            "Surrealism",
            "Street Art",
            "Ukiyo-e",
        ],
    }],
};

pub static TIME_EPOCH: Catalog = Catalog {
    groups: &[OptionGroup {
        label: "Choose Epoch",
        options: &[
            UNSET_VALUE,
            "Ancient",
            "Medieval",
            "Renaissance",
            "Baroque",
            "Enlightenment",
            "Victorian",
            "Modern",
            "Post-Modern",
            "Contemporary",
            "Futuristic",
        ],
    }],
};

pub static ASPECT_RATIO: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "Default",
            options: &[UNSET_VALUE],
        },
        OptionGroup {
            label: "Square",
            options: &["1:1"],
        },
        OptionGroup {
            label: "Landscape",
            options: &["4:3", "16:9", "3:2"],
        },
        OptionGroup {
            label: "Portrait",
            options: &["2:3", "9:16", "5:7", "1:2"],
        },
    ],
};

pub static ARTIST: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "None",
            options: &[UNSET_VALUE],
        },
        OptionGroup {
            label: "Renaissance & Baroque",
            options: &[
                "Leonardo da Vinci",
                "Michelangelo",
                "Artemisia Gentileschi",
                "Rembrandt",
                "Caravaggio",
                "Johannes Vermeer",
            ],
        },
        OptionGroup {
            label: "Impressionism & Post-Impressionism",
            options: &[
                "Claude Monet",
                "Vincent van Gogh",
                "Mary Cassatt",
                "Berthe Morisot",
                "Edgar Degas",
                "Paul Cézanne",
            ],
        },
        OptionGroup {
            label: "Modern Art",
            options: &[
                "Frida Kahlo",
                "Georgia O'Keeffe",
                "Pablo Picasso",
                "Salvador Dalí",
                "Wassily Kandinsky",
                "Henri Matisse",
            ],
        },
        OptionGroup {
            label: "Contemporary Masters",
            options: &[
                "Marina Abramović",
                "Yayoi Kusama",
                "Ai Weiwei",
                "Jeff Koons",
                "Cindy Sherman",
                "Kehinde Wiley",
            ],
        },
        OptionGroup {
            label: "Photography",
            options: &[
                "Annie Leibovitz",
                "Dorothea Lange",
                "Ansel Adams",
                "Vivian Maier",
                "Henri Cartier-Bresson",
                "Diane Arbus",
            ],
        },
        OptionGroup {
            label: "Digital & Concept Artists",
            options: &[
                "Beeple",
                "Simon Stålenhag",
                "Julie Bell",
                "James Jean",
                "Artgerm",
                "Ross Tran",
            ],
        },
        OptionGroup {
            label: "Street Art",
            options: &[
                "Banksy",
                "Jean-Michel Basquiat",
                "Lady Pink",
                "KAWS",
                "Shepard Fairey",
            ],
        },
        OptionGroup {
            label: "Illustrators",
            options: &[
                "Hayao Miyazaki",
                "Tove Jansson",
                "Maurice Sendak",
                "Beatrix Potter",
                "Norman Rockwell",
            ],
        },
    ],
};

pub static FILM_STYLE: Catalog = Catalog {
    groups: &[
        OptionGroup {
            label: "None",
            options: &[UNSET_VALUE],
        },
        OptionGroup {
            label: "Film Noir",
            options: &[
                "The Maltese Falcon",
                "Double Indemnity",
                "Blade Runner",
                "Sin City",
            ],
        },
        OptionGroup {
            label: "Science Fiction",
            options: &[
                "2001: A Space Odyssey",
                "The Matrix",
                "Alien",
                "Metropolis",
                "Dune",
                "Tron",
            ],
        },
        OptionGroup {
            label: "Horror",
            options: &[
                "The Shining",
                "Nosferatu",
                "A Nightmare on Elm Street",
                "The Cabinet of Dr. Caligari",
            ],
        },
        OptionGroup {
            label: "Fantasy",
            options: &[
                "Pan's Labyrinth",
                "The Lord of the Rings",
                "The Dark Crystal",
                "The NeverEnding Story",
            ],
        },
        OptionGroup {
            label: "Western",
            options: &[
                "The Good, the Bad and the Ugly",
                "Once Upon a Time in the West",
                "Django Unchained",
            ],
        },
        OptionGroup {
            label: "Drama",
            options: &[
                "Citizen Kane",
                "The Godfather",
                "Schindler's List",
                "Lawrence of Arabia",
            ],
        },
        OptionGroup {
            label: "French New Wave",
            options: &["Breathless", "The 400 Blows", "Jules and Jim"],
        },
        OptionGroup {
            label: "German Expressionism",
            options: &["M"],
        },
        OptionGroup {
            label: "Japanese Cinema",
            options: &["Seven Samurai", "Rashomon", "Spirited Away", "Akira"],
        },
        OptionGroup {
            label: "Contemporary",
            options: &[
                "Inception",
                "Grand Budapest Hotel",
                "La La Land",
                "Mad Max: Fury Road",
            ],
        },
        OptionGroup {
            label: "Experimental",
            options: &["Un Chien Andalou", "Eraserhead", "The Holy Mountain"],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_catalogs() -> [(&'static str, &'static Catalog); 11] {
        [
            ("medium", &MEDIUM),
            ("view", &VIEW),
            ("camera", &CAMERA),
            ("lens", &LENS),
            ("lighting", &LIGHTING),
            ("mood", &MOOD),
            ("art movement", &ART_MOVEMENT),
            ("time epoch", &TIME_EPOCH),
            ("aspect ratio", &ASPECT_RATIO),
            ("artist", &ARTIST),
            ("film style", &FILM_STYLE),
        ]
    }

    #[test]
    fn every_choice_field_has_a_catalog() {
        for field in ChoiceField::ALL {
            let catalog = Catalog::for_choice(field);
            assert!(!catalog.is_empty(), "{} catalog is empty", field.label());
        }
    }

    #[test]
    fn sentinel_leads_every_catalog() {
        for (name, catalog) in all_catalogs() {
            assert_eq!(
                catalog.option_at(0),
                Some(UNSET_VALUE),
                "{name} should offer the sentinel first"
            );
        }
    }

    #[test]
    fn no_catalog_repeats_an_option() {
        for (name, catalog) in all_catalogs() {
            let mut seen = std::collections::HashSet::new();
            for option in catalog.options() {
                assert!(seen.insert(option), "{name} lists '{option}' twice");
            }
        }
    }

    #[test]
    fn contains_finds_nested_options() {
        assert!(MEDIUM.contains("Oil Painting"));
        assert!(CAMERA.contains("RED Komodo"));
        assert!(LIGHTING.contains("Golden hour"));
        assert!(!MEDIUM.contains("Crayon"));
    }

    #[test]
    fn position_and_option_at_agree() {
        let idx = ASPECT_RATIO.position("16:9").unwrap();
        assert_eq!(ASPECT_RATIO.option_at(idx), Some("16:9"));
        assert!(ASPECT_RATIO.position("21:9").is_none());
    }

    #[test]
    fn len_counts_across_groups() {
        assert_eq!(
            ASPECT_RATIO.len(),
            1 + 1 + 3 + 4,
            "default + square + landscape + portrait"
        );
    }

    #[test]
    fn suggestions_exist_only_for_artist_and_film_style() {
        assert!(Catalog::suggestions_for(TextField::Artist).is_some());
        assert!(Catalog::suggestions_for(TextField::FilmStyle).is_some());
        assert!(Catalog::suggestions_for(TextField::Subject).is_none());
        assert!(Catalog::suggestions_for(TextField::IgnoreWords).is_none());
        assert!(Catalog::suggestions_for(TextField::StyleReferenceUrl).is_none());
    }
}
