#![forbid(unsafe_code)]

use chroma_tokens::tokens::{BaseRole, Mode, SecondaryHue, SeedConfig};

pub struct Preset {
    pub name: &'static str,
    pub seed: SeedConfig,
}

/// One seed per mode and anchor role, plus a two-tone variant.
#[must_use]
pub fn presets() -> Vec<Preset> {
    let base = SeedConfig::default();
    vec![
        Preset {
            name: "light-accent",
            seed: base.clone(),
        },
        Preset {
            name: "dark-accent",
            seed: SeedConfig {
                mode: Mode::Dark,
                ..base.clone()
            },
        },
        Preset {
            name: "light-background",
            seed: SeedConfig {
                base_role: BaseRole::Background,
                ..base.clone()
            },
        },
        Preset {
            name: "dark-two-tone",
            seed: SeedConfig {
                mode: Mode::Dark,
                base_role: BaseRole::Background,
                secondary_hue: SecondaryHue {
                    enabled: true,
                    hue: 300.0,
                },
                ..base
            },
        },
    ]
}
