#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColourMapKinds {
    #[default]
    HueCycle,
    FireGradient,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::HueCycle, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HueCycle => "Hue cycle",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
