//! Variant-to-class tables for the visual primitives.
//!
//! These carry no state; components look up a class string and nothing else.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

/// Visual treatment of an accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionVariant {
    #[default]
    Default,
    Bordered,
    Separated,
}

impl AccordionVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "accordion",
            Self::Bordered => "accordion accordion--bordered",
            Self::Separated => "accordion accordion--separated",
        }
    }
}

/// Rendered size of an avatar badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "avatar avatar--sm",
            Self::Md => "avatar avatar--md",
            Self::Lg => "avatar avatar--lg",
            Self::Xl => "avatar avatar--xl",
        }
    }

    /// Edge length in CSS pixels, used for the image's intrinsic size.
    #[must_use]
    pub fn pixels(self) -> u32 {
        match self {
            Self::Sm => 24,
            Self::Md => 32,
            Self::Lg => 48,
            Self::Xl => 64,
        }
    }
}
