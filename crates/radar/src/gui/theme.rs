use crate::config::Appearance;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha};

pub struct ThemeColors {
    pub accent: Srgb<f64>,
    pub placeholder: Srgba<f64>,
    pub avatar_border: Srgba<f64>,
}

impl ThemeColors {
    pub fn new(appearance: &Appearance) -> Self {
        Self {
            accent: appearance.accent.to_rgb(),
            placeholder: appearance.placeholder.to_rgb().with_alpha(1.0),
            avatar_border: Srgba::new(1.0, 1.0, 1.0, 0.6),
        }
    }

    /// Configured colors, with the avatar border following the GTK theme.
    pub fn from_context(context: &gtk::StyleContext, appearance: &Appearance) -> Self {
        let defaults = Self::new(appearance);
        Self {
            avatar_border: Self::lookup_color(
                context,
                "theme_bg_color",
                defaults.avatar_border,
                Some(0.6),
            ),
            ..defaults
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}
