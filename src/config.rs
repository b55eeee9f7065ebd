//! Page tuning knobs. Defaults reproduce the shipped page; a JSON file can override any subset.

use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::animation::map::Overflow;
use crate::animation::presence::Motion;
use crate::animation::spring::SpringSpec;
use crate::foundation::core::Viewport;
use crate::foundation::error::{PageError, PageResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub viewport: Viewport,
    /// Fraction of a section that must be visible to mark it active.
    pub section_threshold: f64,
    /// Global progress above which the floating order button shows.
    pub cart_threshold: f64,
    /// Fraction of the pointer-to-center vector applied to the magnetic button.
    pub magnet_factor: f64,
    /// Smoothing for the top progress bar. `None` renders raw progress.
    pub progress_spring: Option<SpringSpec>,
    pub magnet_spring: SpringSpec,
    pub cart_spring: SpringSpec,
    pub menu_reveal_spring: SpringSpec,
    /// Stagger between consecutive menu cards.
    pub menu_reveal_stagger_secs: f64,
    /// Viewport inset (px) a menu card must cross before it reveals.
    pub menu_reveal_margin: f64,
    /// Visible fraction at which a gallery card counts as in view.
    pub gallery_in_view_amount: f64,
    pub gallery_motion: Motion,
    pub hero_intro: Motion,
    pub marquee_period_secs: f64,
    pub overflow: Overflow,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            section_threshold: 0.5,
            cart_threshold: 0.15,
            magnet_factor: 0.15,
            progress_spring: Some(SpringSpec::new(140.0, 25.0, 0.3)),
            magnet_spring: SpringSpec::new(200.0, 12.0, 1.0),
            cart_spring: SpringSpec::new(180.0, 18.0, 1.0),
            menu_reveal_spring: SpringSpec::new(120.0, 14.0, 1.0),
            menu_reveal_stagger_secs: 0.05,
            menu_reveal_margin: 80.0,
            gallery_in_view_amount: 0.5,
            gallery_motion: Motion::tween(0.3, Ease::EaseInOut),
            hero_intro: Motion::tween(0.6, Ease::EaseInOut),
            marquee_period_secs: 22.0,
            overflow: Overflow::Clamp,
        }
    }
}

impl PageConfig {
    pub fn from_json_str(s: &str) -> PageResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> PageResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> PageResult<()> {
        fn unit(name: &str, v: f64) -> PageResult<()> {
            if !(v.is_finite() && (0.0..=1.0).contains(&v)) {
                return Err(PageError::config(format!("{name} must be within [0, 1]")));
            }
            Ok(())
        }
        fn non_negative(name: &str, v: f64) -> PageResult<()> {
            if !(v.is_finite() && v >= 0.0) {
                return Err(PageError::config(format!("{name} must be finite and >= 0")));
            }
            Ok(())
        }

        self.viewport
            .validate()
            .map_err(|e| PageError::config(e.to_string()))?;
        unit("section_threshold", self.section_threshold)?;
        unit("cart_threshold", self.cart_threshold)?;
        unit("gallery_in_view_amount", self.gallery_in_view_amount)?;
        non_negative("magnet_factor", self.magnet_factor)?;
        non_negative("menu_reveal_stagger_secs", self.menu_reveal_stagger_secs)?;
        non_negative("menu_reveal_margin", self.menu_reveal_margin)?;
        if !(self.marquee_period_secs.is_finite() && self.marquee_period_secs > 0.0) {
            return Err(PageError::config("marquee_period_secs must be finite and > 0"));
        }

        if let Some(spec) = &self.progress_spring {
            spec.validate()?;
        }
        self.magnet_spring.validate()?;
        self.cart_spring.validate()?;
        self.menu_reveal_spring.validate()?;
        for motion in [&self.gallery_motion, &self.hero_intro] {
            match motion {
                Motion::Spring(spec) => spec.validate()?,
                Motion::Tween { duration_secs, .. } => {
                    non_negative("tween duration_secs", *duration_secs)?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
