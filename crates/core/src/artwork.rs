//! The entry points a host calls when it wants a new picture or a redraw.
//!
//! An [`Artwork`] remembers the last seed set so a resize can replay the same
//! piece at new dimensions, while a click or key press swaps in fresh seeds.

use crate::error::TilingError;
use crate::palette::Palette;
use crate::seed::SeedSet;
use crate::surface::Surface;
use crate::tiling::{self, Report, TilingConfig};
use tracing::info;

/// A tiling configuration, a palette list, and the current seed set.
#[derive(Debug, Clone)]
pub struct Artwork {
    config: TilingConfig,
    palettes: Vec<Palette>,
    seeds: SeedSet,
}

impl Artwork {
    /// Creates an artwork, validating the config and palette list up front.
    ///
    /// Returns `TilingError::EmptyChoices` for an empty palette list, or the
    /// config's validation error.
    pub fn new(
        config: TilingConfig,
        palettes: Vec<Palette>,
        seeds: SeedSet,
    ) -> Result<Self, TilingError> {
        config.validate()?;
        if palettes.is_empty() {
            return Err(TilingError::EmptyChoices);
        }
        Ok(Self {
            config,
            palettes,
            seeds,
        })
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// The seed set the next [`generate`](Self::generate) will replay.
    pub fn seeds(&self) -> SeedSet {
        self.seeds
    }

    /// Replays the current seed set onto `surface`.
    pub fn generate<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<Report, TilingError> {
        tiling::generate(surface, &self.config, &self.palettes, &self.seeds)
    }

    /// Adopts `seeds` and draws a new piece onto `surface`.
    pub fn regenerate<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        seeds: SeedSet,
    ) -> Result<Report, TilingError> {
        info!(?seeds, "regenerating");
        self.seeds = seeds;
        self.generate(surface)
    }

    /// Changes the canvas size, keeping seeds, side and gutter.
    ///
    /// On error the previous size is kept.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), TilingError> {
        let resized = TilingConfig {
            width,
            height,
            ..self.config
        };
        resized.validate()?;
        self.config = resized;
        Ok(())
    }
}
