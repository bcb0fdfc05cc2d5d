//! Transformation layers resolved against the natal placement.
//!
//! A layer applies one stem's Sihua row and records where each transformed
//! star sits in the natal chart. The same resolver serves the natal year,
//! every major period, every fleeting year and every palace stem.

use serde::Serialize;
use ziwei_base::{
    ALL_BRANCHES, ALL_TRANSFORMATIONS, EarthlyBranch, HeavenlyStem, PalaceName, Star,
    Transformation, transformed_star,
};

use crate::error::ChartError;
use crate::frame::PalaceFrame;
use crate::placement::StarPlacement;

/// One transformed star and its natal location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SihuaEntry {
    pub transformation: Transformation,
    pub star: Star,
    pub branch: EarthlyBranch,
    pub palace: PalaceName,
}

/// The four transformations of one stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SihuaLayer {
    pub stem: HeavenlyStem,
    /// Indexed by [`Transformation::index`].
    pub entries: [SihuaEntry; 4],
}

impl SihuaLayer {
    pub fn get(&self, t: Transformation) -> &SihuaEntry {
        &self.entries[t.index() as usize]
    }

    /// Transformation carried by `star` in this layer.
    pub fn transformation_of(&self, star: Star) -> Option<Transformation> {
        self.entries
            .iter()
            .find(|e| e.star == star)
            .map(|e| e.transformation)
    }

    /// Entries landing in `branch`.
    pub fn in_branch(&self, branch: EarthlyBranch) -> impl Iterator<Item = &SihuaEntry> {
        self.entries.iter().filter(move |e| e.branch == branch)
    }
}

/// Resolve `stem`'s transformations against the natal placement.
pub fn resolve_sihua(
    stem: HeavenlyStem,
    placement: &StarPlacement,
    frame: &PalaceFrame,
) -> Result<SihuaLayer, ChartError> {
    let mut entries = [SihuaEntry {
        transformation: Transformation::Lu,
        star: Star::ZiWei,
        branch: EarthlyBranch::Zi,
        palace: PalaceName::Life,
    }; 4];
    for (slot, t) in entries.iter_mut().zip(ALL_TRANSFORMATIONS) {
        let star = transformed_star(stem, t);
        let branch = placement.branch_of(star).ok_or_else(|| {
            ChartError::InternalTableGap(format!("{stem} {t} star {star} is not placed"))
        })?;
        *slot = SihuaEntry {
            transformation: t,
            star,
            branch,
            palace: frame.name_of(branch),
        };
    }
    Ok(SihuaLayer { stem, entries })
}

/// Where a palace stem's transformed star lands relative to that palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SelfTransformKind {
    /// Star in the palace itself (离心自化).
    Outward,
    /// Star in the opposite palace (向心自化).
    Inward,
}

/// A transformation of a palace's own stem landing in or opposite that palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SelfTransformation {
    pub palace: EarthlyBranch,
    pub palace_stem: HeavenlyStem,
    pub transformation: Transformation,
    pub star: Star,
    pub kind: SelfTransformKind,
}

/// Palace-stem self transformations (宫干自化) for every palace.
pub fn palace_self_transformations(
    frame: &PalaceFrame,
    placement: &StarPlacement,
) -> Vec<SelfTransformation> {
    let mut out = Vec::new();
    for palace in ALL_BRANCHES {
        let stem = frame.stem_of(palace);
        for t in ALL_TRANSFORMATIONS {
            let star = transformed_star(stem, t);
            let kind = match placement.branch_of(star) {
                Some(b) if b == palace => SelfTransformKind::Outward,
                Some(b) if b == palace.opposite() => SelfTransformKind::Inward,
                _ => continue,
            };
            out.push(SelfTransformation {
                palace,
                palace_stem: stem,
                transformation: t,
                star,
                kind,
            });
        }
    }
    out
}
