//! Pure lookup tables for ZiWei Dou Shu (紫微斗数) charts.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches and the 60-cycle GanZhi pairs
//! - Five Elements, Yin/Yang polarity and three-harmony triads
//! - The Five Elements Bureau table
//! - The 36-star catalogue with categories and brightness tables
//! - Palace names, palace stems and the Four Transformations table
//!
//! Everything here is a total function over finite enumerations; no
//! calendar data or chart state is involved.

pub mod branch;
pub mod brightness;
pub mod bureau;
pub mod element;
pub mod ganzhi;
pub mod palace;
pub mod sihua;
pub mod star;
pub mod stem;

pub use branch::{ALL_BRANCHES, EarthlyBranch, Triad};
pub use brightness::{Brightness, brightness};
pub use bureau::{ALL_BUREAUS, BranchPair, FiveElementsBureau, StemCombination, bureau_for};
pub use element::{ALL_ELEMENTS, FiveElement, Polarity};
pub use ganzhi::{GANZHI_EPOCH_YEAR, GanZhi};
pub use palace::{ALL_PALACE_NAMES, PalaceName, palace_stem};
pub use sihua::{
    ALL_TRANSFORMATIONS, Transformation, sihua_row, transformation_of, transformed_star,
};
pub use star::{ALL_STARS, MAIN_STARS, Star, StarCategory, ming_zhu, shen_zhu};
pub use stem::{ALL_STEMS, HeavenlyStem};
