//! ZiWei Dou Shu (紫微斗数) chart engine.
//!
//! This crate provides:
//! - Palace frame construction (Life/Body palaces, names, palace stems)
//! - Main-star placement from bureau and lunar day
//! - Auxiliary, malefic and peach-blossom star rules
//! - Sihua layers for any stem, including palace-stem self transformation
//! - Major periods and fleeting-year overlays
//! - Palace relations and the assembled, serializable [`Chart`]
//!
//! Every step is a pure function; the only input besides the birth record is
//! the [`ziwei_time::LunarCalendar`] used for normalization.

pub mod auxiliary;
pub mod chart;
pub mod error;
pub mod frame;
pub mod main_stars;
pub mod overlay;
pub mod periods;
pub mod placement;
pub mod relations;
pub mod sihua;

pub use auxiliary::{AUXILIARY_STAR_COUNT, AuxiliaryInputs, place_auxiliary_stars};
pub use chart::{Chart, Palace, StarInfo, assemble, assemble_normalized};
pub use error::ChartError;
pub use frame::PalaceFrame;
pub use main_stars::{ZIWEI_TABLE, place_main_stars, tianfu_branch, ziwei_branch};
pub use overlay::{
    ChartView, FleetingYear, OverlayPalace, PeriodView, Selection, overlay_palaces, view,
};
pub use periods::{
    Direction, MAJOR_PERIOD_COUNT, MajorPeriod, YEARS_PER_PERIOD, major_periods,
    period_direction,
};
pub use placement::StarPlacement;
pub use relations::{EmptyLifePalace, PalaceRelations, empty_life_palace, palace_relations};
pub use sihua::{
    SelfTransformKind, SelfTransformation, SihuaEntry, SihuaLayer, palace_self_transformations,
    resolve_sihua,
};
