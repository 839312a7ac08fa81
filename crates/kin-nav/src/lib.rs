//! Query tools over a family tree.
//!
//! Provides generation distance ([`generation::generation`]), connecting
//! paths with memoization ([`path::Navigator`]), bounded exploration
//! ([`explore`]), and the chart-row ordering and layout used to place
//! people on a genealogical chart.

pub mod explore;
pub mod generation;
pub mod layout;
pub mod order;
pub mod path;
