//! Rule implementations, grouped by family.

pub mod dignity;
pub mod dosha;
pub mod lunar;
pub mod raja;
pub mod wealth;

use jyotish_vedic_base::Graha;

pub(crate) const BENEFICS: [Graha; 3] = [Graha::Jupiter, Graha::Venus, Graha::Mercury];

pub(crate) fn join_names(grahas: &[Graha]) -> String {
    grahas.iter().map(|g| g.name()).collect::<Vec<_>>().join(", ")
}
