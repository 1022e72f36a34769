mod body_row;
mod visibility;
#[cfg(test)]
mod tests;

pub use body_row::{BodyCell, BodyEntry, BodyPosition, BodyRow, ExtraInfo, HorizontalAngle, HorizontalPosition};
pub(crate) use body_row::lenient_elements;
pub use visibility::{CelestialRecord, FilteredBody, Magnitude, SkyView, partition};
