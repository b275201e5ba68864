//! Page layout: from source pixels to positioned page shapes.
//!
//! The stages run strictly forward:
//!
//! 1. A [`PageFrame`] is fitted around the whole drawing.
//! 2. [`HeaderBands`] measures pool and lane header bands.
//! 3. Node shapes and detached labels are resolved against the frame.
//! 4. Recorded waypoints become rounded connectors.
//! 5. [`assemble`] orders everything and assigns shape IDs.

mod connector;
mod header;
mod label;
mod page;
mod shapes;
mod transform;

pub use header::HeaderBands;
pub use page::{Page, assemble};
pub use transform::{PageFrame, diagram_extent};
