//! Cursor picking and hover tracking.
//!
//! A world-space ray through the cursor is cast against every scene object
//! in its local frame (slab test for cubes, quadratic for spheres). The
//! [`HoverState`] turns successive pick results into enter/exit
//! transitions.

mod hover;
mod ray;
mod ray_cast;

pub use hover::{HoverChange, HoverState};
pub use ray::Ray;
pub use ray_cast::{intersect_object, pick, PickHit};
