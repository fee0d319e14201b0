//! Synthetic 3D point cloud benchmark data generation.
//!
//! Produces deterministic .xyz coordinate-plus-colour files of varying
//! size and shape (sphere, cube, torus) as benchmark input for point
//! cloud viewers.
pub mod bounds;
pub mod constants;
pub mod generator;
pub mod manifest;
pub mod shape;
pub mod xyz_writer;
