//! meshpack
//!
//! A small pipeline for packing 3D model files into a flat, renderer-ready
//! binary layout. Model parsing is delegated to import crates; this crate
//! owns the transformation from an imported scene into three contiguous
//! buffers (mesh table, vertex pool, index pool) and the byte-exact
//! serialization of those buffers.
//!
//! High-level modules
//! - `data_structures`: scene-side input types and the flat output buffers
//! - `resources`: importers that turn model files into a [`data_structures::scene::Scene`]
//! - `flatten`: merges per-submesh geometry into shared global pools
//! - `export`: writes the flat buffers in the fixed binary layout
//!

pub mod data_structures;
pub mod export;
pub mod flatten;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::Vector3;
