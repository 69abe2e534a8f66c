//! Packer data structures: imported scenes and flat output buffers.
//!
//! This module contains the core data types of the pipeline:
//!
//! - `scene` is the shape of an imported model as handed over by the import layer
//! - `model` holds the flat mesh/vertex/index buffers and their on-disk records

pub mod model;
pub mod scene;
