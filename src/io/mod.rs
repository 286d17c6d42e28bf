//! Export of marched meshes to interchange formats.

#[cfg(feature = "stl-io")]
mod stl;
