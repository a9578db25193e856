//! Testimonial carousel driven by [`crate::core::rotation::Rotation`].

#[cfg(target_arch = "wasm32")]
pub mod view;
