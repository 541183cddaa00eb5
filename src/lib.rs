//! Camera-Registry: an in-memory camera manager for unit tests
//!
//! This library provides a trait-based abstraction over a platform camera
//! manager, so code that lists, inspects, or opens cameras can be tested with
//! a [`CameraRegistry`] instead of real hardware.

pub mod registry;
pub mod traits;

pub use registry::{CameraRegistry, UnsetTorch};
pub use traits::{
    CameraError, CameraId, CameraManager, DeviceError, DeviceStateCallback, ErrorKind, Result,
};
