//! Core traits and types for the camera-manager abstraction.

use thiserror::Error;

/// Opaque camera identifier, unique within a manager.
pub type CameraId = String;

/// Coarse classification of a [`CameraError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was absent or empty.
    InvalidArgument,
    /// The id already has an entry in the relevant store.
    DuplicateId,
    /// The id has no corresponding entry.
    NotFound,
}

/// Error type for camera-manager operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    /// A required argument was absent or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Characteristics are already registered for this id.
    #[error("camera {0:?} is already registered")]
    DuplicateCamera(CameraId),
    /// A device is already registered for this id.
    #[error("a device is already registered for camera {0:?}")]
    DuplicateDevice(CameraId),
    /// No characteristics are registered for this id.
    #[error("camera {0:?} not found")]
    CameraNotFound(CameraId),
    /// No device is registered for this id.
    #[error("no device registered for camera {0:?}")]
    DeviceNotFound(CameraId),
    /// The camera is known but its torch mode was never set.
    #[error("torch mode was never set for camera {0:?}")]
    TorchNotSet(CameraId),
}

impl CameraError {
    /// Map this error onto the three-way [`ErrorKind`] taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::DuplicateCamera(_) | Self::DuplicateDevice(_) => ErrorKind::DuplicateId,
            Self::CameraNotFound(_) | Self::DeviceNotFound(_) | Self::TorchNotSet(_) => {
                ErrorKind::NotFound
            }
        }
    }
}

/// Result type for camera-manager operations.
pub type Result<T> = std::result::Result<T, CameraError>;

/// Error codes reported through [`DeviceStateCallback::on_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// The device is already in use by a higher-priority client.
    CameraInUse,
    /// Too many devices are open at once.
    MaxCamerasInUse,
    /// The device is disabled by policy.
    CameraDisabled,
    /// The device hit a fatal error and must be reopened.
    CameraDevice,
    /// The camera service hit a fatal error.
    CameraService,
}

/// Receiver for device state changes delivered by [`CameraManager::open_camera`].
///
/// Any `FnMut(&D)` closure is a callback whose `on_opened` calls the closure.
pub trait DeviceStateCallback<D> {
    /// The device finished opening and is ready for use.
    fn on_opened(&mut self, device: &D);

    /// The device is no longer available.
    fn on_disconnected(&mut self, _device: &D) {}

    /// The device hit an unrecoverable error.
    fn on_error(&mut self, _device: &D, _error: DeviceError) {}
}

impl<D, F> DeviceStateCallback<D> for F
where
    F: FnMut(&D),
{
    fn on_opened(&mut self, device: &D) {
        self(device);
    }
}

/// Abstraction over the platform camera-manager query and open surface.
///
/// Code that needs cameras takes this trait as a generic parameter, so tests
/// can hand it a [`CameraRegistry`](crate::CameraRegistry) instead of a real
/// service.
pub trait CameraManager {
    /// Descriptor returned by [`camera_characteristics`](Self::camera_characteristics).
    type Characteristics;
    /// Handle passed to [`DeviceStateCallback::on_opened`].
    type Device;

    /// List every known camera id.
    fn camera_id_list(&self) -> Result<Vec<CameraId>>;

    /// Get the characteristics registered for `id`.
    fn camera_characteristics(&self, id: &str) -> Result<Self::Characteristics>;

    /// Turn the torch of camera `id` on or off.
    fn set_torch_mode(&mut self, id: &str, enabled: bool) -> Result<()>;

    /// Open camera `id` and report the device to `callback`.
    fn open_camera(
        &mut self,
        id: &str,
        callback: &mut dyn DeviceStateCallback<Self::Device>,
    ) -> Result<()>;
}
