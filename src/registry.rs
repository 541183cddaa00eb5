//! In-memory camera manager for testing without a camera service.

use std::collections::HashMap;

use crate::traits::{CameraError, CameraId, CameraManager, DeviceStateCallback, Result};

/// What [`CameraRegistry::torch_mode`] reports for a known camera whose torch
/// was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsetTorch {
    /// Fail with [`CameraError::TorchNotSet`].
    #[default]
    Error,
    /// Report the torch as off.
    Off,
}

/// Test double for a platform camera manager.
///
/// Test setup registers cameras with [`add_camera`](Self::add_camera) and
/// devices with [`add_camera_device`](Self::add_camera_device); code under
/// test then reaches the registry through [`CameraManager`]. Characteristics
/// and devices are opaque: the registry stores and hands them back, nothing
/// more.
///
/// [`camera_id_list`](CameraManager::camera_id_list) reports ids in the order
/// they were added.
#[derive(Debug)]
pub struct CameraRegistry<C, D> {
    order: Vec<CameraId>,
    characteristics: HashMap<CameraId, C>,
    torches: HashMap<CameraId, bool>,
    devices: HashMap<CameraId, D>,
    unset_torch: UnsetTorch,
}

impl<C, D> Default for CameraRegistry<C, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, D> CameraRegistry<C, D> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            characteristics: HashMap::new(),
            torches: HashMap::new(),
            devices: HashMap::new(),
            unset_torch: UnsetTorch::default(),
        }
    }

    /// Set how an unset torch is reported.
    #[must_use]
    pub fn with_unset_torch(mut self, policy: UnsetTorch) -> Self {
        self.unset_torch = policy;
        self
    }

    /// Register `characteristics` under `id`.
    ///
    /// Ids keep the position of their first registration. Registering an id
    /// twice fails and leaves the original characteristics in place.
    pub fn add_camera<I: Into<CameraId>>(&mut self, id: I, characteristics: C) -> Result<()> {
        let id = require_id(id.into())?;
        if self.characteristics.contains_key(&id) {
            tracing::trace!(camera_id = %id, "rejected duplicate camera");
            return Err(CameraError::DuplicateCamera(id));
        }

        tracing::debug!(camera_id = %id, "camera registered");
        self.order.push(id.clone());
        self.characteristics.insert(id, characteristics);
        Ok(())
    }

    /// Register `device` as the handle that opening camera `id` delivers.
    ///
    /// The id does not need characteristics registered.
    pub fn add_camera_device<I: Into<CameraId>>(&mut self, id: I, device: D) -> Result<()> {
        let id = require_id(id.into())?;
        if self.devices.contains_key(&id) {
            tracing::trace!(camera_id = %id, "rejected duplicate device");
            return Err(CameraError::DuplicateDevice(id));
        }

        tracing::debug!(camera_id = %id, "camera device registered");
        self.devices.insert(id, device);
        Ok(())
    }

    /// Borrow the characteristics registered for `id`.
    pub fn characteristics(&self, id: &str) -> Result<&C> {
        check_id(id)?;
        self.characteristics
            .get(id)
            .ok_or_else(|| CameraError::CameraNotFound(id.to_owned()))
    }

    /// Get the torch mode last set for camera `id`.
    pub fn torch_mode(&self, id: &str) -> Result<bool> {
        self.require_camera(id)?;
        match (self.torches.get(id), self.unset_torch) {
            (Some(&enabled), _) => Ok(enabled),
            (None, UnsetTorch::Off) => Ok(false),
            (None, UnsetTorch::Error) => Err(CameraError::TorchNotSet(id.to_owned())),
        }
    }

    /// Whether characteristics are registered for `id`.
    pub fn contains_camera(&self, id: &str) -> bool {
        self.characteristics.contains_key(id)
    }

    /// Number of registered cameras.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no camera is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn require_camera(&self, id: &str) -> Result<()> {
        check_id(id)?;
        if self.characteristics.contains_key(id) {
            Ok(())
        } else {
            tracing::trace!(camera_id = %id, "unknown camera");
            Err(CameraError::CameraNotFound(id.to_owned()))
        }
    }
}

impl<C: Clone, D> CameraManager for CameraRegistry<C, D> {
    type Characteristics = C;
    type Device = D;

    fn camera_id_list(&self) -> Result<Vec<CameraId>> {
        Ok(self.order.clone())
    }

    fn camera_characteristics(&self, id: &str) -> Result<C> {
        self.characteristics(id).cloned()
    }

    fn set_torch_mode(&mut self, id: &str, enabled: bool) -> Result<()> {
        self.require_camera(id)?;
        tracing::debug!(camera_id = %id, enabled, "torch mode set");
        self.torches.insert(id.to_owned(), enabled);
        Ok(())
    }

    fn open_camera(&mut self, id: &str, callback: &mut dyn DeviceStateCallback<D>) -> Result<()> {
        check_id(id)?;
        let device = self.devices.get(id).ok_or_else(|| {
            tracing::trace!(camera_id = %id, "no device to open");
            CameraError::DeviceNotFound(id.to_owned())
        })?;

        tracing::debug!(camera_id = %id, "camera opened");
        callback.on_opened(device);
        Ok(())
    }
}

const fn check_id(id: &str) -> Result<()> {
    if id.is_empty() {
        Err(CameraError::InvalidArgument("camera id must not be empty"))
    } else {
        Ok(())
    }
}

fn require_id(id: CameraId) -> Result<CameraId> {
    check_id(&id)?;
    Ok(id)
}
