//! GPU context management for wgpu device and queue.

use std::sync::OnceLock;
use thiserror::Error;
use wgpu::{Device, Instance, Queue};

static GPU_CONTEXT: OnceLock<GpuContext> = OnceLock::new();

/// Errors that can occur during GPU operations.
#[derive(Debug, Error)]
pub enum GpuError {
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found")]
    NoAdapter,

    /// Failed to request GPU device.
    #[error("Failed to request GPU device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    /// Two threads raced to initialize the context.
    #[error("GPU context already initialized")]
    AlreadyInitialized,

    /// Readback buffer mapping failed.
    #[error("Buffer mapping failed")]
    BufferMapping,
}

/// Process-wide GPU context holding device and queue.
///
/// Initialized lazily on first use; the intersection kernel keeps running on
/// the same device for the lifetime of the process.
pub struct GpuContext {
    /// The wgpu device for creating buffers and pipelines.
    pub device: Device,
    /// The command queue for submitting compute work.
    pub queue: Queue,
}

impl GpuContext {
    /// Initialize the GPU context asynchronously.
    ///
    /// Subsequent calls return the existing context.
    pub async fn init() -> Result<&'static Self, GpuError> {
        if let Some(ctx) = GPU_CONTEXT.get() {
            return Ok(ctx);
        }

        let instance = Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let info = adapter.get_info();
        log::debug!("Selected GPU adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await?;

        GPU_CONTEXT
            .set(GpuContext { device, queue })
            .map_err(|_| GpuError::AlreadyInitialized)?;

        Ok(GPU_CONTEXT.get().unwrap())
    }

    /// Initialize the GPU context synchronously.
    pub fn init_blocking() -> Result<&'static Self, GpuError> {
        pollster::block_on(Self::init())
    }
}
