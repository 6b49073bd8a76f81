//! wgpu compute pipeline for the batched intersection kernel.

use rayrect_gpu::{GpuContext, GpuError};
use wgpu::util::DeviceExt;

use crate::ray::RayBatch;
use crate::rect::Rect;

use super::buffers::RectParams;

/// Number of rays per workgroup; matches `@workgroup_size` in the shader.
const WORKGROUP_SIZE: u32 = 256;

/// Intersect a batch of rays with a rectangle on the GPU.
///
/// Uploads the batch's six coordinate arrays as storage buffers, dispatches
/// one shader invocation per ray and reads the result buffer back. The
/// output has exactly `batch.len()` entries, index-aligned with the batch,
/// with misses reported as [`crate::NO_HIT`].
///
/// Fails as a whole (before any per-ray work) when no adapter is available
/// or buffer mapping fails; there are no partial results.
pub async fn intersect_rectangle_gpu(batch: &RayBatch, rect: &Rect) -> Result<Vec<f32>, GpuError> {
    if batch.is_empty() {
        return Ok(Vec::new());
    }

    let ctx = GpuContext::init().await?;
    let ray_count = batch.len() as u32;

    log::debug!(
        "Dispatching rectangle intersection for {} rays (normal axis {:?})",
        ray_count,
        rect.normal_axis
    );

    // Input buffers: one per coordinate array.
    let ray_arrays: [&[f32]; 6] = [
        batch.origins_x(),
        batch.origins_y(),
        batch.origins_z(),
        batch.directions_x(),
        batch.directions_y(),
        batch.directions_z(),
    ];
    let ray_buffers: Vec<wgpu::Buffer> = ray_arrays
        .iter()
        .map(|arr| {
            ctx.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Ray Component Buffer"),
                    contents: bytemuck::cast_slice(arr),
                    usage: wgpu::BufferUsages::STORAGE,
                })
        })
        .collect();

    let params = RectParams::new(rect, batch.len());
    let params_buffer = ctx
        .device
        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rect Params Buffer"),
            contents: bytemuck::bytes_of(&params),
            usage: wgpu::BufferUsages::UNIFORM,
        });

    let output_size = (batch.len() * std::mem::size_of::<f32>()) as u64;
    let output_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Intersection Time Buffer"),
        size: output_size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });

    // Create shader module
    let shader = ctx
        .device
        .create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rect Intersect Shader"),
            source: wgpu::ShaderSource::Wgsl(super::shaders::RECT_INTERSECT_SHADER.into()),
        });

    // Bind group layout: uniform params, six read-only ray arrays, output.
    let mut layout_entries = vec![wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }];
    for binding in 1..=6 {
        layout_entries.push(wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::COMPUTE,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        });
    }
    layout_entries.push(wgpu::BindGroupLayoutEntry {
        binding: 7,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only: false },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    });

    let bind_group_layout = ctx
        .device
        .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Rect Intersect Bind Group Layout"),
            entries: &layout_entries,
        });

    let mut bind_entries = vec![wgpu::BindGroupEntry {
        binding: 0,
        resource: params_buffer.as_entire_binding(),
    }];
    for (i, buffer) in ray_buffers.iter().enumerate() {
        bind_entries.push(wgpu::BindGroupEntry {
            binding: (i + 1) as u32,
            resource: buffer.as_entire_binding(),
        });
    }
    bind_entries.push(wgpu::BindGroupEntry {
        binding: 7,
        resource: output_buffer.as_entire_binding(),
    });

    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Rect Intersect Bind Group"),
        layout: &bind_group_layout,
        entries: &bind_entries,
    });

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Rect Intersect Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

    let pipeline = ctx
        .device
        .create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("Rect Intersect Pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("intersect_rectangle"),
            compilation_options: Default::default(),
            cache: None,
        });

    // Dispatch one invocation per ray.
    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Rect Intersect Encoder"),
        });

    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Rect Intersect Pass"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(ray_count.div_ceil(WORKGROUP_SIZE), 1, 1);
    }

    // Copy results to a staging buffer for readback.
    let staging_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Staging Buffer"),
        size: output_size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, output_size);

    ctx.queue.submit(std::iter::once(encoder.finish()));

    // Read back results
    let buffer_slice = staging_buffer.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        tx.send(result).unwrap();
    });

    ctx.device.poll(wgpu::Maintain::Wait);
    rx.recv()
        .map_err(|_| GpuError::BufferMapping)?
        .map_err(|_| GpuError::BufferMapping)?;

    let data = buffer_slice.get_mapped_range();
    let ts: Vec<f32> = bytemuck::cast_slice(&data).to_vec();
    drop(data);
    staging_buffer.unmap();

    log::debug!("Rectangle intersection readback complete ({} times)", ts.len());

    Ok(ts)
}

/// Intersect a batch with a rectangle on the GPU, synchronously.
pub fn intersect_rectangle_gpu_blocking(batch: &RayBatch, rect: &Rect) -> Result<Vec<f32>, GpuError> {
    pollster::block_on(intersect_rectangle_gpu(batch, rect))
}
