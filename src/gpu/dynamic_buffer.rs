//! Growable typed GPU buffer.
//!
//! Buffers grow by doubling when a write exceeds capacity and never shrink.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

const MIN_CAPACITY_BYTES: usize = 256;

/// Capacity in bytes after a write of `needed` bytes into `current`.
fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        (needed * 2).max(current + MIN_CAPACITY_BYTES)
    }
}

/// A GPU buffer of `T` items that reallocates when it overflows.
pub struct DynamicBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize,
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> DynamicBuffer<T> {
    /// Empty buffer with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let bytes = (size_of::<T>() * capacity).max(MIN_CAPACITY_BYTES);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: bytes as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity: bytes,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    /// Buffer initialized from `data`. Used for static meshes.
    #[must_use]
    pub fn from_data(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let contents: &[u8] = bytemuck::cast_slice(data);
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage: usage | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            buffer,
            capacity: contents.len(),
            count: data.len(),
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    /// Replace the contents with `data`, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let capacity = grown_capacity(self.capacity, bytes.len());
        let reallocated = capacity != self.capacity;
        if reallocated {
            log::debug!(
                "Growing buffer '{}' to {capacity} bytes",
                self.label
            );
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            self.capacity = capacity;
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of items written.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the buffer holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_kept_when_data_fits() {
        assert_eq!(grown_capacity(1024, 1024), 1024);
        assert_eq!(grown_capacity(1024, 0), 1024);
    }

    #[test]
    fn capacity_doubles_past_the_request() {
        assert_eq!(grown_capacity(1024, 4000), 8000);
        // small overflow still grows by at least the minimum step
        assert_eq!(grown_capacity(1024, 1025), 2050);
        assert_eq!(grown_capacity(10, 12), 10 + MIN_CAPACITY_BYTES);
    }
}
