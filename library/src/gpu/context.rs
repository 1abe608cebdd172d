/// Device and queue owned by the caller and handed to whoever uploads.
pub struct Context {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl Context {
    #[must_use]
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }

    #[must_use]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[must_use]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
