use crate::gpu::context::Context;
use std::rc::Rc;
use wgpu::util::DeviceExt;
use wgpu::BufferUsages;

pub struct Resources {
    context: Rc<Context>,
}

impl Resources {
    #[must_use]
    pub fn new(context: Rc<Context>) -> Self {
        Self { context }
    }

    #[must_use]
    pub(crate) fn create_buffer(&self, label: &str, usage: BufferUsages, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        let buffer = self.context.device().create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: buffer_data,
            usage,
        });
        Rc::new(buffer)
    }

    #[must_use]
    pub(crate) fn create_vertex_buffer(&self, label: &str, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        self.create_buffer(label, BufferUsages::VERTEX | BufferUsages::COPY_DST, buffer_data)
    }

    #[must_use]
    pub(crate) fn create_index_buffer(&self, label: &str, buffer_data: &[u8]) -> Rc<wgpu::Buffer> {
        self.create_buffer(label, BufferUsages::INDEX | BufferUsages::COPY_DST, buffer_data)
    }
}
