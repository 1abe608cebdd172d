use crate::geometry::alias::Float3;
use crate::gpu::resources::Resources;
use crate::models::model::{Model, Primitive};
use std::rc::Rc;

pub const POSITIONS_SLOT: u32 = 0;
pub const NORMALS_SLOT: u32 = 1;

pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![POSITIONS_SLOT => Float32x3];
const NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![NORMALS_SLOT => Float32x3];

/// Layouts of the two tightly packed per-vertex streams, one buffer per slot.
#[must_use]
pub fn vertex_buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    let stride = size_of::<Float3>() as wgpu::BufferAddress;
    [
        wgpu::VertexBufferLayout {
            array_stride: stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRIBUTES,
        },
        wgpu::VertexBufferLayout {
            array_stride: stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &NORMAL_ATTRIBUTES,
        },
    ]
}

#[must_use]
pub fn topology_of(primitive: Primitive) -> wgpu::PrimitiveTopology {
    match primitive {
        Primitive::Triangles => wgpu::PrimitiveTopology::TriangleList,
        Primitive::Lines => wgpu::PrimitiveTopology::LineList,
    }
}

/// Device-side copy of a model; pipeline state is set by the caller.
pub struct GpuMesh {
    positions: Rc<wgpu::Buffer>,
    normals: Rc<wgpu::Buffer>,
    indices: Rc<wgpu::Buffer>,
    indices_count: u32,
    topology: wgpu::PrimitiveTopology,
}

impl GpuMesh {
    #[must_use]
    pub fn upload(resources: &Resources, label: &str, model: &dyn Model) -> Self {
        debug_assert_eq!(model.positions().len(), model.normals().len());

        let positions = resources.create_vertex_buffer(&format!("{label}: positions"), bytemuck::cast_slice(model.positions()));
        let normals = resources.create_vertex_buffer(&format!("{label}: normals"), bytemuck::cast_slice(model.normals()));
        let indices = resources.create_index_buffer(&format!("{label}: indices"), bytemuck::cast_slice(model.indices()));

        Self {
            positions,
            normals,
            indices,
            indices_count: model.indices_count() as u32,
            topology: topology_of(model.primitive()),
        }
    }

    #[must_use]
    pub fn indices_count(&self) -> u32 {
        self.indices_count
    }

    #[must_use]
    pub fn topology(&self) -> wgpu::PrimitiveTopology {
        self.topology
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.indices_count == 0 {
            return;
        }
        pass.set_vertex_buffer(POSITIONS_SLOT, self.positions.slice(..));
        pass.set_vertex_buffer(NORMALS_SLOT, self.normals.slice(..));
        pass.set_index_buffer(self.indices.slice(..), INDEX_FORMAT);
        pass.draw_indexed(0..self.indices_count, 0, 0..1);
    }
}
