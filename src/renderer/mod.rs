//! GPU drawing of the scene.
//!
//! [`SceneRenderer`] draws every visible object as an instance of one of two
//! shared meshes (unit cube, UV sphere) in a single depth-tested pass.

pub mod instance;
pub mod mesh;
pub(crate) mod pipeline_util;

pub use self::instance::{build_instances, Highlight, InstanceBatches, ObjectInstance};
pub use self::mesh::{MeshData, Vertex};
use crate::camera::{Camera, CameraBinding, Frustum};
use crate::gpu::{DepthTexture, DynamicBuffer, RenderContext};
use crate::scene::{ObjectId, Scene};

const SPHERE_STACKS: u32 = 24;
const SPHERE_SLICES: u32 = 32;
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.06,
    b: 0.08,
    a: 1.0,
};

/// Static mesh plus the instances drawn with it this frame.
struct MeshBatch {
    vertices: DynamicBuffer<Vertex>,
    indices: DynamicBuffer<u32>,
    index_count: u32,
    instances: DynamicBuffer<ObjectInstance>,
}

impl MeshBatch {
    fn new(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        Self {
            vertices: DynamicBuffer::from_data(
                device,
                &format!("{label} Vertices"),
                &mesh.vertices,
                wgpu::BufferUsages::VERTEX,
            ),
            indices: DynamicBuffer::from_data(
                device,
                &format!("{label} Indices"),
                &mesh.indices,
                wgpu::BufferUsages::INDEX,
            ),
            index_count: mesh.indices.len() as u32,
            instances: DynamicBuffer::with_capacity(
                device,
                &format!("{label} Instances"),
                64,
                wgpu::BufferUsages::VERTEX,
            ),
        }
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.instances.is_empty() {
            return;
        }
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.set_vertex_buffer(1, self.instances.buffer().slice(..));
        render_pass.set_index_buffer(
            self.indices.buffer().slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(
            0..self.index_count,
            0,
            0..self.instances.count() as u32,
        );
    }
}

/// Instanced renderer for the scene's cubes and spheres.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    camera: CameraBinding,
    depth: DepthTexture,
    cubes: MeshBatch,
    spheres: MeshBatch,
}

impl SceneRenderer {
    /// Build the pipeline and upload the static meshes.
    #[must_use]
    pub fn new(context: &RenderContext, camera: &Camera) -> Self {
        let device = &context.device;
        let camera_binding = CameraBinding::new(device, camera);
        let pipeline = create_scene_pipeline(context, &camera_binding.layout);
        let (width, height) = context.size();
        log::debug!("Scene renderer created ({width}x{height})");
        Self {
            pipeline,
            depth: DepthTexture::new(device, width, height),
            cubes: MeshBatch::new(device, "Cube", &mesh::cube()),
            spheres: MeshBatch::new(
                device,
                "Sphere",
                &mesh::uv_sphere(SPHERE_STACKS, SPHERE_SLICES),
            ),
            camera: camera_binding,
        }
    }

    /// Recreate the depth buffer for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.depth = DepthTexture::new(device, width, height);
        }
    }

    /// Upload the camera and this frame's visible instances.
    ///
    /// Returns the number of objects that survived frustum culling.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        camera: &Camera,
        scene: &Scene,
        hovered: Option<ObjectId>,
        selected: Option<ObjectId>,
    ) -> usize {
        self.camera.update(&context.queue, camera);
        let frustum = Frustum::from_view_projection(camera.build_matrix());
        let batches = build_instances(scene, &frustum, hovered, selected);
        let _ = self
            .cubes
            .instances
            .write(&context.device, &context.queue, &batches.cubes);
        let _ = self
            .spheres
            .instances
            .write(&context.device, &context.queue, &batches.spheres);
        batches.len()
    }

    /// Record the scene pass into `encoder`, targeting `view`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let mut render_pass =
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera.bind_group, &[]);
        self.cubes.draw(&mut render_pass);
        self.spheres.draw(&mut render_pass);
    }
}

fn create_scene_pipeline(
    context: &RenderContext,
    camera_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = context.device.create_shader_module(wgpu::include_wgsl!(
        "../../assets/shaders/scene.wgsl"
    ));

    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[camera_layout],
            push_constant_ranges: &[],
        },
    );

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout(), ObjectInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::surface_fragment_targets(
                    context.format(),
                ),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
