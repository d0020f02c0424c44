use super::helpers::{self, GpuMesh};
use crate::core::constants::{CARD_BEND, CARD_HEIGHT, CARD_SEGMENTS, CARD_WIDTH};
use crate::core::geometry::bent_plane;
use crate::core::scene::CardState;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CardUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) image_size: [f32; 2],
    pub(crate) radius: f32,
    pub(crate) zoom: f32,
}

pub(crate) struct CardSlot {
    pub(crate) index: usize,
    image_size: [f32; 2],
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _texture: wgpu::Texture,
}

pub(crate) struct CardsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    mesh: GpuMesh,
    slots: Vec<CardSlot>,
}

/// Decoded image for one card, keyed by the card's 1-based index.
pub struct CardImage {
    pub index: usize,
    pub bitmap: web_sys::ImageBitmap,
}

pub(crate) fn create_cards_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    globals_bgl: &wgpu::BindGroupLayout,
    object_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    images: &[CardImage],
) -> CardsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("card_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::CARD_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("card_pl"),
        bind_group_layouts: &[globals_bgl, object_bgl],
        push_constant_ranges: &[],
    });
    // rounded corners fade out through alpha
    let pipeline = helpers::make_mesh_pipeline(
        device,
        "card_pipeline",
        &pl,
        &shader,
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    let mesh = GpuMesh::upload(
        device,
        "card_mesh",
        &bent_plane(
            CARD_BEND,
            CARD_WIDTH,
            CARD_HEIGHT,
            CARD_SEGMENTS.0,
            CARD_SEGMENTS.1,
        ),
    );
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("card_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let slots = images
        .iter()
        .map(|img| {
            let label = format!("card_{}", img.index);
            let (texture, view) = helpers::create_bitmap_texture(device, queue, &label, &img.bitmap);
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label.as_str()),
                size: std::mem::size_of::<CardUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = helpers::create_object_bind_group(
                device,
                &label,
                object_bgl,
                &uniform_buffer,
                &view,
                &sampler,
            );
            CardSlot {
                index: img.index,
                image_size: [img.bitmap.width() as f32, img.bitmap.height() as f32],
                uniform_buffer,
                bind_group,
                _texture: texture,
            }
        })
        .collect();

    CardsResources {
        pipeline,
        mesh,
        slots,
    }
}

impl CardsResources {
    /// Push this frame's transform and material values for one card.
    pub(crate) fn write(&self, queue: &wgpu::Queue, world: Mat4, card: &CardState) {
        if let Some(slot) = self.slots.iter().find(|s| s.index == card.index) {
            let u = CardUniforms {
                model: world.to_cols_array_2d(),
                image_size: slot.image_size,
                radius: card.edge_radius,
                zoom: card.zoom,
            };
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>, index: usize) {
        if let Some(slot) = self.slots.iter().find(|s| s.index == index) {
            rpass.set_bind_group(1, &slot.bind_group, &[]);
            self.mesh.draw(rpass);
        }
    }
}
