use super::helpers::{self, GpuMesh};
use crate::constants::BANNER_ANISOTROPY;
use crate::core::constants::{BANNER_HEIGHT, BANNER_RADIUS, BANNER_SEGMENTS, BANNER_TEXTURE_REPEAT};
use crate::core::geometry::open_cylinder;
use crate::core::scene::BannerState;
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BannerUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) time: f32,
    pub(crate) offset_x: f32,
    pub(crate) repeat: [f32; 2],
}

pub(crate) struct BannerResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _texture: wgpu::Texture,
}

pub(crate) fn create_banner_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    globals_bgl: &wgpu::BindGroupLayout,
    object_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    bitmap: &web_sys::ImageBitmap,
) -> BannerResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("banner_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BANNER_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("banner_pl"),
        bind_group_layouts: &[globals_bgl, object_bgl],
        push_constant_ranges: &[],
    });
    let pipeline =
        helpers::make_mesh_pipeline(device, "banner_pipeline", &pl, &shader, color_format, None);
    let mesh = GpuMesh::upload(
        device,
        "banner_mesh",
        &open_cylinder(
            BANNER_RADIUS,
            BANNER_HEIGHT,
            BANNER_SEGMENTS.0,
            BANNER_SEGMENTS.1,
        ),
    );
    // Repeat on both axes so the ever-growing offset scrolls seamlessly.
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("banner_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        anisotropy_clamp: BANNER_ANISOTROPY,
        ..Default::default()
    });
    let (texture, view) = helpers::create_bitmap_texture(device, queue, "banner_tex", bitmap);
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("banner_uniforms"),
        size: std::mem::size_of::<BannerUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = helpers::create_object_bind_group(
        device,
        "banner_bg",
        object_bgl,
        &uniform_buffer,
        &view,
        &sampler,
    );

    BannerResources {
        pipeline,
        mesh,
        uniform_buffer,
        bind_group,
        _texture: texture,
    }
}

impl BannerResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, world: Mat4, banner: &BannerState) {
        let u = BannerUniforms {
            model: world.to_cols_array_2d(),
            time: banner.shader_time,
            // whole-number shifts are invisible under repeat wrapping
            offset_x: banner.texture_offset_x.fract(),
            repeat: BANNER_TEXTURE_REPEAT,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        self.mesh.draw(rpass);
    }
}
