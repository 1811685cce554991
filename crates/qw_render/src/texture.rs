//! Texture upload and sampler construction.
//!
//! `Texture` owns the GPU texture and its view only. Samplers are deliberately
//! separate: the demo builds one sampler per display mode at startup and swaps
//! between them, so filter/wrap state never lives on the texture itself.

use qw_core::{FilterKind, SamplingParams, WrapKind};

pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    /// (width, height) in pixels.
    pub size: (u32, u32),
}

impl Texture {
    /// Decode PNG bytes and upload as RGBA8.
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
    ) -> Result<Self, String> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| format!("Failed to decode image '{label}': {e}"))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba8(device, queue, &rgba, width, height, label))
    }

    /// Upload raw RGBA8 pixels.
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            size: (width, height),
        }
    }
}

/// Build a sampler realizing the given filter/wrap parameters.
pub fn create_sampler(
    device: &wgpu::Device,
    params: SamplingParams,
    label: &str,
) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wrap_to_wgpu(params.wrap_s),
        address_mode_v: wrap_to_wgpu(params.wrap_t),
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: filter_to_wgpu(params.mag_filter),
        min_filter: filter_to_wgpu(params.min_filter),
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

pub fn filter_to_wgpu(filter: FilterKind) -> wgpu::FilterMode {
    match filter {
        FilterKind::Nearest => wgpu::FilterMode::Nearest,
        FilterKind::Linear => wgpu::FilterMode::Linear,
    }
}

pub fn wrap_to_wgpu(wrap: WrapKind) -> wgpu::AddressMode {
    match wrap {
        WrapKind::Repeat => wgpu::AddressMode::Repeat,
        WrapKind::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
        WrapKind::ClampToEdge => wgpu::AddressMode::ClampToEdge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qw_core::DisplayMode;

    #[test]
    fn filter_conversion_covers_both_kinds() {
        assert_eq!(
            filter_to_wgpu(FilterKind::Nearest),
            wgpu::FilterMode::Nearest
        );
        assert_eq!(filter_to_wgpu(FilterKind::Linear), wgpu::FilterMode::Linear);
    }

    #[test]
    fn wrap_conversion_covers_all_kinds() {
        assert_eq!(wrap_to_wgpu(WrapKind::Repeat), wgpu::AddressMode::Repeat);
        assert_eq!(
            wrap_to_wgpu(WrapKind::MirroredRepeat),
            wgpu::AddressMode::MirrorRepeat
        );
        assert_eq!(
            wrap_to_wgpu(WrapKind::ClampToEdge),
            wgpu::AddressMode::ClampToEdge
        );
    }

    #[test]
    fn default_wrap_matches_wgpu_sampler_default() {
        // Filter-only modes rely on this equivalence.
        assert_eq!(
            wrap_to_wgpu(WrapKind::default()),
            wgpu::SamplerDescriptor::default().address_mode_u
        );
    }

    #[test]
    fn mixed_mode_maps_to_clamp_s_repeat_t() {
        let p = DisplayMode::Mixed.sampling_params();
        assert_eq!(wrap_to_wgpu(p.wrap_s), wgpu::AddressMode::ClampToEdge);
        assert_eq!(wrap_to_wgpu(p.wrap_t), wgpu::AddressMode::Repeat);
    }
}
