//! Fetch, decode and upload of the layer textures.

use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Fetch and decode every file under `base`. All requests are issued before
/// the first await so downloads overlap; the call resolves once all of them
/// are ready. Results are keyed by file name.
pub async fn fetch_all(
    window: &web::Window,
    base: &str,
    names: &[&str],
) -> anyhow::Result<Vec<(String, DecodedImage)>> {
    let pending: Vec<(&str, String, JsFuture)> = names
        .iter()
        .map(|name| {
            let url = format!("{}{}", base, name);
            let fut = JsFuture::from(window.fetch_with_str(&url));
            (*name, url, fut)
        })
        .collect();
    let mut out = Vec::with_capacity(pending.len());
    for (name, url, fut) in pending {
        let bytes = read_response(&url, fut).await?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| anyhow::anyhow!("decode {}: {}", url, e))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        log::info!("[textures] {} {}x{}", url, width, height);
        out.push((
            name.to_string(),
            DecodedImage {
                width,
                height,
                rgba: img.into_raw(),
            },
        ));
    }
    Ok(out)
}

async fn read_response(path: &str, fut: JsFuture) -> anyhow::Result<Vec<u8>> {
    let value = fut
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", path, e))?;
    let resp: web::Response = value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", path, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", path, resp.status());
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", path, e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", path, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// GPU textures keyed by file name.
#[derive(Default)]
pub struct TextureCache {
    views: FnvHashMap<String, wgpu::TextureView>,
}

impl TextureCache {
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &str,
        image: &DecodedImage,
    ) {
        if self.views.contains_key(path) {
            return;
        }
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(path),
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
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width * 4),
                rows_per_image: Some(image.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.views.insert(path.to_string(), view);
    }

    pub fn get(&self, path: &str) -> Option<&wgpu::TextureView> {
        self.views.get(path)
    }
}
