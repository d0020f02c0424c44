use crate::core::config::AppConfig;
use crate::core::layout::{banner_texture_url, card_image_url, layout};
use crate::render::{CardImage, SceneImages};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(what: &str, url: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{} {}: {:?}", what, url, e)
}

/// Fetch an image and decode it off the main thread into an `ImageBitmap`.
pub async fn fetch_bitmap(window: &web::Window, url: &str) -> anyhow::Result<web::ImageBitmap> {
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_err("fetch", url, e))?
        .dyn_into()
        .map_err(|e| js_err("fetch returned a non-response for", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let blob: web::Blob = JsFuture::from(resp.blob().map_err(|e| js_err("blob", url, e))?)
        .await
        .map_err(|e| js_err("blob", url, e))?
        .dyn_into()
        .map_err(|e| js_err("blob", url, e))?;
    let bitmap = JsFuture::from(
        window
            .create_image_bitmap_with_blob(&blob)
            .map_err(|e| js_err("decode", url, e))?,
    )
    .await
    .map_err(|e| js_err("decode", url, e))?
    .dyn_into::<web::ImageBitmap>()
    .map_err(|e| js_err("decode", url, e))?;
    Ok(bitmap)
}

/// Load every card image plus the banner texture. Cards sharing an image
/// number share one decode.
pub async fn load_scene_images(window: &web::Window, config: &AppConfig) -> anyhow::Result<SceneImages> {
    let placements = layout(config.card_count, config.radius);
    let mut decoded: Vec<(usize, web::ImageBitmap)> = Vec::new();
    let mut cards = Vec::with_capacity(placements.len());
    for p in &placements {
        let bitmap = match decoded.iter().find(|(n, _)| *n == p.image) {
            Some((_, b)) => b.clone(),
            None => {
                let url = card_image_url(&config.public_url, p.image);
                let b = fetch_bitmap(window, &url).await?;
                decoded.push((p.image, b.clone()));
                b
            }
        };
        cards.push(CardImage {
            index: p.index,
            bitmap,
        });
    }
    let banner = fetch_bitmap(window, &banner_texture_url(&config.public_url)).await?;
    log::info!(
        "[assets] {} card images ({} unique) + banner loaded",
        cards.len(),
        decoded.len()
    );
    Ok(SceneImages { cards, banner })
}
