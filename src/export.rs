use std::io::Cursor;

use egui::Vec2;
use image::{ImageFormat, RgbaImage};

use crate::error::{ExportError, ExportResult};
use crate::render::{Frame, RasterSurface};

/// Paint `frame` onto an off-screen raster `scale` times the canvas size
pub fn rasterize(
    frame: &Frame,
    canvas_size: Vec2,
    scale: f32,
    max_dimension: u32,
) -> ExportResult<RgbaImage> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(ExportError::InvalidScale(scale));
    }

    let width = (canvas_size.x * scale).round();
    let height = (canvas_size.y * scale).round();
    let max = max_dimension as f32;
    if width < 1.0 || height < 1.0 {
        return Err(ExportError::Empty {
            width: width as u32,
            height: height as u32,
        });
    }
    if width > max || height > max {
        return Err(ExportError::TooLarge {
            width: width as u32,
            height: height as u32,
            max: max_dimension,
        });
    }

    let mut surface = RasterSurface::new(width as u32, height as u32, scale);
    frame.paint(&mut surface);
    Ok(surface.into_image())
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// File name used for a download, stamped with the current time
pub fn export_file_name() -> String {
    format!("aquasketch-{}.png", crate::util::time::timestamp_secs())
}

/// Hand the PNG to the platform: a file in the working directory on native
/// builds. Returns where it went.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(bytes: &[u8]) -> ExportResult<String> {
    let name = export_file_name();
    std::fs::write(&name, bytes)?;
    log::info!("Exported {} bytes to {name}", bytes.len());
    Ok(name)
}

/// Hand the PNG to the platform: a browser download on the web. Returns
/// the suggested file name.
#[cfg(target_arch = "wasm32")]
pub fn deliver(bytes: &[u8]) -> ExportResult<String> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn js_err(value: JsValue) -> ExportError {
        ExportError::Download(format!("{value:?}"))
    }

    let name = export_file_name();
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("could not create link".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;

    log::info!("Exported {} bytes as {name}", bytes.len());
    Ok(name)
}
