// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Asynchronous photo decoding. Decoding runs off the event loop; until it
// resolves, composition proceeds with the placeholder primitive.

use mockid_core::error::{MockidError, Result};
use mockid_core::types::Photo;
use tracing::debug;

/// Decode uploaded image bytes (JPEG, PNG, ...) into an RGBA photo bitmap.
///
/// Runs on the blocking pool so large uploads never stall the event loop.
/// Resolves to an explicit success or failure; there is no partial outcome.
pub async fn decode_photo(bytes: Vec<u8>) -> Result<Photo> {
    tokio::task::spawn_blocking(move || decode_blocking(&bytes))
        .await
        .map_err(|err| MockidError::PhotoDecode(format!("decode task failed: {err}")))?
}

fn decode_blocking(bytes: &[u8]) -> Result<Photo> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|err| MockidError::PhotoDecode(err.to_string()))?;
    let rgba = decoded.to_rgba8();
    debug!(
        width = rgba.width(),
        height = rgba.height(),
        "photo decoded"
    );
    Ok(Photo {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn valid_bytes_decode_to_rgba() {
        let photo = decode_photo(tiny_png()).await.unwrap();
        assert_eq!((photo.width, photo.height), (3, 2));
        assert_eq!(photo.pixels.len(), 3 * 2 * 4);
        assert_eq!(&photo.pixels[..4], &[10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn garbage_bytes_fail_explicitly() {
        let result = decode_photo(vec![0xde, 0xad, 0xbe, 0xef]).await;
        assert!(matches!(result, Err(MockidError::PhotoDecode(_))));
    }
}
