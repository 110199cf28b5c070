use pdf_writer::{Filter, Pdf, Ref};

use crate::error::Error;

enum LogoData {
    /// Three-component JPEG, embedded unchanged.
    Jpeg(Vec<u8>),
    /// Zlib-compressed RGB samples plus an optional compressed alpha mask.
    Raw {
        rgb: Vec<u8>,
        alpha: Option<Vec<u8>>,
    },
}

/// A decoded logo ready to be written as an image XObject.
pub struct Logo {
    data: LogoData,
    pixel_width: u32,
    pixel_height: u32,
}

impl Logo {
    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8]) -> Result<Logo, Error> {
        let format = image::guess_format(bytes).map_err(|e| Error::Logo(e.to_string()))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| Error::Logo(e.to_string()))?;
        let (w, h) = (decoded.width(), decoded.height());
        if w == 0 || h == 0 {
            return Err(Error::Logo("image has no pixels".into()));
        }

        // CMYK and grayscale JPEGs decode to RGB too, so only the frame
        // header tells whether the bytes are DeviceRGB as stored.
        let data = if format == image::ImageFormat::Jpeg && jpeg_components(bytes) == Some(3) {
            LogoData::Jpeg(bytes.to_vec())
        } else {
            let rgba: image::RgbaImage = decoded.to_rgba8();
            let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);
            let rgb_data: Vec<u8> = rgba
                .pixels()
                .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
                .collect();
            let alpha = has_alpha.then(|| {
                let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6)
            });
            LogoData::Raw {
                rgb: miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6),
                alpha,
            }
        };

        log::debug!("logo decoded: {format:?} {w}x{h}");
        Ok(Logo {
            data,
            pixel_width: w,
            pixel_height: h,
        })
    }

    /// Display size for a slot `height` points tall, keeping the aspect ratio
    /// and shrinking further if the width would exceed `max_width`.
    pub fn fit(&self, height: f32, max_width: f32) -> (f32, f32) {
        let aspect = self.pixel_width as f32 / self.pixel_height as f32;
        let width = height * aspect;
        if width > max_width {
            log::warn!("logo wider than its slot ({width:.1}pt > {max_width:.1}pt), scaling down");
            (max_width, max_width / aspect)
        } else {
            (width, height)
        }
    }

    pub(crate) fn write(&self, pdf: &mut Pdf, xobj_ref: Ref, alloc: &mut impl FnMut() -> Ref) {
        let (w, h) = (self.pixel_width as i32, self.pixel_height as i32);
        match &self.data {
            LogoData::Jpeg(bytes) => {
                let mut xobj = pdf.image_xobject(xobj_ref, bytes);
                xobj.filter(Filter::DctDecode);
                xobj.width(w);
                xobj.height(h);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
            }
            LogoData::Raw { rgb, alpha } => {
                let smask_ref = alpha.as_ref().map(|alpha| {
                    let mask_ref = alloc();
                    let mut mask = pdf.image_xobject(mask_ref, alpha);
                    mask.filter(Filter::FlateDecode);
                    mask.width(w);
                    mask.height(h);
                    mask.color_space().device_gray();
                    mask.bits_per_component(8);
                    mask_ref
                });

                let mut xobj = pdf.image_xobject(xobj_ref, rgb);
                xobj.filter(Filter::FlateDecode);
                xobj.width(w);
                xobj.height(h);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
                if let Some(mask_ref) = smask_ref {
                    xobj.s_mask(mask_ref);
                }
            }
        }
    }
}

/// Component count from the first start-of-frame segment of a JPEG.
fn jpeg_components(data: &[u8]) -> Option<u8> {
    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }
    let mut i = 2;
    while i + 4 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        let marker = data[i + 1];
        if marker == 0xD9 || marker == 0xDA {
            break;
        }
        let len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        if matches!(marker, 0xC0..=0xC2) && i + 9 < data.len() {
            return Some(data[i + 9]);
        }
        i += 2 + len;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SOI, an APP0 stub, then a baseline frame header with `components`.
    fn jpeg_header(components: u8) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00];
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x10, 0x00, 0x20, components]);
        data.extend_from_slice(&[0; 12]);
        data
    }

    #[test]
    fn frame_header_component_count() {
        assert_eq!(jpeg_components(&jpeg_header(3)), Some(3));
        assert_eq!(jpeg_components(&jpeg_header(4)), Some(4));
        assert_eq!(jpeg_components(&jpeg_header(1)), Some(1));
    }

    #[test]
    fn non_jpeg_has_no_components() {
        assert_eq!(jpeg_components(b"\x89PNG\r\n"), None);
        assert_eq!(jpeg_components(&[0xFF, 0xD8]), None);
    }
}
