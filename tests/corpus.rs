//! Test corpus: decode/encode sweeps over sizes, depths, and patterns.

use zenbmp::*;

fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            if (x + y) % 2 == 0 {
                for c in 0..bpp {
                    pixels[off + c] = 200 + (c as u8 * 10);
                }
            } else {
                for c in 0..bpp {
                    pixels[off + c] = 10 + (c as u8 * 30);
                }
            }
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Wrap tightly packed BGR(A) rows in a BMP container. Row padding is
/// filled with nonzero bytes so padding preservation is observable.
fn wrap_bmp(stored: &[u8], w: usize, h: usize, bits: u16) -> Vec<u8> {
    let bpp = bits as usize / 8;
    let row = (bits as usize * w).div_ceil(32) * 4;
    let mut out = Vec::with_capacity(54 + row * h);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((54 + row * h) as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bits.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&((row * h) as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 16]);
    for (y, r) in stored.chunks_exact(w * bpp).enumerate() {
        out.extend_from_slice(r);
        out.extend((0..row - r.len()).map(|i| 0xA0 | ((y + i) as u8 & 0x0F)));
    }
    out
}

fn assert_pixels_match(img: &Bitmap, stored: &[u8], bpp: usize) {
    let w = img.width() as usize;
    for (i, px) in img.pixels().iter().enumerate() {
        let (x, y) = (i % w, i / w);
        let s = &stored[i * bpp..i * bpp + bpp];
        assert_eq!(
            (px.r, px.g, px.b),
            (s[2], s[1], s[0]),
            "pixel ({x}, {y}) mismatch"
        );
        let alpha = if bpp == 4 { s[3] } else { 0 };
        assert_eq!(px.a, alpha, "alpha ({x}, {y}) mismatch");
    }
}

// ── Size sweeps ──────────────────────────────────────────────────────

#[test]
fn all_small_sizes_roundtrip_24bit() {
    for w in 1..=9 {
        for h in 1..=4 {
            let stored = noise_pattern(w, h, 3);
            let input = wrap_bmp(&stored, w, h, 24);
            let mut img = Bitmap::decode(input.clone()).unwrap();
            assert_pixels_match(&img, &stored, 3);
            assert_eq!(
                img.row_size_bytes(),
                (24 * w).div_ceil(32) * 4,
                "row size for width {w}"
            );
            assert_eq!(img.encode(), &input[..], "{w}x{h} 24-bit roundtrip");
        }
    }
}

#[test]
fn all_small_sizes_roundtrip_32bit() {
    for w in 1..=9 {
        for h in 1..=4 {
            let stored = noise_pattern(w, h, 4);
            let input = wrap_bmp(&stored, w, h, 32);
            let mut img = Bitmap::decode(input.clone()).unwrap();
            assert_pixels_match(&img, &stored, 4);
            assert_eq!(img.padding_bytes(), 0);
            assert_eq!(img.encode(), &input[..], "{w}x{h} 32-bit roundtrip");
        }
    }
}

#[test]
fn large_checkerboard_roundtrip() {
    // Tall enough to cross several stop-check intervals.
    let (w, h) = (37, 53);
    for bits in [24u16, 32] {
        let bpp = bits as usize / 8;
        let stored = checkerboard(w, h, bpp);
        let input = wrap_bmp(&stored, w, h, bits);
        let img = Bitmap::decode(input.clone()).unwrap();
        assert_pixels_match(&img, &stored, bpp);
        assert_eq!(img.into_bytes(), input);
    }
}

#[test]
fn checkerboard_32bit_alpha_survives() {
    let stored = checkerboard(4, 4, 4);
    let img = Bitmap::decode(wrap_bmp(&stored, 4, 4, 32)).unwrap();
    assert_eq!(img.pixel(0, 0).unwrap(), Pixel::new(220, 210, 200, 230));
    assert_eq!(img.pixel(1, 0).unwrap(), Pixel::new(70, 40, 10, 100));
}

// ── Mutation ─────────────────────────────────────────────────────────

#[test]
fn inverted_image_reencodes_inverted_bytes() {
    let (w, h) = (5, 3);
    let stored = noise_pattern(w, h, 3);
    let input = wrap_bmp(&stored, w, h, 24);
    let mut img = Bitmap::decode(input.clone()).unwrap();
    for px in img.pixels_mut() {
        px.r = !px.r;
        px.g = !px.g;
        px.b = !px.b;
    }
    let out = img.encode().to_vec();
    assert_eq!(&out[..54], &input[..54], "header must pass through");

    let row = img.row_size_bytes();
    for y in 0..h {
        let base = 54 + y * row;
        for i in 0..w * 3 {
            assert_eq!(out[base + i], !input[base + i]);
        }
        assert_eq!(out[base + w * 3..base + row], input[base + w * 3..base + row]);
    }
}

#[test]
fn mutated_24bit_alpha_is_not_written() {
    let stored = checkerboard(3, 3, 3);
    let input = wrap_bmp(&stored, 3, 3, 24);
    let mut img = Bitmap::decode(input.clone()).unwrap();
    for px in img.pixels_mut() {
        px.a = 0x77;
    }
    assert_eq!(img.encode(), &input[..]);
}

#[test]
fn rgb8_export_matches_accessors() {
    let (w, h) = (6, 4);
    let stored = noise_pattern(w, h, 4);
    let img = Bitmap::decode(wrap_bmp(&stored, w, h, 32)).unwrap();
    let rgb = img.to_rgb8_bytes().unwrap();
    assert_eq!(rgb.len(), w * h * 3);
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            let (r, g, b) = img.get_pixel_rgb(x as i64, y as i64).unwrap();
            assert_eq!(&rgb[off..off + 3], &[r, g, b]);
        }
    }
    let rgba = img.as_rgba8_bytes();
    assert_eq!(rgba.len(), w * h * 4);
    for (px, chunk) in img.pixels().iter().zip(rgba.chunks_exact(4)) {
        assert_eq!(chunk, &[px.r, px.g, px.b, px.a]);
    }
}

// ── Malformed input ──────────────────────────────────────────────────

#[test]
fn truncations_never_panic() {
    let input = wrap_bmp(&noise_pattern(4, 4, 3), 4, 4, 24);
    for len in 0..input.len() {
        assert!(
            Bitmap::decode(input[..len].to_vec()).is_err(),
            "truncated to {len} bytes should fail"
        );
    }
}

#[test]
fn garbage_headers_never_panic() {
    let mut state: u32 = 0x1234_5678;
    let mut decoded = 0;
    for _ in 0..256 {
        let mut data = vec![0u8; 64];
        for b in data.iter_mut() {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *b = state as u8;
        }
        data[0] = b'B';
        data[1] = b'M';
        data[28] = if state & 1 == 0 { 24 } else { 32 };
        data[29] = 0;
        data[10..14].copy_from_slice(&(state % 64).to_le_bytes());
        // Keep width and height small and positive so some geometries fit.
        data[18..22].copy_from_slice(&(1 + (state >> 8) % 4).to_le_bytes());
        data[22..26].copy_from_slice(&(1 + (state >> 16) % 4).to_le_bytes());
        if let Ok(mut img) = Bitmap::decode(data.clone()) {
            decoded += 1;
            assert_eq!(img.encode(), &data[..]);
        }
    }
    assert!(decoded > 0, "no random geometry fit the buffer");
}
