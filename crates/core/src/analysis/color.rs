//! Channel-plane color conversions for region statistics.
//!
//! Conversions mirror the common 8-bit conventions: grayscale uses the
//! BT.601 weights, HSV value is the channel maximum, and Lab is scaled
//! into 0..=255 (L × 255/100, a and b offset by +128, sRGB gamma, D65
//! white point).

use ndarray::Axis;

use crate::shared::image::Image;

/// 8-bit Lab channel planes in row-major pixel order.
pub struct LabPlanes {
    pub l: Vec<u8>,
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

/// BT.601 luma: 0.299 R + 0.587 G + 0.114 B, rounded.
pub fn grayscale(image: &Image) -> Vec<u8> {
    per_pixel(image, |r, g, b| {
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)).round() as u8
    })
}

/// HSV value channel: max(R, G, B).
pub fn value_channel(image: &Image) -> Vec<u8> {
    per_pixel(image, |r, g, b| r.max(g).max(b))
}

/// 8-bit Lab planes for every pixel.
pub fn lab_planes(image: &Image) -> LabPlanes {
    let n = image.pixel_count();
    let mut planes = LabPlanes {
        l: Vec::with_capacity(n),
        a: Vec::with_capacity(n),
        b: Vec::with_capacity(n),
    };

    for lane in image.as_ndarray().lanes(Axis(2)) {
        let (l, a, b) = rgb_to_lab_8bit(lane[0], lane[1], lane[2]);
        planes.l.push(l);
        planes.a.push(a);
        planes.b.push(b);
    }
    planes
}

fn per_pixel(image: &Image, f: impl Fn(u8, u8, u8) -> u8) -> Vec<u8> {
    image
        .as_ndarray()
        .lanes(Axis(2))
        .into_iter()
        .map(|lane| f(lane[0], lane[1], lane[2]))
        .collect()
}

fn rgb_to_lab_8bit(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let r = srgb_to_linear(f64::from(r) / 255.0);
    let g = srgb_to_linear(f64::from(g) / 255.0);
    let b = srgb_to_linear(f64::from(b) / 255.0);

    // D65 white point
    let x = (0.412453 * r + 0.357580 * g + 0.180423 * b) / 0.950456;
    let y = 0.212671 * r + 0.715160 * g + 0.072169 * b;
    let z = (0.019334 * r + 0.119193 * g + 0.950227 * b) / 1.088754;

    let fx = lab_f(x);
    let fy = lab_f(y);
    let fz = lab_f(z);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    (
        clamp_u8(l * 255.0 / 100.0),
        clamp_u8(a + 128.0),
        clamp_u8(b + 128.0),
    )
}

fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn clamp_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
