use image::Rgb;

use crate::math::vec::Vec3;

/// Linear RGB, components nominally in `[0, 1]`.
pub type Color = Vec3;

pub const WHITE: Color = Vec3::new(1.0, 1.0, 1.0);
pub const BLACK: Color = Vec3::new(0.0, 0.0, 0.0);
pub const RED: Color = Vec3::new(1.0, 0.0, 0.0);
pub const SKY_BLUE: Color = Vec3::new(0.5, 0.7, 1.0);

/// Scale used to map `[0, 1]` onto `0..=255`; `1.0` must land on 255, not 256.
pub const CHANNEL_SCALE: f32 = 255.99;

/// `floor(255.99 * c)` after clamping to `[0, 1]`. NaN maps to 0.
pub fn channel_to_u8(c: f32) -> u8 {
    (CHANNEL_SCALE * c.clamp(0.0, 1.0)).floor() as u8
}

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb<f32> {
    fn vec(&self) -> Vec3 {
        Vec3(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb<f32>;
    fn rgb8(&self) -> Rgb<u8>;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb<f32> {
        Rgb(self.0)
    }

    fn rgb8(&self) -> Rgb<u8> {
        Rgb(self.0.map(channel_to_u8))
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    #[test]
    fn channel_scaling() {
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(0.5), 127);
        assert_eq!(channel_to_u8(0.999), 255);
        assert_eq!(channel_to_u8(1.5), 255);
        assert_eq!(channel_to_u8(-0.2), 0);
        assert_eq!(channel_to_u8(f32::NAN), 0);
    }

    #[test]
    fn rgb_conversions() {
        assert_eq!(SKY_BLUE.rgb8(), Rgb([127, 179, 255]));
        assert_eq!(RED.rgb().vec(), RED);
        assert_eq!(BLACK.rgb8(), Rgb([0, 0, 0]));
        assert_eq!(WHITE.rgb8(), Rgb([255, 255, 255]));
    }
}
