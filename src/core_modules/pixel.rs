// THEORY:
// The `Pixel` module is the colour side of the luma computation. A luma model only
// ever *reads* three channel intensities, so the contract it depends on is the small
// `RgbColor` capability below rather than any concrete colour type. `Pixel` is the
// crate's own "dumb" RGB container; the `image` crate's pixel types and plain arrays
// satisfy the same contract so callers never have to convert.
//
// Intensities are nominally 0..=255 but the capability does not enforce that. Values
// outside the range flow through the arithmetic untouched.

pub mod pixel {
    use crate::core_modules::luma_model::luma_model::LumaError;

    pub type Byte = u8;
    pub type Channel = Byte;
    pub type Intensity = i32;

    const RGB_CHANNELS: usize = 3;
    const RGBA_CHANNELS: usize = 4;

    /// Read-only access to the three intensities of an RGB colour.
    pub trait RgbColor {
        fn red(&self) -> Intensity;
        fn green(&self) -> Intensity;
        fn blue(&self) -> Intensity;
    }

    /// A "dumb" data container representing a single RGB colour.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }
    }

    impl RgbColor for Pixel {
        fn red(&self) -> Intensity {
            self.red as Intensity
        }

        fn green(&self) -> Intensity {
            self.green as Intensity
        }

        fn blue(&self) -> Intensity {
            self.blue as Intensity
        }
    }

    impl From<[Channel; RGB_CHANNELS]> for Pixel {
        fn from([red, green, blue]: [Channel; RGB_CHANNELS]) -> Self {
            Pixel::new(red, green, blue)
        }
    }

    impl From<Pixel> for [Channel; RGB_CHANNELS] {
        fn from(pixel: Pixel) -> Self {
            [pixel.red, pixel.green, pixel.blue]
        }
    }

    /// Accepts packed RGB or RGBA bytes. Alpha plays no part in luma and is dropped.
    impl TryFrom<&[Byte]> for Pixel {
        type Error = LumaError;

        fn try_from(bytes: &[Byte]) -> Result<Self, Self::Error> {
            match bytes.len() {
                RGB_CHANNELS | RGBA_CHANNELS => Ok(Pixel::new(bytes[0], bytes[1], bytes[2])),
                found => Err(LumaError::ChannelCount { found }),
            }
        }
    }

    impl RgbColor for [Channel; RGB_CHANNELS] {
        fn red(&self) -> Intensity {
            self[0] as Intensity
        }

        fn green(&self) -> Intensity {
            self[1] as Intensity
        }

        fn blue(&self) -> Intensity {
            self[2] as Intensity
        }
    }

    /// Unchecked intensities; anything outside 0..=255 is passed through as-is.
    impl RgbColor for (Intensity, Intensity, Intensity) {
        fn red(&self) -> Intensity {
            self.0
        }

        fn green(&self) -> Intensity {
            self.1
        }

        fn blue(&self) -> Intensity {
            self.2
        }
    }

    impl RgbColor for image::Rgb<Channel> {
        fn red(&self) -> Intensity {
            self.0[0] as Intensity
        }

        fn green(&self) -> Intensity {
            self.0[1] as Intensity
        }

        fn blue(&self) -> Intensity {
            self.0[2] as Intensity
        }
    }

    impl RgbColor for image::Rgba<Channel> {
        fn red(&self) -> Intensity {
            self.0[0] as Intensity
        }

        fn green(&self) -> Intensity {
            self.0[1] as Intensity
        }

        fn blue(&self) -> Intensity {
            self.0[2] as Intensity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;
    use crate::core_modules::luma_model::luma_model::LumaError;

    #[test]
    fn default_pixel_is_black() {
        let pixel = Pixel::default();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0, 0, 0));
    }

    #[test]
    fn pixel_reads_back_its_channels() {
        let pixel = Pixel::new(12, 34, 56);
        assert_eq!(pixel.red(), 12);
        assert_eq!(pixel.green(), 34);
        assert_eq!(pixel.blue(), 56);
        assert_eq!(<[u8; 3]>::from(pixel), [12, 34, 56]);
        assert_eq!(Pixel::from([12, 34, 56]), pixel);
    }

    #[test]
    fn rgb_and_rgba_byte_slices_convert() {
        let rgb: &[u8] = &[1, 2, 3];
        let rgba: &[u8] = &[1, 2, 3, 255];
        assert_eq!(Pixel::try_from(rgb).unwrap(), Pixel::new(1, 2, 3));
        assert_eq!(Pixel::try_from(rgba).unwrap(), Pixel::new(1, 2, 3));
    }

    #[test]
    fn wrong_length_byte_slice_is_rejected() {
        let short: &[u8] = &[1, 2];
        let long: &[u8] = &[1, 2, 3, 4, 5];
        assert!(matches!(
            Pixel::try_from(short),
            Err(LumaError::ChannelCount { found: 2 })
        ));
        assert!(matches!(
            Pixel::try_from(long),
            Err(LumaError::ChannelCount { found: 5 })
        ));
    }

    #[test]
    fn image_pixels_expose_rgb_and_ignore_alpha() {
        let rgb = image::Rgb([200u8, 100, 50]);
        let rgba = image::Rgba([200u8, 100, 50, 0]);
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (200, 100, 50));
        assert_eq!((rgba.red(), rgba.green(), rgba.blue()), (200, 100, 50));
    }

    #[test]
    fn tuples_pass_out_of_range_values_through() {
        let color: (Intensity, Intensity, Intensity) = (-10, 300, 128);
        assert_eq!(color.red(), -10);
        assert_eq!(color.green(), 300);
        assert_eq!(color.blue(), 128);
    }
}
