// THEORY:
// This file is the main entry point for the `luma_model` library crate.
// The public surface is a `LumaModel` built once from three
// validated channel weights, the `RgbColor` capability it reads colours through,
// and the `LumaConfig`/`SumCheck` pair that lets callers describe a model as data.
//
// The implementations live in `core_modules` and are re-exported here so consumers
// never need to spell out the nested module paths.

pub mod core_modules;

pub use crate::core_modules::luma_model::luma_model::{
    Luminance, LumaConfig, LumaError, LumaModel, SumCheck, Weight, WeightChannel,
};
pub use crate::core_modules::pixel::pixel::{Intensity, Pixel, RgbColor};

#[cfg(test)]
mod tests {
    use crate::{LumaConfig, LumaError, LumaModel, Pixel, RgbColor, SumCheck};

    /// A caller-side colour type; the model only needs the three accessors.
    struct Swatch {
        rgb: (u8, u8, u8),
    }

    impl RgbColor for Swatch {
        fn red(&self) -> i32 {
            self.rgb.0 as i32
        }

        fn green(&self) -> i32 {
            self.rgb.1 as i32
        }

        fn blue(&self) -> i32 {
            self.rgb.2 as i32
        }
    }

    #[test]
    fn foreign_colour_types_plug_in() {
        let model = LumaModel::new(0.5, 0.3, 0.2).expect("weights sum to 1.0");
        let swatch = Swatch { rgb: (200, 0, 0) };
        assert_eq!(model.compute_luma(&swatch), 100.0);
        assert_eq!(
            model.compute_luma(&swatch),
            model.compute_luma(&Pixel::new(200, 0, 0))
        );
    }

    #[test]
    fn bad_configuration_is_rejected_at_the_boundary() {
        let configs = [
            LumaConfig {
                red_weight: -0.1,
                green_weight: 0.5,
                blue_weight: 0.6,
                sum_check: SumCheck::Exact,
            },
            LumaConfig {
                red_weight: 0.3,
                green_weight: 0.3,
                blue_weight: 0.3,
                sum_check: SumCheck::Exact,
            },
        ];
        for config in configs {
            let err: LumaError = config.build().unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn rec_709_weights_are_exact() {
        let model = LumaModel::new(0.2126, 0.7152, 0.0722).expect("sums to exactly 1.0");
        let luma = model.compute_luma(&Pixel::new(255, 255, 255));
        assert!((luma - 255.0).abs() < 1e-9);
        assert!(model.to_string().contains("green_weight=0.7152"));
    }
}
