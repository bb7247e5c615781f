// THEORY:
// The `LumaModel` module turns an RGB colour into a single perceived-brightness
// scalar: `luma = wr * red + wg * green + wb * blue`. It is a validated, immutable
// value object. All checking happens once, in the constructor, so every live model
// is already valid and `compute_luma` has no failure path.
//
// Validation order:
// 1) Any negative weight fails with `NegativeWeight` (red, then green, then blue),
//    whatever the sum is.
// 2) Otherwise the sum `(red + green) + blue` is compared with 1.0 under the
//    model's `SumCheck`. `Exact` (the default) demands bit-for-bit equality, so
//    familiar triples like Rec. 601's (0.299, 0.587, 0.114), which add up to
//    0.9999999999999999, are rejected. `Tolerance(eps)` accepts |sum - 1.0| <= eps.
//
// Channels are promoted to f64 before multiplying and the result is not clamped.

pub mod luma_model {
    use crate::core_modules::pixel::pixel::RgbColor;
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use thiserror::Error;

    pub type Weight = f64;
    pub type Luminance = f64;

    const WEIGHT_SUM: Weight = 1.0;

    /// Names the colour channel a weight belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum WeightChannel {
        Red,
        Green,
        Blue,
    }

    impl fmt::Display for WeightChannel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                WeightChannel::Red => "red",
                WeightChannel::Green => "green",
                WeightChannel::Blue => "blue",
            };
            f.write_str(name)
        }
    }

    #[derive(Debug, Error, Clone, PartialEq)]
    pub enum LumaError {
        #[error("negative weight: {channel} weight is {weight}")]
        NegativeWeight { channel: WeightChannel, weight: Weight },
        #[error("weights must sum to 1.0 (got {sum})")]
        WeightSum { sum: Weight },
        #[error("sum tolerance must be a finite, non-negative number (got {tolerance})")]
        InvalidTolerance { tolerance: Weight },
        #[error("cannot convert {found} bytes into a pixel")]
        ChannelCount { found: usize },
    }

    impl LumaError {
        /// True for the errors that reject a model's construction arguments.
        pub fn is_invalid_argument(&self) -> bool {
            matches!(
                self,
                LumaError::NegativeWeight { .. }
                    | LumaError::WeightSum { .. }
                    | LumaError::InvalidTolerance { .. }
            )
        }
    }

    /// How strictly the weight sum is compared against 1.0.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SumCheck {
        /// `sum == 1.0` with no slack.
        #[default]
        Exact,
        /// `|sum - 1.0| <= tolerance`.
        Tolerance(Weight),
    }

    impl SumCheck {
        fn validate(self) -> Result<Self, LumaError> {
            match self {
                SumCheck::Tolerance(tolerance) if !(tolerance.is_finite() && tolerance >= 0.0) => {
                    Err(LumaError::InvalidTolerance { tolerance })
                }
                check => Ok(check),
            }
        }

        /// NaN sums never pass either check.
        fn accepts(self, sum: Weight) -> bool {
            match self {
                SumCheck::Exact => sum == WEIGHT_SUM,
                SumCheck::Tolerance(tolerance) => (sum - WEIGHT_SUM).abs() <= tolerance,
            }
        }
    }

    /// Serializable description of a model; turn it into one with `build`.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct LumaConfig {
        pub red_weight: Weight,
        pub green_weight: Weight,
        pub blue_weight: Weight,
        #[serde(default)]
        pub sum_check: SumCheck,
    }

    impl LumaConfig {
        pub fn build(&self) -> Result<LumaModel, LumaError> {
            LumaModel::with_sum_check(
                self.red_weight,
                self.green_weight,
                self.blue_weight,
                self.sum_check,
            )
        }
    }

    impl TryFrom<LumaConfig> for LumaModel {
        type Error = LumaError;

        fn try_from(config: LumaConfig) -> Result<Self, Self::Error> {
            config.build()
        }
    }

    /// A fixed, validated weighting of the R, G and B channels.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LumaModel {
        red_weight: Weight,
        green_weight: Weight,
        blue_weight: Weight,
        sum_check: SumCheck,
    }

    impl LumaModel {
        /// Builds a model whose weights must sum to exactly 1.0.
        pub fn new(
            red_weight: Weight,
            green_weight: Weight,
            blue_weight: Weight,
        ) -> Result<Self, LumaError> {
            Self::with_sum_check(red_weight, green_weight, blue_weight, SumCheck::Exact)
        }

        pub fn with_sum_check(
            red_weight: Weight,
            green_weight: Weight,
            blue_weight: Weight,
            sum_check: SumCheck,
        ) -> Result<Self, LumaError> {
            let sum_check = sum_check.validate()?;

            let weights = [
                (WeightChannel::Red, red_weight),
                (WeightChannel::Green, green_weight),
                (WeightChannel::Blue, blue_weight),
            ];
            if let Some(&(channel, weight)) = weights.iter().find(|(_, weight)| *weight < 0.0) {
                return Err(LumaError::NegativeWeight { channel, weight });
            }

            let sum = red_weight + green_weight + blue_weight;
            if !sum_check.accepts(sum) {
                return Err(LumaError::WeightSum { sum });
            }

            Ok(Self {
                red_weight,
                green_weight,
                blue_weight,
                sum_check,
            })
        }

        pub fn red_weight(&self) -> Weight {
            self.red_weight
        }

        pub fn green_weight(&self) -> Weight {
            self.green_weight
        }

        pub fn blue_weight(&self) -> Weight {
            self.blue_weight
        }

        /// The sum check this model was validated under.
        pub fn sum_check(&self) -> SumCheck {
            self.sum_check
        }

        pub fn config(&self) -> LumaConfig {
            LumaConfig {
                red_weight: self.red_weight,
                green_weight: self.green_weight,
                blue_weight: self.blue_weight,
                sum_check: self.sum_check,
            }
        }

        /// Weighted sum of the colour's channels. Never fails and never clamps.
        pub fn compute_luma<C: RgbColor + ?Sized>(&self, color: &C) -> Luminance {
            let red_component = color.red() as Luminance * self.red_weight;
            let green_component = color.green() as Luminance * self.green_weight;
            let blue_component = color.blue() as Luminance * self.blue_weight;

            red_component + green_component + blue_component
        }
    }

    impl fmt::Display for LumaModel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "LumaModel [red_weight={}, green_weight={}, blue_weight={}]",
                self.red_weight, self.green_weight, self.blue_weight
            )
        }
    }
}
