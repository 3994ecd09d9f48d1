// Formula engine: form values in, CSS clamp() declaration out
// Pure and synchronous, no rendering or clipboard concerns live here

pub mod calculator;
pub mod error;
pub mod formatter;
pub mod input;
pub mod types;


pub use calculator::{calculate, value_only};
pub use error::{EngineError, INVALID_RANGE_PLACEHOLDER};
pub use input::coerce_number;
pub use types::{
    CssProperty, FluidLine, InterpolationRequest, InterpolationResult, Unit, BASE_FONT_SIZE_PX,
};
