use crate::engine::error::EngineError;
use crate::engine::formatter::{format_length, round};
use crate::engine::types::{FluidLine, InterpolationRequest, InterpolationResult};

/// Compute the fluid `clamp()` declaration for a request
///
/// The value is modelled as a line through (min_width, min_value) and
/// (max_width, max_value) in pixel space. The slope is emitted as a `vw`
/// coefficient and the intercept in the request's unit.
pub fn calculate(request: &InterpolationRequest) -> Result<InterpolationResult, EngineError> {
    let InterpolationRequest {
        min_width,
        max_width,
        min_value,
        max_value,
        unit,
        property,
    } = *request;

    if min_width >= max_width || min_width == 0.0 {
        log::warn!(
            "Rejecting width range {}px..{}px for {}",
            min_width,
            max_width,
            property
        );
        return Err(EngineError::InvalidRange {
            min_width,
            max_width,
        });
    }

    let min_px = unit.unit_to_px(min_value);
    let max_px = unit.unit_to_px(max_value);

    let slope = (max_px - min_px) / (max_width - min_width);
    let intercept_px = min_px - slope * min_width;
    let line = FluidLine {
        slope,
        intercept_px,
    };

    let min_str = format_length(min_value, unit.as_str());
    let max_str = format_length(max_value, unit.as_str());

    let (lower_str, upper_str, lower_px, upper_px) = if min_px < max_px {
        (min_str, max_str, min_px, max_px)
    } else {
        (max_str, min_str, max_px, min_px)
    };

    let raw_value_only = if slope == 0.0 {
        // Flat: value is the same at every width, no clamp() needed
        format_length(min_value, unit.as_str())
    } else {
        let intercept_str = format_length(round(unit.px_to_unit(intercept_px.abs())), unit.as_str());
        let slope_vw = format_length(round(slope * 100.0), "vw");
        // A negative intercept is subtracted from the vw term so the sum stays correct
        let preferred = if intercept_px >= 0.0 {
            format!("{} + {}", intercept_str, slope_vw)
        } else {
            format!("{} - {}", slope_vw, intercept_str)
        };
        format!("clamp({}, {}, {})", lower_str, preferred, upper_str)
    };

    let expression = format!("{}: {};", property, raw_value_only);
    log::debug!("Computed {}", expression);

    Ok(InterpolationResult {
        expression,
        raw_value_only,
        line,
        lower_px,
        upper_px,
    })
}

/// Value part of a declaration: text after the first ':' without ';'
pub fn value_only(declaration: &str) -> Option<String> {
    declaration
        .split_once(':')
        .map(|(_, value)| value.replace(';', "").trim().to_string())
}
