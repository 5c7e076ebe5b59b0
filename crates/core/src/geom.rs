//! Numeric-component conversion for geometry value types.
//!
//! Geometry values serialize as flat number arrays: a point as `[x, y]`, a
//! rectangle as `[x0, y0, x1, y1]`, an affine transform as its six
//! coefficients. The [`Components`] trait is the only coupling point; any
//! type expressible as a fixed-length ordered sequence of numbers can opt
//! in.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde_json::{Number, Value};

use crate::error::JsonError;

/// A value convertible to and from a fixed-length sequence of numbers.
pub trait Components: Sized {
    /// Number of numeric components in the serialized form.
    const COUNT: usize;

    /// Append this value's components to `out`, in serialized order.
    fn write_components(&self, out: &mut Vec<f64>);

    /// Rebuild the value from its components.
    ///
    /// Callers guarantee `components.len() == Self::COUNT`; [`from_json`]
    /// validates this before calling.
    fn from_components(components: &[f64]) -> Self;
}

/// Serialize a geometry value as a flat JSON number array.
#[must_use]
pub fn to_json<T: Components>(value: &T) -> Value {
    let mut components = Vec::with_capacity(T::COUNT);
    value.write_components(&mut components);
    Value::Array(
        components
            .into_iter()
            .map(|c| Number::from_f64(c).map_or(Value::Null, Value::Number))
            .collect(),
    )
}

/// Rebuild a geometry value from a flat JSON number array.
///
/// The value must be an array of exactly `T::COUNT` numbers.
pub fn from_json<T: Components>(value: &Value) -> Result<T, JsonError> {
    let Value::Array(items) = value else {
        return Err(JsonError::NotComponents(type_name(value)));
    };
    if items.len() != T::COUNT {
        return Err(JsonError::ComponentCount {
            expected: T::COUNT,
            found: items.len(),
        });
    }
    let mut components = Vec::with_capacity(T::COUNT);
    for item in items {
        let Some(n) = item.as_f64() else {
            return Err(JsonError::NotComponents(type_name(item)));
        };
        components.push(n);
    }
    Ok(T::from_components(&components))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Components for Point {
    const COUNT: usize = 2;

    fn write_components(&self, out: &mut Vec<f64>) {
        out.extend([self.x, self.y]);
    }

    fn from_components(components: &[f64]) -> Self {
        Point::new(components[0], components[1])
    }
}

impl Components for Vec2 {
    const COUNT: usize = 2;

    fn write_components(&self, out: &mut Vec<f64>) {
        out.extend([self.x, self.y]);
    }

    fn from_components(components: &[f64]) -> Self {
        Vec2::new(components[0], components[1])
    }
}

impl Components for Size {
    const COUNT: usize = 2;

    fn write_components(&self, out: &mut Vec<f64>) {
        out.extend([self.width, self.height]);
    }

    fn from_components(components: &[f64]) -> Self {
        Size::new(components[0], components[1])
    }
}

/// Serialized as upper-left then lower-right: `[x0, y0, x1, y1]`.
impl Components for Rect {
    const COUNT: usize = 4;

    fn write_components(&self, out: &mut Vec<f64>) {
        out.extend([self.x0, self.y0, self.x1, self.y1]);
    }

    fn from_components(components: &[f64]) -> Self {
        Rect::new(components[0], components[1], components[2], components[3])
    }
}

/// Serialized as the six affine coefficients in kurbo's column order.
impl Components for Affine {
    const COUNT: usize = 6;

    fn write_components(&self, out: &mut Vec<f64>) {
        out.extend(self.as_coeffs());
    }

    fn from_components(components: &[f64]) -> Self {
        let mut coeffs = [0.0; 6];
        coeffs.copy_from_slice(components);
        Affine::new(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_round_trip() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(to_json(&p), json!([1.5, -2.0]));
        assert_eq!(from_json::<Point>(&to_json(&p)).unwrap(), p);
    }

    #[test]
    fn vec2_round_trip() {
        let v = Vec2::new(0.25, 4.0);
        assert_eq!(from_json::<Vec2>(&to_json(&v)).unwrap(), v);
    }

    #[test]
    fn size_round_trip() {
        let s = Size::new(640.0, 480.0);
        assert_eq!(to_json(&s), json!([640.0, 480.0]));
        assert_eq!(from_json::<Size>(&to_json(&s)).unwrap(), s);
    }

    #[test]
    fn rect_serializes_corner_to_corner() {
        let r = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(to_json(&r), json!([10.0, 20.0, 110.0, 220.0]));
        assert_eq!(from_json::<Rect>(&to_json(&r)).unwrap(), r);
    }

    #[test]
    fn affine_round_trip() {
        let a = Affine::new([1.0, 0.5, -0.5, 1.0, 10.0, 20.0]);
        assert_eq!(from_json::<Affine>(&to_json(&a)).unwrap(), a);
    }

    #[test]
    fn integer_components_accepted() {
        let p: Point = from_json(&json!([3, 4])).unwrap();
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn wrong_arity_rejected() {
        let err = from_json::<Point>(&json!([1.0, 2.0, 3.0])).unwrap_err();
        assert!(
            err.to_string().contains("expected 2"),
            "error should state the expected count: {err}"
        );
    }

    #[test]
    fn non_array_rejected() {
        let err = from_json::<Rect>(&json!({ "x": 1 })).unwrap_err();
        assert!(
            err.to_string().contains("object"),
            "error should name the offending type: {err}"
        );
    }

    #[test]
    fn non_numeric_element_rejected() {
        let err = from_json::<Vec2>(&json!([1.0, "two"])).unwrap_err();
        assert!(
            err.to_string().contains("string"),
            "error should name the offending type: {err}"
        );
    }
}
