use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::{ Captures, Regex };

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
});

/// A value substituted into a `${name}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::UInt(u) => write!(f, "{u}"),
            ParamValue::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip form without grouping, as JavaScript's `Number#toString`.
///
/// Magnitudes in `[1e-6, 1e21)` print as plain decimals, integral values
/// without a fraction. Anything outside uses exponent form (`1e+21`, `1e-7`).
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if x == 0.0 {
        // covers -0.0
        return "0".to_string();
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return x.to_string();
    }

    let exp_form = format!("{x:e}");
    match exp_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp_form,
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self::UInt(v as u64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Named parameters for one translation call.
///
/// # Example
///
/// ```rust
/// use genpanel_intl::Params;
///
/// let params = Params::new().with("cost", "1.2345").with("count", 3);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Substitutes `${name}` placeholders in `template` from `params`.
///
/// Placeholders whose name is not in `params` are left as written. Without
/// params (or with an empty set) the template is returned untouched.
///
/// # Example
///
/// ```rust
/// use genpanel_intl::{ interpolate, Params };
///
/// let params = Params::new().with("cost", 12.5);
/// assert_eq!(interpolate("Total: ${cost} USD", Some(&params)), "Total: 12.5 USD");
/// assert_eq!(interpolate("Total: ${cost} USD", Some(&Params::new())), "Total: ${cost} USD");
/// ```
pub fn interpolate<'a>(template: &'a str, params: Option<&Params>) -> Cow<'a, str> {
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return Cow::Borrowed(template);
    };

    PLACEHOLDER_RE.replace_all(template, |caps: &Captures| {
        match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_params_is_identity() {
        assert_eq!(interpolate("Total: ${cost} USD", None), "Total: ${cost} USD");
        assert!(matches!(interpolate("Total: ${cost}", None), Cow::Borrowed(_)));
    }

    #[test]
    fn numeric_and_text_values() {
        let params = Params::new().with("cost", 12.5).with("count", 3).with("date", "2025-05-01");
        assert_eq!(
            interpolate("${count} images on ${date} for ${cost}", Some(&params)),
            "3 images on 2025-05-01 for 12.5"
        );
    }

    #[test]
    fn repeated_placeholder_replaced_everywhere() {
        let params = Params::new().with("index", 2);
        assert_eq!(
            interpolate("Image ${index} of batch, thumbnail ${index}", Some(&params)),
            "Image 2 of batch, thumbnail 2"
        );
    }

    #[test]
    fn unknown_placeholder_left_visible() {
        let params = Params::new().with("count", 10);
        assert_eq!(
            interpolate("${count} tokens (~$${cost})", Some(&params)),
            "10 tokens (~$${cost})"
        );
    }

    #[test]
    fn dollar_prefix_before_placeholder() {
        let params = Params::new().with("cost", "1.2345");
        assert_eq!(interpolate("Total Cost: $${cost}", Some(&params)), "Total Cost: $1.2345");
    }

    #[test]
    fn malformed_placeholders_are_plain_text() {
        let params = Params::new().with("name", "x");
        assert_eq!(
            interpolate("${} ${na-me} {name} $name ${name", Some(&params)),
            "${} ${na-me} {name} $name ${name"
        );
    }

    #[test]
    fn values_are_not_reinterpolated() {
        let params = Params::new().with("a", "${b}").with("b", "nope");
        assert_eq!(interpolate("${a}", Some(&params)), "${b}");
    }

    #[test]
    fn float_formatting() {
        assert_eq!(ParamValue::from(3.0).to_string(), "3");
        assert_eq!(ParamValue::from(-0.0).to_string(), "0");
        assert_eq!(ParamValue::from(0.1).to_string(), "0.1");
        assert_eq!(ParamValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(ParamValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(ParamValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(ParamValue::from(1234567.0).to_string(), "1234567");
    }

    #[test]
    fn float_exponent_thresholds() {
        assert_eq!(ParamValue::from(1e21).to_string(), "1e+21");
        assert_eq!(ParamValue::from(-1.5e21).to_string(), "-1.5e+21");
        assert_eq!(ParamValue::from(1e300).to_string(), "1e+300");
        assert_eq!(ParamValue::from(123456789012345680000.0).to_string(), "123456789012345680000");
        assert_eq!(ParamValue::from(1e-6).to_string(), "0.000001");
        assert_eq!(ParamValue::from(1e-7).to_string(), "1e-7");
        assert_eq!(ParamValue::from(-2.5e-8).to_string(), "-2.5e-8");
        assert_eq!(ParamValue::from(5e-324).to_string(), "5e-324");
    }

    #[test]
    fn large_unsigned_counts_stay_positive() {
        let params = Params::new().with("n", usize::MAX);
        assert_eq!(interpolate("${n}", Some(&params)), usize::MAX.to_string());

        let params = Params::new().with("n", u64::MAX);
        assert_eq!(interpolate("${n} tokens", Some(&params)), "18446744073709551615 tokens");
        assert_eq!(ParamValue::from(u64::MAX), ParamValue::UInt(u64::MAX));
    }

    #[test]
    fn params_from_iter() {
        let params: Params = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(params.get("b"), Some(&ParamValue::Int(2)));
        assert_eq!(params.get("c"), None);
    }
}
