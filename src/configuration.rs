use std::fs::File;
use std::io::BufReader;

use crate::spline::family::SplineType;
use crate::spline::spline::Spline;
use crate::spline::splineerror::SplineError;
use crate::spline::splineset::SplineSet;

fn get_field<'a>(
    value: &'a serde_json::Value,
    field: &'static str,
) -> Result<&'a serde_json::Value, SplineError> {
    value.get(field).ok_or(SplineError::MissingField { field })
}

fn real_vec(value: &serde_json::Value) -> Result<Vec<f64>, SplineError> {
    let vec: Vec<f64> = serde_json::from_value(value.clone())?;
    Ok(vec)
}

fn string_field(value: &serde_json::Value, field: &'static str) -> Result<String, SplineError> {
    let s: String = serde_json::from_value(get_field(value, field)?.clone())?;
    Ok(s)
}

/// Builds one spline from a JSON object with `name`, `type`, `x` and `y`
/// fields. Absent fields fault by name; array content and monotonicity
/// faults propagate from the build.
pub fn spline_from_value(value: &serde_json::Value) -> Result<Spline, SplineError> {
    let name = string_field(value, "name")?;
    let spline_type = SplineType::parse(string_field(value, "type")?.as_str())?;
    let xs = real_vec(get_field(value, "x")?)?;
    let ys = real_vec(get_field(value, "y")?)?;
    let mut spline = Spline::new(name, spline_type);
    spline.build(&xs, &ys)?;
    Ok(spline)
}

/// Builds a spline set from a JSON object with one shared `x` array and a
/// `splines` array of `{name, type, y}` members.
pub fn spline_set_from_value(value: &serde_json::Value) -> Result<SplineSet, SplineError> {
    let xs = real_vec(get_field(value, "x")?)?;
    let members = get_field(value, "splines")?
        .as_array()
        .ok_or(SplineError::MissingField { field: "splines" })?;

    let mut names = Vec::with_capacity(members.len());
    let mut types = Vec::with_capacity(members.len());
    let mut yss = Vec::with_capacity(members.len());
    for member in members {
        names.push(string_field(member, "name")?);
        types.push(SplineType::parse(string_field(member, "type")?.as_str())?);
        yss.push(real_vec(get_field(member, "y")?)?);
    }

    let name_refs: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
    let mut set = SplineSet::new();
    set.build(&name_refs, &types, &xs, &yss)?;
    Ok(set)
}

pub fn spline_from_reader(file_path: String) -> Result<Spline, SplineError> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let json_value: serde_json::Value = serde_json::from_reader(reader)?;
    spline_from_value(&json_value)
}

pub fn spline_set_from_reader(file_path: String) -> Result<SplineSet, SplineError> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let json_value: serde_json::Value = serde_json::from_reader(reader)?;
    spline_set_from_value(&json_value)
}
