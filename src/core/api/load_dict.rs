use crate::core::base::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::texture::*;
use crate::spectra::create_spectrum_texture;

use log::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn to_float(key: &str, v: &Value) -> Result<Float, SpectrumError> {
    match v.as_f64() {
        Some(f) => Ok(f as Float),
        None => {
            let msg = format!("parameter \"{}\": {} is not a number", key, v);
            Err(SpectrumError::config(&msg))
        }
    }
}

fn add_array(params: &mut ParamSet, key: &str, a: &[Value]) -> Result<(), SpectrumError> {
    if a.iter().all(|v| v.is_number()) {
        let values = a
            .iter()
            .map(|v| to_float(key, v))
            .collect::<Result<Vec<Float>, SpectrumError>>()?;
        params.add_floats(key, &values);
        return Ok(());
    }
    if a.iter().all(|v| v.is_string()) {
        let values: Vec<&str> = a.iter().filter_map(|v| v.as_str()).collect();
        params.add_strings(key, &values);
        return Ok(());
    }
    let msg = format!("parameter \"{}\": arrays must hold only numbers or only strings", key);
    return Err(SpectrumError::config(&msg));
}

/// Splits a configuration dictionary into its plugin name (`"type"`) and
/// the remaining parameters.
pub fn params_from_dict(dict: &Value) -> Result<(String, ParamSet), SpectrumError> {
    let obj = dict
        .as_object()
        .ok_or_else(|| SpectrumError::config("configuration must be a JSON object"))?;
    let name = match obj.get("type") {
        Some(Value::String(s)) => s.clone(),
        _ => return Err(SpectrumError::MissingParameter(String::from("type"))),
    };
    let mut params = ParamSet::new();
    for (key, v) in obj.iter() {
        if key == "type" {
            continue;
        }
        match v {
            Value::String(s) => params.add_string(key, s),
            Value::Number(_) => params.add_float(key, to_float(key, v)?),
            Value::Bool(b) => params.add_bool(key, *b),
            Value::Array(a) => add_array(&mut params, key, a)?,
            _ => {
                let msg = format!("parameter \"{}\": unsupported value {}", key, v);
                return Err(SpectrumError::config(&msg));
            }
        }
    }
    return Ok((name, params));
}

/// Instantiates a spectrum from a dictionary such as
/// `{"type": "discrete", "wavelengths": "300, 400, 500"}`.
pub fn load_dict(dict: &Value) -> Result<Box<dyn SpectrumTexture>, SpectrumError> {
    let (name, params) = params_from_dict(dict)?;
    let s = create_spectrum_texture(&name, &params)?;
    info!("Loaded \"{}\" spectrum", name);
    return Ok(s);
}

pub fn load_string(s: &str) -> Result<Box<dyn SpectrumTexture>, SpectrumError> {
    let dict: Value = serde_json::from_str(s)?;
    return load_dict(&dict);
}

pub fn load_file(path: &Path) -> Result<Box<dyn SpectrumTexture>, SpectrumError> {
    if !path.exists() {
        let msg = format!("File \"{}\" does not exist.", path.display());
        return Err(SpectrumError::config(&msg));
    }
    let s = fs::read_to_string(path)?;
    return load_string(&s);
}
