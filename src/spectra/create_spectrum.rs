use super::discrete::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::texture::*;

pub fn create_spectrum_texture(
    name: &str,
    params: &ParamSet,
) -> Result<Box<dyn SpectrumTexture>, SpectrumError> {
    match name {
        "discrete" => {
            return create_discrete_spectrum(params);
        }
        _ => {
            return Err(SpectrumError::UnknownPlugin(String::from(name)));
        }
    }
}
