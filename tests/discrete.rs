use discrete_spectrum::core::api::*;
use discrete_spectrum::core::prelude::*;
use discrete_spectrum::spectra::*;

use serde_json::json;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

fn load(dict: serde_json::Value) -> Box<dyn SpectrumTexture> {
    load_dict(&dict).unwrap()
}

#[test]
fn discrete_construct() {
    // Minimal form: weights are all equal to 1
    let s = load(json!({
        "type": "discrete",
        "wavelengths": "300, 400, 500, 600",
    }));
    let params = SceneParameters::traverse(s.as_ref());
    let wavelengths = params.get("wavelengths").unwrap();
    let weights = params.get("weights").unwrap();
    assert_eq!(wavelengths.len(), weights.len());
    assert!(weights.iter().all(|w| *w == 1.0));

    // Incorrect weight array size fails
    let r = load_dict(&json!({
        "type": "discrete",
        "wavelengths": "300, 400, 500, 600",
        "weights": "",
    }));
    assert_eq!(
        r.err(),
        Some(SpectrumError::SizeMismatch {
            expected: 4,
            actual: 0
        })
    );

    // Appropriate weights are set
    let s = load(json!({
        "type": "discrete",
        "wavelengths": "300, 400, 500, 600",
        "weights": "1, 2, 2, 1",
    }));
    let params = SceneParameters::traverse(s.as_ref());
    assert_eq!(params.get("weights").unwrap(), &[1.0, 2.0, 2.0, 1.0]);
    assert_eq!(
        params.get("wavelengths").unwrap(),
        &[300.0, 400.0, 500.0, 600.0]
    );
}

#[test]
fn discrete_construct_invalid() {
    let r = load_dict(&json!({"type": "discrete"}));
    assert_eq!(
        r.err(),
        Some(SpectrumError::MissingParameter(String::from("wavelengths")))
    );

    let r = load_dict(&json!({"type": "discrete", "wavelengths": ""}));
    assert!(matches!(r, Err(SpectrumError::InvalidWeights(_))));

    let r = load_dict(&json!({
        "type": "discrete",
        "wavelengths": "300, 400",
        "weights": "0, 0",
    }));
    assert!(matches!(r, Err(SpectrumError::InvalidWeights(_))));

    let r = load_dict(&json!({
        "type": "discrete",
        "wavelengths": "300, 400",
        "weights": "1, -2",
    }));
    assert!(matches!(r, Err(SpectrumError::InvalidWeights(_))));

    let r = load_dict(&json!({
        "type": "discrete",
        "wavelengths": "300, four hundred",
    }));
    assert!(matches!(r, Err(SpectrumError::Parse { .. })));
}

#[test]
fn discrete_construct_from_arrays() {
    let s = load(json!({
        "type": "discrete",
        "wavelengths": [450, 550],
        "weights": [3, 1],
    }));
    let params = SceneParameters::traverse(s.as_ref());
    assert_eq!(params.get("wavelengths").unwrap(), &[450.0, 550.0]);
    assert_eq!(params.get("weights").unwrap(), &[3.0, 1.0]);
    assert_eq!(s.class_name(), "DiscreteSpectrum");
}

#[test]
fn discrete_traverse() {
    let mut s = load(json!({
        "type": "discrete",
        "wavelengths": "300, 400, 500, 600",
    }));
    assert!(format!("{}", s).contains("pmf = [1, 1, 1, 1]"));
    let mut params = SceneParameters::traverse(s.as_ref());
    assert_eq!(
        params.flags("weights"),
        Some(ParamFlags::NonDifferentiable)
    );

    // Updating weights and wavelengths has the expected effect
    params.set("weights", &[1.0, 2.0, 2.0, 1.0]).unwrap();
    params.set("wavelengths", &[200.0, 300.0, 400.0, 500.0]).unwrap();
    params.update(s.as_mut()).unwrap();
    let text = format!("{}", s);
    assert!(text.contains("pmf = [1, 2, 2, 1]"));
    assert!(text.contains("wavelengths = [200, 300, 400, 500]"));

    let si = SurfaceInteraction::new();
    let u = SampledWavelengths::from([0.0, 0.5, 0.75, 1.0]);
    let (wavelengths, _) = s.sample_spectrum(&si, &u);
    assert_eq!(
        wavelengths,
        SampledWavelengths::from([200.0, 300.0, 400.0, 500.0])
    );

    // Setting inappropriate sizes fails
    params.set("wavelengths", &[200.0, 300.0, 400.0]).unwrap();
    let r = params.update(s.as_mut());
    assert_eq!(
        r,
        Err(SpectrumError::SizeMismatch {
            expected: 3,
            actual: 4
        })
    );

    // ... and leaves the committed state untouched
    let text = format!("{}", s);
    assert!(text.contains("wavelengths = [200, 300, 400, 500]"));
    assert_eq!(
        params.get("wavelengths").unwrap(),
        &[200.0, 300.0, 400.0, 500.0]
    );
    let (wavelengths, weights) = s.sample_spectrum(&si, &u);
    assert_eq!(
        wavelengths,
        SampledWavelengths::from([200.0, 300.0, 400.0, 500.0])
    );
    assert!(near_equal(weights[0], 1.0 / 6.0, 1e-6));
    assert!(near_equal(weights[1], 1.0 / 3.0, 1e-6));
}

#[test]
fn discrete_eval() {
    let s = load(json!({
        "type": "discrete",
        "wavelengths": "300, 400, 500, 600",
    }));
    for i in 0..5 {
        let w = SampledWavelengths::splat(450.0 + 50.0 * i as Float);
        let si = SurfaceInteraction::with_wavelengths(&w);
        assert_eq!(s.eval(&si), SampledSpectrum::zero());
        assert_eq!(s.pdf_spectrum(&si), SampledWavelengths::zero());
    }

    // exact matches on the lines are zero too
    let si = SurfaceInteraction::with_wavelengths(&SampledWavelengths::from([
        300.0, 400.0, 500.0, 600.0,
    ]));
    assert!(s.eval(&si).is_black());
    assert_eq!(s.pdf_spectrum(&si), SampledWavelengths::zero());

    let e = s.eval_1(&si).unwrap_err();
    assert!(e.to_string().contains("not implemented"));
    assert!(e.to_string().contains("eval_1"));

    let e = s.eval_3(&si).unwrap_err();
    assert!(e.to_string().contains("not implemented"));
    assert_eq!(
        e,
        SpectrumError::Unimplemented {
            class: "DiscreteSpectrum",
            operation: "eval_3"
        }
    );

    assert!(matches!(
        s.mean(),
        Err(SpectrumError::Unimplemented { .. })
    ));
}

#[test]
fn discrete_sample() {
    let s = load(json!({
        "type": "discrete",
        "wavelengths": "300, 400, 500, 600",
        "weights": "1, 2, 2, 1",
    }));
    let si = SurfaceInteraction::new();

    for (sample, expected_wavelength, expected_weight) in [
        (0.0, 300.0, 1.0 / 6.0),
        (0.25, 400.0, 1.0 / 3.0),
        (0.5, 400.0, 1.0 / 3.0),
        (0.75, 500.0, 1.0 / 3.0),
        (1.0, 600.0, 1.0 / 6.0),
    ] {
        let (wavelengths, weights) = s.sample_spectrum(&si, &SampledWavelengths::splat(sample));
        for i in 0..SPECTRAL_SAMPLES {
            assert_eq!(wavelengths[i], expected_wavelength, "sample {}", sample);
            assert!(
                near_equal(weights[i], expected_weight, 1e-6),
                "sample {}: {} != {}",
                sample,
                weights[i],
                expected_weight
            );
        }
    }
}

#[test]
fn discrete_sample_batch() {
    let s = DiscreteSpectrum::new(
        &[300.0, 400.0, 500.0, 600.0],
        Some(&[1.0, 2.0, 2.0, 1.0][..]),
    )
    .unwrap();
    let mut rng = RNG::new_sequence(3);
    let samples = uniform_sample_1d(1000, &mut rng);
    let batch = s.sample_batch(&samples);
    assert_eq!(batch.len(), samples.len());
    for (u, r) in samples.iter().zip(batch.iter()) {
        assert_eq!(*r, s.sample(*u));
    }
}
