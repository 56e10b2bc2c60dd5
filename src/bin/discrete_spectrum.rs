use clap::*;

use discrete_spectrum::core::api::*;
use discrete_spectrum::core::prelude::*;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Input .json spectrum description.
    #[arg(short, long, value_name = "filename")]
    pub infile: Option<PathBuf>,

    /// Number of uniform variates to draw from the random number generator.
    #[arg(short = 'n', long = "samples", value_name = "num", default_value = "8")]
    pub nsamples: usize,

    /// Seed of the random number generator.
    #[arg(long, value_name = "num", default_value = "0")]
    pub seed: u64,

    /// Draw one jittered variate per stratum of [0, 1) instead of
    /// independent ones.
    #[arg(long, default_value = "false")]
    pub stratified: bool,

    /// Explicit uniform variates; overrides --samples.
    #[arg(long, value_delimiter = ',', value_name = "u0,u1,...")]
    pub sample: Option<Vec<Float>>,

    /// Print the samples as a JSON array.
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Suppress all text output other than the samples and error messages.
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,

    #[arg(value_name = "filename.json")]
    pub jsonfile: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SampleRecord {
    sample: Float,
    wavelength: Float,
    weight: Float,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn make_samples(opts: &CommandOptions) -> Vec<Float> {
    if let Some(samples) = opts.sample.as_ref() {
        return samples.clone();
    }
    let mut rng = RNG::new_sequence(opts.seed);
    if opts.stratified {
        stratified_sample_1d(opts.nsamples, &mut rng, true)
    } else {
        uniform_sample_1d(opts.nsamples, &mut rng)
    }
}

fn sample_spectrum(input_path: &Path, opts: &CommandOptions) -> Result<(), SpectrumError> {
    let spectrum = load_file(input_path)?;
    if !opts.quiet {
        println!("{}", spectrum);
        println!();
    }

    let samples = make_samples(opts);
    // one query per lane group, the last one padded with zeros
    let mut records = Vec::with_capacity(samples.len());
    let si = SurfaceInteraction::new();
    for chunk in samples.chunks(SPECTRAL_SAMPLES) {
        let mut u = SampledWavelengths::zero();
        for (i, v) in chunk.iter().enumerate() {
            u[i] = *v;
        }
        let (wavelengths, weights) = spectrum.sample_spectrum(&si, &u);
        for i in 0..chunk.len() {
            records.push(SampleRecord {
                sample: chunk[i],
                wavelength: wavelengths[i],
                weight: weights[i],
            });
        }
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for r in records.iter() {
            println!("{} {} {}", r.sample, r.wavelength, r.weight);
        }
    }
    Ok(())
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    let input = if let Some(infile) = opts.jsonfile.as_ref() {
        Some(infile.clone())
    } else {
        opts.infile.as_ref().cloned()
    };

    let input_path = match input {
        Some(path) => path,
        None => {
            println!("{}", CommandOptions::command().render_usage());
            process::exit(-1);
        }
    };

    if let Err(e) = sample_spectrum(&input_path, &opts) {
        error!("{}", e);
        process::exit(-1);
    }
}
