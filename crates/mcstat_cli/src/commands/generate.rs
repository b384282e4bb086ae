//! Generate command implementation
//!
//! Draws a sample from one of the engine's generators and writes it one
//! value per line.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use mcstat_core::types::Interval;
use mcstat_engine::rng::RandomStream;
use mcstat_engine::variates::{
    generate_exp, generate_poisson, generate_range, generate_tac, generate_tcl, generate_tcl_ms,
    generate_uniform,
};
use tracing::info;

use super::emit;
use crate::config::McstatConfig;
use crate::functions::BuiltinFunction;
use crate::Result;

/// Generator selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariateKind {
    /// Uniform on [0, 1)
    Uniform,
    /// Uniform on [x-min, x-max)
    Range,
    /// Try-and-accept from a built-in density on [x-min, x-max]
    Tac,
    /// Exponential with lifetime tau
    Exp,
    /// Poisson counts with the given mean
    Poisson,
    /// CLT approximant on [x-min, x-max]
    Tcl,
    /// CLT approximant with the given mean and sigma
    TclMs,
}

/// Arguments of `mcstat generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Generator to draw from
    #[arg(value_enum)]
    pub kind: VariateKind,

    /// Number of values
    #[arg(short = 'n', long, default_value = "1000")]
    pub count: usize,

    /// Reseed before drawing (overrides the configured seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lower domain bound (range, tac, tcl)
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub x_min: f64,

    /// Upper domain bound (range, tac, tcl)
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub x_max: f64,

    /// Mean lifetime (exp)
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub tau: f64,

    /// Mean (poisson, tcl-ms)
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub mean: f64,

    /// Standard deviation (tcl-ms)
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    pub sigma: f64,

    /// Uniforms averaged per CLT value (overrides the configured n_sum)
    #[arg(long)]
    pub n_sum: Option<usize>,

    /// Density for try-and-accept
    #[arg(short, long, value_enum, default_value = "gaussian")]
    pub function: BuiltinFunction,

    /// Envelope height for try-and-accept; the function's bound when omitted
    #[arg(long)]
    pub y_max: Option<f64>,
}

/// Values drawn by one generate invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    /// Real-valued sample
    Reals(Vec<f64>),
    /// Event counts
    Counts(Vec<u64>),
}

/// Run the generate command
pub fn run(args: &GenerateArgs, config: &McstatConfig) -> Result<()> {
    info!("Generating {} {:?} values", args.count, args.kind);

    let mut rng = RandomStream::from_entropy();
    match draw(&mut rng, args, config)? {
        Drawn::Reals(values) => emit(&values, args.output.as_deref()),
        Drawn::Counts(counts) => emit(&counts, args.output.as_deref()),
    }
}

/// Draw the sample described by `args`, reseeding from the flag or the config.
pub fn draw(rng: &mut RandomStream, args: &GenerateArgs, config: &McstatConfig) -> Result<Drawn> {
    let n = args.count;
    let seed = args.seed.or(config.seed);
    let n_sum = args.n_sum.unwrap_or(config.n_sum);

    let sample = match args.kind {
        VariateKind::Uniform => generate_uniform(rng, n, seed),
        VariateKind::Range => generate_range(rng, args.x_min, args.x_max, n, seed)?,
        VariateKind::Tac => {
            let domain = Interval::new(args.x_min, args.x_max)?;
            let y_max = args
                .y_max
                .unwrap_or_else(|| args.function.upper_bound(domain));
            info!("  Density: {:?}, envelope height {}", args.function, y_max);
            let f = args.function;
            generate_tac(rng, |x| f.eval(x), domain, y_max, n, seed, config.budget())?
        }
        VariateKind::Exp => generate_exp(rng, args.tau, n, seed)?,
        VariateKind::Tcl => {
            let domain = Interval::new(args.x_min, args.x_max)?;
            generate_tcl(rng, domain, n, n_sum, seed)?
        }
        VariateKind::TclMs => generate_tcl_ms(rng, args.mean, args.sigma, n, n_sum, seed)?,
        VariateKind::Poisson => {
            let counts = generate_poisson(rng, args.mean, n, seed, config.budget())?;
            return Ok(Drawn::Counts(counts));
        }
    };
    Ok(Drawn::Reals(sample))
}
