//! Integrate command implementation
//!
//! Estimates the integral of a built-in function with one of the
//! Monte-Carlo integrators and reports it against the exact value where
//! one is known.

use clap::{Args, ValueEnum};
use mcstat_core::types::{IntegralEstimate, Interval};
use mcstat_engine::integration::{CrudeMonteCarlo, HitOrMiss, Integrator};
use mcstat_engine::rng::RandomStream;
use tracing::info;

use crate::config::McstatConfig;
use crate::functions::BuiltinFunction;
use crate::Result;

/// Integration method selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Hit-or-miss area sampling
    Hom,
    /// Crude (mean-value) Monte-Carlo
    Crude,
}

/// Arguments of `mcstat integrate`
#[derive(Args, Debug, Clone)]
pub struct IntegrateArgs {
    /// Integration method
    #[arg(value_enum)]
    pub method: Method,

    /// Integrand
    #[arg(short, long, value_enum, default_value = "sine")]
    pub function: BuiltinFunction,

    /// Lower integration bound
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub x_min: f64,

    /// Upper integration bound
    #[arg(long, default_value = "3.141592653589793", allow_hyphen_values = true)]
    pub x_max: f64,

    /// Envelope height for hit-or-miss; the function's bound when omitted
    #[arg(long)]
    pub y_max: Option<f64>,

    /// Number of points
    #[arg(short = 'n', long, default_value = "100000")]
    pub count: usize,

    /// Seed (overrides the configured seed)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Run the integrate command
pub fn run(args: &IntegrateArgs, config: &McstatConfig) -> Result<()> {
    let domain = Interval::new(args.x_min, args.x_max)?;
    info!("Integrating {:?} over [{}, {}]", args.function, domain.min(), domain.max());

    let estimate = estimate(args, config)?;

    println!("{}", estimate);
    println!("  95% CI: ± {}", estimate.confidence_95());
    if let Some(exact) = args.function.exact_integral(domain) {
        let pulls = if estimate.uncertainty > 0.0 {
            (estimate.value - exact) / estimate.uncertainty
        } else {
            0.0
        };
        println!("  exact:  {} ({:+.2}σ)", exact, pulls);
    }

    info!("Integration complete");
    Ok(())
}

/// Estimate the integral described by `args`.
pub fn estimate(args: &IntegrateArgs, config: &McstatConfig) -> Result<IntegralEstimate> {
    let domain = Interval::new(args.x_min, args.x_max)?;
    let mut rng = RandomStream::from_optional_seed(args.seed.or(config.seed));

    let integrator: Box<dyn Integrator> = match args.method {
        Method::Hom => {
            let y_max = args
                .y_max
                .unwrap_or_else(|| args.function.upper_bound(domain));
            Box::new(HitOrMiss::new(y_max, args.count))
        }
        Method::Crude => Box::new(CrudeMonteCarlo::new(args.count)),
    };
    info!("  Method: {}, {} points", integrator.name(), args.count);

    let f = args.function;
    Ok(integrator.integrate(&mut rng, &|x| f.eval(x), domain)?)
}
