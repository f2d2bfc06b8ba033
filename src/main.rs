//! forecast-compare entry point: CLI wiring, common-view report and viewer launch.

use std::process;

use forecast_compare::cli::{self, CliOptions, Command};
use forecast_compare::render::{Figure, RenderRequest};
use forecast_compare::style::StyleConfig;
use forecast_compare::SeriesAligner;

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_style(opts: &CliOptions) -> StyleConfig {
    let cfg = match opts.style {
        Some(ref path) => match StyleConfig::from_toml_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        None => StyleConfig::default(),
    };

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    cfg
}

fn print_report(aligner: &SeriesAligner, figure: &Figure) {
    let view = aligner.common_points();
    println!(
        "n={} horizon={} common={}",
        aligner.len(),
        aligner.horizon(),
        view.len()
    );
    println!("{:>6}  {:>12}  {:>12}", "index", "actual", "predicted");
    for (i, (a, p)) in view.pairs().enumerate() {
        println!("{:>6}  {a:>12.4}  {p:>12.4}", i + aligner.horizon());
    }
    if view.is_exact_match() {
        println!("forecast matches actual on every common point");
    }

    println!("\n{}", figure.title);
    for series in &figure.axes.series {
        match series.x_range() {
            Some((lo, hi)) => println!(
                "  {:<12} x=[{lo}, {hi}] ({} points)",
                series.label,
                series.points.len()
            ),
            None => println!("  {:<12} (no points)", series.label),
        }
    }
}

fn main() {
    let opts = match cli::parse_args() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            cli::print_usage();
            process::exit(0);
        }
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    init_logging(&opts.log_level);
    let cfg = load_style(&opts);

    let aligner = match SeriesAligner::new(&opts.actual, &opts.predicted, opts.horizon) {
        Ok(aligner) => aligner,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    tracing::info!(len = aligner.len(), horizon = aligner.horizon(), "series loaded");

    let mut request = RenderRequest::default()
        .range(opts.begin, opts.end)
        .overlap(opts.overlap)
        .labels(cfg.labels.clone())
        .title_suffix(opts.title_suffix.clone());
    if let Some(ref title) = opts.title {
        request = request.title(title.clone());
    }

    let figure = aligner.render(&request, &cfg.style);
    print_report(&aligner, &figure);

    #[cfg(feature = "tui")]
    if opts.tui {
        if let Err(e) = forecast_compare::tui::run(aligner, request, cfg.style) {
            eprintln!("error: viewer crashed: {e}");
            process::exit(1);
        }
    }
}
