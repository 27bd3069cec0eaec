use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tempchart::models::demo_series;
use tempchart::{ChartConfig, ScatterChart, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "tempchart",
    version,
    about = "Render a temperature/volume scatter chart against time of day"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configure the chart, load the series and write an SVG.
    Render(RenderArgs),
    /// Print each axis' tick values and labels.
    Ticks(CommonArgs),
    /// Print the default chart configuration as JSON.
    Config,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Chart configuration (JSON). Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Date shown above time-of-day ticks (e.g. 01-05).
    #[arg(long, conflicts_with = "today")]
    date: Option<String>,
    /// Use today's local date (MM-DD) above time-of-day ticks.
    #[arg(long, default_value_t = false)]
    today: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Series file (.csv with x,y,label,color or .json). Defaults to one demo series.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output chart (.svg).
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the chart (default 800).
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Height of the chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Also write the assembled dataset as JSON.
    #[arg(long)]
    dump_data: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Ticks(args) => cmd_ticks(args),
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&ChartConfig::default())?);
            Ok(())
        }
    }
}

fn load_config(args: &CommonArgs) -> Result<ChartConfig> {
    let cfg = match &args.config {
        Some(path) => ChartConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let date = if args.today {
        Some(chrono::Local::now().format("%m-%d").to_string())
    } else {
        args.date.clone()
    };
    Ok(match date {
        Some(d) => cfg.with_date(&d),
        None => cfg,
    })
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = load_config(&args.common)?;
    let values = match args.input.as_ref() {
        Some(path) => storage::load_series(path)?,
        None => demo_series(),
    };

    let chart = ScatterChart::load(&config, &values);

    if let Some(path) = args.dump_data.as_ref()
        && let Some(data) = chart.data.as_ref()
    {
        storage::save_data_json(data, path)?;
        eprintln!("Saved {} data set(s) to {}", data.data_sets.len(), path.display());
    }

    viz::render_svg(&chart, &args.out, args.width, args.height)?;
    eprintln!("Wrote chart to {}", args.out.display());
    Ok(())
}

fn cmd_ticks(args: CommonArgs) -> Result<()> {
    let config = load_config(&args)?;
    for (name, axis) in [
        ("left", &config.left_axis),
        ("right", &config.right_axis),
        ("x", &config.x_axis),
    ] {
        println!("{name} [{}, {}]", axis.minimum, axis.maximum);
        for (v, label) in axis.tick_labels() {
            println!("  {v:>6}  {:?}", label);
        }
    }
    Ok(())
}
