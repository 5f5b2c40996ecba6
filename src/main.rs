use clap::{Args, Parser, Subcommand, ValueEnum};
use loanflow::application::builder::AmortizationFlowBuilder;
use loanflow::config::{BuilderConfig, DEFAULT_GROUP_YEARS, DEFAULT_UNIT_SCALE, RemainderPolicy};
use loanflow::interfaces::csv::flow_writer::FlowWriter;
use loanflow::interfaces::csv::scenario_reader::ScenarioReader;
use loanflow::interfaces::csv::schedule_writer::write_schedule;
use loanflow::interfaces::sankey::SankeyFigure;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Multiplier applied to the principal (inputs are in thousands by default)
    #[arg(long, global = true, env = "LOANFLOW_UNIT_SCALE", default_value_t = DEFAULT_UNIT_SCALE)]
    unit_scale: f64,

    /// Number of years grouped into one period node
    #[arg(long, global = true, env = "LOANFLOW_GROUP_YEARS", default_value_t = DEFAULT_GROUP_YEARS)]
    group_years: u32,

    /// Treatment of years past the last full period
    #[arg(long, global = true, env = "LOANFLOW_REMAINDER", value_enum, default_value_t = RemainderPolicy::Drop)]
    remainder: RemainderPolicy,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the principal/interest flow graph of one loan
    Flow {
        #[command(flatten)]
        loan: LoanArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the yearly principal and interest totals of one loan as CSV
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Build flow graphs for every scenario in a CSV file (principal, rate, years)
    Batch {
        /// Input scenarios CSV file
        input: PathBuf,
    },
}

#[derive(Args)]
struct LoanArgs {
    /// Loan amount, in units of --unit-scale
    #[arg(long, default_value_t = 250.0, allow_negative_numbers = true)]
    principal: f64,

    /// Annual interest rate as a decimal fraction (0.06 for 6%)
    #[arg(long, default_value_t = 0.06, allow_negative_numbers = true)]
    rate: f64,

    /// Term in whole years
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    years: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Nodes and weighted edges as JSON
    Json,
    /// One CSV row per edge
    Csv,
    /// Plotly-compatible Sankey figure JSON
    Sankey,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = BuilderConfig::default()
        .with_unit_scale(cli.unit_scale)
        .with_group_years(cli.group_years)
        .with_remainder(cli.remainder);
    config.validate().into_diagnostic()?;
    let builder = AmortizationFlowBuilder::new(config);

    let stdout = io::stdout();
    match cli.command {
        Command::Flow { loan, format } => {
            let graph = builder
                .build_from_raw(loan.principal, loan.rate, loan.years)
                .into_diagnostic()?;
            match format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(stdout.lock(), &graph).into_diagnostic()?;
                    println!();
                }
                OutputFormat::Csv => {
                    let mut writer = FlowWriter::new(stdout.lock());
                    writer.write_graph(1, &graph).into_diagnostic()?;
                    writer.flush().into_diagnostic()?;
                }
                OutputFormat::Sankey => {
                    let figure = SankeyFigure::from(&graph);
                    serde_json::to_writer_pretty(stdout.lock(), &figure).into_diagnostic()?;
                    println!();
                }
            }
        }
        Command::Schedule { loan } => {
            let schedule = builder
                .schedule(loan.principal, loan.rate, loan.years)
                .into_diagnostic()?;
            write_schedule(stdout.lock(), &schedule).into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = ScenarioReader::new(file);
            let mut writer = FlowWriter::new(stdout.lock());

            for (idx, scenario_result) in reader.scenarios().enumerate() {
                let scenario_no = idx + 1;
                match scenario_result {
                    Ok(scenario) => match builder.build_from_raw(
                        scenario.principal,
                        scenario.rate,
                        scenario.years,
                    ) {
                        Ok(graph) => writer.write_graph(scenario_no, &graph).into_diagnostic()?,
                        Err(e) => {
                            eprintln!("Error building flow for scenario {}: {}", scenario_no, e);
                        }
                    },
                    Err(e) => {
                        eprintln!("Error reading scenario {}: {}", scenario_no, e);
                    }
                }
            }

            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
