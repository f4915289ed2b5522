use std::error::Error;
use std::io::{self, Read};
use std::process::ExitCode;

use changemaker::cs::dynamic::change_maker::format::{parse_input, parse_list, render_report};
use changemaker::{benchmark_count_change, ChangeMaker, ChangeMakerConfig, ZeroAmountPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "changemaker", about = "Enumerate and count ways to make change")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every combination of coins summing to the amount.
    Change(ProblemArgs),
    /// Print only the number of combinations.
    Count(ProblemArgs),
    /// Time `count` on random amounts and print CSV samples.
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct ProblemArgs {
    /// Comma-separated denominations, e.g. `25,10,5,1`. Read from stdin when omitted.
    #[arg(long, requires = "amount", allow_hyphen_values = true)]
    denominations: Option<String>,
    /// Amount to make change for.
    #[arg(long, requires = "denominations", allow_hyphen_values = true)]
    amount: Option<i64>,
    #[command(flatten)]
    limits: LimitArgs,
}

#[derive(Args, Debug)]
struct LimitArgs {
    /// Reject amounts above this value.
    #[arg(long)]
    max_amount: Option<usize>,
    /// How an amount of 0 is answered.
    #[arg(long, value_enum, default_value_t = ZeroPolicyArg::Empty)]
    zero_amount: ZeroPolicyArg,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Comma-separated denominations.
    #[arg(long, default_value = "25,10,5,1")]
    denominations: String,
    /// Amounts are drawn uniformly from 1 to this value.
    #[arg(long, default_value_t = 500)]
    max_amount: usize,
    /// Number of timed calls.
    #[arg(long, default_value_t = 100)]
    samples: usize,
    /// Seed for the amount generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ZeroPolicyArg {
    Empty,
    NoSolution,
    Reject,
}

impl From<ZeroPolicyArg> for ZeroAmountPolicy {
    fn from(arg: ZeroPolicyArg) -> Self {
        match arg {
            ZeroPolicyArg::Empty => ZeroAmountPolicy::EmptyCombination,
            ZeroPolicyArg::NoSolution => ZeroAmountPolicy::NoSolution,
            ZeroPolicyArg::Reject => ZeroAmountPolicy::Reject,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Change(args) => {
            let (maker, amount) = load_problem(&args)?;
            let combinations = maker.change(amount)?;
            print!("{}", render_report(combinations.as_deref()));
        }
        Command::Count(args) => {
            let (maker, amount) = load_problem(&args)?;
            match maker.count_change(amount)? {
                Some(count) => println!("{count}"),
                None => println!("No solution"),
            }
        }
        Command::Bench(args) => {
            let coins = parse_list(&args.denominations, |c| c == ',')?;
            let maker = ChangeMaker::new(&coins)?;
            let mut rng = StdRng::seed_from_u64(args.seed);
            let samples = benchmark_count_change(&maker, args.max_amount, args.samples, &mut rng)?;
            println!("amount,count,seconds");
            for sample in samples {
                println!(
                    "{},{},{:.9}",
                    sample.amount,
                    sample.count,
                    sample.elapsed.as_secs_f64()
                );
            }
        }
    }
    Ok(())
}

fn load_problem(args: &ProblemArgs) -> Result<(ChangeMaker, i64), Box<dyn Error>> {
    let (coins, amount) = match (&args.denominations, args.amount) {
        (Some(list), Some(amount)) => (parse_list(list, |c| c == ',')?, amount),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            parse_input(&input)?
        }
    };
    let config = ChangeMakerConfig {
        zero_amount: args.limits.zero_amount.into(),
        max_amount: args.limits.max_amount,
    };
    Ok((ChangeMaker::with_config(&coins, config)?, amount))
}
