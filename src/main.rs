use clap::Parser;
use hostpoll::config::DEFAULT_CONFIG_FILE;
use hostpoll::metrics::SysinfoProvider;
use hostpoll::{Config, FailurePolicy, Poller, Result, Sampler};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hostpoll")]
#[command(author, version, about = "Periodic host CPU, memory, disk and network report", long_about = None)]
struct Args {
    #[arg(long, help = "Update interval in seconds", value_name = "SECONDS", allow_hyphen_values = true)]
    interval: Option<String>,

    #[arg(long, help = "Path to configuration file", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, value_enum, help = "What to do when a metric query fails", default_value_t = FailurePolicy::ContinueOnError)]
    on_error: FailurePolicy,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

/// Long flags that may also be spelled with a single dash (`-interval 5`).
const SINGLE_DASH_FLAGS: [&str; 3] = ["interval", "config", "on-error"];

/// Rewrites `-flag` and `-flag=value` to their `--` form for the flags above.
fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut expecting_value = false;

    args.into_iter()
        .map(|arg| {
            if expecting_value {
                expecting_value = false;
                return arg;
            }

            let single_dash = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
                .map_or(false, |name| SINGLE_DASH_FLAGS.contains(&name));

            if single_dash {
                expecting_value = !arg.contains('=');
                format!("-{}", arg)
            } else {
                expecting_value = SINGLE_DASH_FLAGS
                    .iter()
                    .any(|flag| arg.strip_prefix("--") == Some(*flag));
                arg
            }
        })
        .collect()
}

fn main() {
    let args = Args::parse_from(normalize_args(std::env::args()));

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    log::info!("Starting hostpoll v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::resolve(args.interval.as_deref(), &args.config)?;
    log::info!("Update interval: {}s", config.interval_seconds);

    let sampler = Sampler::new(SysinfoProvider::new());
    let mut poller = Poller::new(sampler, std::io::stdout(), config.interval(), args.on_error);

    poller.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_single_dash_flags_are_rewritten() {
        assert_eq!(
            normalized(&["hostpoll", "-interval", "3", "-config=local.yaml"]),
            vec!["hostpoll", "--interval", "3", "--config=local.yaml"]
        );
    }

    #[test]
    fn test_flag_values_are_left_alone() {
        assert_eq!(
            normalized(&["hostpoll", "-interval", "-config"]),
            vec!["hostpoll", "--interval", "-config"]
        );
        assert_eq!(
            normalized(&["hostpoll", "--config", "-interval"]),
            vec!["hostpoll", "--config", "-interval"]
        );
    }

    #[test]
    fn test_other_args_pass_through() {
        assert_eq!(
            normalized(&["hostpoll", "-v", "--on-error", "fatal"]),
            vec!["hostpoll", "-v", "--on-error", "fatal"]
        );
    }

    #[test]
    fn test_negative_interval_reaches_validation() {
        let args = Args::parse_from(normalized(&["hostpoll", "-interval", "-5"]));
        assert_eq!(args.interval.as_deref(), Some("-5"));
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(args.on_error, FailurePolicy::ContinueOnError);
    }

    #[test]
    fn test_on_error_values() {
        let args = Args::parse_from(["hostpoll", "--on-error", "fatal"]);
        assert_eq!(args.on_error, FailurePolicy::Fatal);
        assert!(Args::try_parse_from(["hostpoll", "--on-error", "panic"]).is_err());
    }
}
