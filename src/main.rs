use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Context as _;
use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use pager_tally::input::Config;
use pager_tally::output::{CsvOutputter, JsonOutputter, Outputter, StdoutOutputter};
use pager_tally::time::Period;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    /// Logs the error of a command and exits, `seahorse` actions can not
    /// return anything.
    pub fn exit_on_error<E: ErrorLike>(result: Result<(), E>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .map_err(|e| anyhow::anyhow!("missing required flag \"--{}\": {:?}", name, e))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// Parses a month like `2019-01`.
fn parse_month(month: &str) -> anyhow::Result<Period> {
    let (year, month) = month
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("expected a month like 2019-01, got \"{}\"", month))?;

    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year \"{}\"", year))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month \"{}\"", month))?;

    Ok(Period::month(year, month)?)
}

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let path = context.required_path_flag("config")?;
    let mut config = Config::try_from_toml_file(&path)?;

    if let Some(month) = context.optional_string_flag("month") {
        config.period(parse_month(&month)?);
    }

    let config = config
        .build()
        .with_context(|| format!("invalid config `{}`", path.display()))?;

    info!("finished building config for {}", config.period());

    Ok(config)
}

fn report(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let shifts = context.required_path_flag("shifts")?;

    let data = pager_tally::tally_file(&config, &shifts)?;

    let stdout = StdoutOutputter::new(context.bool_flag("details"));
    let csv = context
        .optional_string_flag("csv")
        .map(|directory| CsvOutputter::new(PathBuf::from(directory)));
    let json = context
        .optional_string_flag("json")
        .map(|path| JsonOutputter::new(PathBuf::from(path)));

    let mut outputs: Vec<&dyn Outputter> = vec![&stdout];
    if let Some(csv) = &csv {
        outputs.push(csv);
    }
    if let Some(json) = &json {
        outputs.push(json);
    }

    let errors = data.print_output(&outputs);
    if !errors.is_empty() {
        return Err(anyhow::anyhow!("{} of the outputs failed", errors.len()));
    }

    Ok(())
}

fn sources(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let sources = config.category_sources();
    let tz = config.timezone();

    for source in sources.by_priority() {
        println!("{}:", source.category());
        for span in source.spans() {
            println!(
                "\t{} - {}",
                span.start().with_timezone(&tz),
                span.end().with_timezone(&tz)
            );
        }
    }

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let report_command = Command::new("report")
        .usage(format!("{} report [args]", args[0]))
        .description("Attributes the shifts and prints how long everybody was on call.")
        .flag(Flag::new("config", FlagType::String).description("Path to the config file."))
        .flag(Flag::new("shifts", FlagType::String).description("Path to the shift file."))
        .flag(
            Flag::new("month", FlagType::String)
                .description("[optional] The month to report, like `2019-01`. Default: the period of the config"),
        )
        .flag(
            Flag::new("csv", FlagType::String)
                .description("[optional] Writes one CSV file per schedule into this folder."),
        )
        .flag(
            Flag::new("json", FlagType::String)
                .description("[optional] Writes the totals of every user to this JSON file."),
        )
        .flag(
            Flag::new("details", FlagType::Bool)
                .description("[optional] Lists the parts of every shift. Default: false"),
        )
        .action(|context: &Context| exit_on_error(report(context)));

    let sources_command = Command::new("sources")
        .usage(format!("{} sources [args]", args[0]))
        .description("Lists the company days, holidays, weekends and after-hours of the period.")
        .flag(Flag::new("config", FlagType::String).description("Path to the config file."))
        .flag(
            Flag::new("month", FlagType::String)
                .description("[optional] The month to list, like `2019-01`. Default: the period of the config"),
        )
        .action(|context: &Context| exit_on_error(sources(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(report_command)
        .command(sources_command);

    app.run(args);

    Ok(())
}
