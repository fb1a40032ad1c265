use futures::executor::block_on;
use orca::{
    BarChartOptions, BubbleChartOptions, Dashboard, Grouping, HeatmapOptions, Role, Stat,
    SwarmConfig, SwarmFilter,
};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Data(orca::Error),
    View(orca::view::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Data(err) => write!(f, "{err}"),
            CliError::View(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<orca::Error> for CliError {
    fn from(value: orca::Error) -> Self {
        Self::Data(value)
    }
}

impl From<orca::view::Error> for CliError {
    fn from(value: orca::view::Error) -> Self {
        Self::View(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Bar,
    Bubble,
    Heatmap,
    Swarm,
    Domain,
    Report,
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    input: Option<String>,
    pretty: bool,
    top_n: Option<usize>,
    roles: Option<Vec<Role>>,
    groups: Option<usize>,
    period: Option<(i32, i32)>,
    ranks: Option<(u32, u32)>,
    classes: Option<usize>,
    year: Option<i32>,
    stat: Option<Stat>,
    grouping: Option<Grouping>,
    seed: Option<u64>,
}

fn usage() -> &'static str {
    "orca-cli\n\
\n\
USAGE:\n\
  orca-cli bar     [--top-n <n>] [--roles forward,defensemen,goalie] [--pretty] [<csv>|-]\n\
  orca-cli bubble  [--top-n <n>] [--groups <k>] [--pretty] [<csv>|-]\n\
  orca-cli heatmap [--period <lo>-<hi>] [--ranks <lo>-<hi>] [--classes <m>] [--pretty] [<csv>|-]\n\
  orca-cli swarm   [--year <y>] [--stat points|goals|assists|games-played] [--group none|nationality|role] [--seed <n>] [--pretty] [<csv>|-]\n\
  orca-cli domain  [--top-n <n>] [--pretty] [<csv>|-]\n\
  orca-cli report  [<csv>|-]\n\
\n\
NOTES:\n\
  - If <csv> is omitted or '-', input is read from stdin.\n\
  - Table commands print JSON {row_labels, col_labels, values}.\n\
  - swarm prints a full scene: both snapshots, lanes, particles, domain.\n\
  - report prints the ingest summary (row count, coerced cell count).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "bar" => args.command = Some(Command::Bar),
            "bubble" => args.command = Some(Command::Bubble),
            "heatmap" => args.command = Some(Command::Heatmap),
            "swarm" => args.command = Some(Command::Swarm),
            "domain" => args.command = Some(Command::Domain),
            "report" => args.command = Some(Command::Report),
            "--pretty" => args.pretty = true,
            "--top-n" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.top_n = Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--roles" => {
                let Some(list) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.roles = Some(parse_roles(list).ok_or(CliError::Usage(usage()))?);
            }
            "--groups" => {
                let Some(k) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.groups = Some(k.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--period" => {
                let Some(range) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.period = Some(parse_range::<i32>(range).ok_or(CliError::Usage(usage()))?);
            }
            "--ranks" => {
                let Some(range) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.ranks = Some(parse_range::<u32>(range).ok_or(CliError::Usage(usage()))?);
            }
            "--classes" => {
                let Some(m) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.classes = Some(m.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--year" => {
                let Some(y) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.year = Some(y.parse::<i32>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--stat" => {
                let Some(stat) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.stat = Some(stat.parse::<Stat>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--group" => {
                let Some(grouping) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.grouping = Some(
                    grouping
                        .parse::<Grouping>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn parse_range<T: FromStr>(raw: &str) -> Option<(T, T)> {
    let (lo, hi) = raw.split_once('-')?;
    Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?))
}

fn parse_roles(raw: &str) -> Option<Vec<Role>> {
    let mut roles = Vec::new();
    for part in raw.split(',') {
        roles.push(part.parse::<Role>().ok()?);
    }
    Some(roles)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(command) = args.command else {
        return Err(CliError::Usage(usage()));
    };

    let text = read_input(args.input.as_deref())?;
    let mut dashboard = block_on(Dashboard::load(text.as_bytes()))?;
    if let Some(top_n) = args.top_n {
        dashboard = dashboard.with_top_n(top_n);
    }

    match command {
        Command::Bar => {
            let mut opts = BarChartOptions::default();
            if let Some(roles) = args.roles {
                opts.roles = roles;
            }
            write_json(&dashboard.bar_table(&opts), args.pretty)
        }
        Command::Bubble => {
            let mut opts = BubbleChartOptions::default();
            if let Some(top_n) = args.top_n {
                opts.top_n = top_n;
            }
            if let Some(groups) = args.groups {
                opts.year_groups = groups;
            }
            write_json(&dashboard.bubble_table(&opts), args.pretty)
        }
        Command::Heatmap => {
            let mut opts = HeatmapOptions::default();
            if let Some(period) = args.period {
                opts.period = period;
            }
            if let Some(ranks) = args.ranks {
                opts.ranks = ranks;
            }
            if let Some(classes) = args.classes {
                opts.classes = classes;
            }
            write_json(&dashboard.heatmap_table(&opts), args.pretty)
        }
        Command::Swarm => {
            let mut config = SwarmConfig::default();
            if let Some(seed) = args.seed {
                config.options.seed = seed;
            }
            let mut view = dashboard.swarm_view(config);
            view.set_filter(SwarmFilter {
                year: args.year,
                stat: args.stat.unwrap_or_default(),
            });
            let scene = view.activate(args.grouping.unwrap_or_default())?;
            write_json(&scene, args.pretty)
        }
        Command::Domain => write_json(&dashboard.domain, args.pretty),
        Command::Report => write_json(&dashboard.report, args.pretty),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
