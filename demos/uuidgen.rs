//! Simple command that prints one or '-n count' UUID strings of any version, or inspects one

use std::{env, io, io::Write, process::ExitCode};

use tracing_subscriber::EnvFilter;
use uuidkit::{UuidV1, UuidV2, UuidV3, UuidV4, UuidV5, UuidV6, UuidV7, UuidV8};

const USAGE: &str = "[-v version] [-n count] [-s namespace] [-m name] [-l local-id] [-d uid|gid]\n       inspect <uuid>";

#[derive(Debug, Default)]
struct Options {
    version: Option<u8>,
    count: Option<usize>,
    namespace: Option<String>,
    name: Option<String>,
    local_id: Option<u32>,
    domain: Option<String>,
}

enum Command {
    Generate(Options),
    Inspect(String),
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args();
    let program = args.next();
    let command = match parse_args(args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: {} {}",
                program.as_deref().unwrap_or("uuidgen"),
                USAGE
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Inspect(src) => match uuidkit::analyze(&src) {
            Ok(inspection) => {
                let json = serde_json::to_string_pretty(&inspection).map_err(io::Error::from)?;
                writeln!(buf, "{}", json)?;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Generate(opts) => {
            for _ in 0..opts.count.unwrap_or(1) {
                match generate(&opts) {
                    Ok(uuid) => writeln!(buf, "{}", uuid)?,
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn generate(opts: &Options) -> uuidkit::Result<String> {
    let namespace = opts.namespace.as_deref().unwrap_or("");
    let name = opts.name.as_deref().unwrap_or("");
    let uuid = match opts.version.unwrap_or(7) {
        1 => UuidV1::generate().to_string(),
        2 => UuidV2::generate(
            opts.local_id.unwrap_or(0),
            opts.domain.as_deref().unwrap_or("uid"),
        )?
        .to_string(),
        3 => UuidV3::generate(namespace, name)?.to_string(),
        4 => UuidV4::generate().to_string(),
        5 => UuidV5::generate(namespace, name)?.to_string(),
        6 => UuidV6::generate().to_string(),
        7 => UuidV7::generate().to_string(),
        _ => UuidV8::generate().to_string(),
    };
    Ok(uuid)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        if arg == "inspect" {
            let Some(src) = args.next() else {
                return Err("argument to command 'inspect' missing".to_owned());
            };
            if let Some(extra) = args.next() {
                return Err(format!("unrecognized argument '{}'", extra));
            }
            return Ok(Command::Inspect(src));
        }

        let option = match arg.as_str() {
            "-v" | "-n" | "-s" | "-m" | "-l" | "-d" => &arg[1..],
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", option));
        };
        let invalid = || format!("invalid argument to option '{}': '{}'", option, value);
        let duplicate = format!("option '{}' given more than once", option);
        let replaced = match option {
            "v" => {
                let v = value.parse().ok().filter(|v| (1..=8).contains(v));
                opts.version.replace(v.ok_or_else(invalid)?).is_some()
            }
            "n" => opts
                .count
                .replace(value.parse().map_err(|_| invalid())?)
                .is_some(),
            "s" => opts.namespace.replace(value.clone()).is_some(),
            "m" => opts.name.replace(value.clone()).is_some(),
            "l" => opts
                .local_id
                .replace(value.parse().map_err(|_| invalid())?)
                .is_some(),
            _ => opts.domain.replace(value.clone()).is_some(),
        };
        if replaced {
            return Err(duplicate);
        }
    }

    if matches!(opts.version, Some(3 | 5)) && (opts.namespace.is_none() || opts.name.is_none()) {
        return Err("options 's' and 'm' required for versions 3 and 5".to_owned());
    }
    Ok(Command::Generate(opts))
}
