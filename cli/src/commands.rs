use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use clap::ArgMatches;
use interval_lib::{Interval, Scalar};
use rust_decimal::Decimal;

/// The type of bounds used for the intervals on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    /// 64-bit integers
    Int,

    /// 64-bit floats
    Float,

    /// Exact decimal numbers, like 12.50
    Decimal,

    /// Dates, like 2024-12-31
    Date,

    /// Date and time without time zone, like 2024-12-31T08:30:00
    #[value(name = "datetime")]
    DateTime,

    /// Date and time with offset, like 2024-12-31T08:30:00+01:00
    Timestamp,

    /// Any text, compared alphabetically
    Text,
}

/// Run the subcommand, with bounds of the given kind, and return the text to
/// display.
pub(crate) fn run(kind: Kind, matches: &ArgMatches) -> Result<String> {
    log::debug!("bounds are {kind:?}");
    match kind {
        Kind::Int => run_with::<i64>(matches),
        Kind::Float => run_with::<f64>(matches),
        Kind::Decimal => run_with::<Decimal>(matches),
        Kind::Date => run_with::<NaiveDate>(matches),
        Kind::DateTime => run_with::<NaiveDateTime>(matches),
        Kind::Timestamp => run_with::<DateTime<FixedOffset>>(matches),
        Kind::Text => run_with::<String>(matches),
    }
}

fn run_with<T: Scalar>(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("parse", sub)) => Ok(read::<T>(sub, "interval")?.to_string()),
        Some(("contains", sub)) => {
            let intv = read::<T>(sub, "interval")?;
            let text = arg(sub, "value")?;
            let value = T::from_text(text)
                .with_context(|| format!("invalid value {text:?}"))?;
            Ok(intv.contains(&value).to_string())
        }
        Some(("overlaps", sub)) => {
            let (left, right) = read_pair::<T>(sub)?;
            Ok(left.has_overlap(&right).to_string())
        }
        Some(("union", sub)) => {
            let (left, right) = read_pair::<T>(sub)?;
            Ok(left.union(&right)?.to_string())
        }
        Some(("intersect", sub)) => {
            let (left, right) = read_pair::<T>(sub)?;
            Ok(left.intersection(&right)?.to_string())
        }
        Some(("subtract", sub)) => {
            let (left, right) = read_pair::<T>(sub)?;
            Ok(left.subtract(&right)?.to_string())
        }
        Some(("convert", sub)) => {
            let intv = read::<T>(sub, "interval")?;
            let to = sub
                .get_one::<Kind>("to")
                .copied()
                .context("missing target kind")?;
            convert_to(&intv, to)
        }
        Some((name, _)) => bail!("unknown command {name}"),
        None => bail!("no command given"),
    }
}

fn convert_to<T: Scalar>(intv: &Interval<T>, to: Kind) -> Result<String> {
    let converted = match to {
        Kind::Int => intv.convert::<i64>()?.to_string(),
        Kind::Float => intv.convert::<f64>()?.to_string(),
        Kind::Decimal => intv.convert::<Decimal>()?.to_string(),
        Kind::Date => intv.convert::<NaiveDate>()?.to_string(),
        Kind::DateTime => intv.convert::<NaiveDateTime>()?.to_string(),
        Kind::Timestamp => {
            intv.convert::<DateTime<FixedOffset>>()?.to_string()
        }
        Kind::Text => intv.convert::<String>()?.to_string(),
    };
    Ok(converted)
}

fn arg<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing argument {id}"))
}

fn read<T: Scalar>(matches: &ArgMatches, id: &str) -> Result<Interval<T>> {
    let text = arg(matches, id)?;
    Interval::parse(text).with_context(|| format!("invalid interval {text:?}"))
}

fn read_pair<T: Scalar>(
    matches: &ArgMatches,
) -> Result<(Interval<T>, Interval<T>)> {
    Ok((read(matches, "left")?, read(matches, "right")?))
}
