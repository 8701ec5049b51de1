use std::env;
use std::fmt::Display;
use std::str::FromStr;

use clap::ArgMatches;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use yansi::Paint;

use termplots::format::{Alignment, Colour};
use termplots::plot::{
    HistogramOptions, HistogramOptionsBuilder, HorizontalHistogram, Point, ScatterOptionsBuilder,
    Scatterplot, VerticalHistogram,
};
use termplots::read::{DataReader, PointReader};
use termplots::{PlotError, Result};

#[macro_use]
extern crate log;

mod app;

/// Sets up colours and logging.  Logs go to stderr, so they never mix with
/// the plot.
fn configure_output(option: &str, verbose: bool) {
    let mut color_choice = ColorChoice::Auto;
    match option {
        "no" => {
            Paint::disable();
            color_choice = ColorChoice::Never;
        }
        "yes" => {
            color_choice = ColorChoice::Always;
        }
        _ => match env::var("TERM") {
            Ok(value) if value == "dumb" => {
                Paint::disable();
                color_choice = ColorChoice::Never;
            }
            _ => {
                if !atty::is(atty::Stream::Stdout) {
                    Paint::disable();
                }
            }
        },
    };
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    if TermLogger::init(level, config, TerminalMode::Stderr, color_choice).is_err() {
        eprintln!("Could not initialize logging");
    }
}

/// Parses an optional value, turning parse failures into an option error.
fn parse_value<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match matches.value_of(name) {
        Some(text) => match text.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(error) => Err(PlotError::InvalidOption(format!(
                "--{} '{}': {}",
                name, text, error
            ))),
        },
        None => Ok(None),
    }
}

fn point_char(matches: &ArgMatches) -> Result<char> {
    matches
        .value_of("pch")
        .and_then(|pch| pch.chars().next())
        .ok_or_else(|| PlotError::InvalidOption(String::from("--pch must not be empty")))
}

fn colour(matches: &ArgMatches) -> Colour {
    Colour::from_name(matches.value_of("colour").unwrap_or("default"))
}

fn histogram_options(matches: &ArgMatches, size: &str, labels: &str) -> Result<HistogramOptions> {
    let mut builder = HistogramOptionsBuilder::default();
    builder
        .point_char(point_char(matches)?)
        .colour(colour(matches))
        .labels(matches.is_present(labels))
        .summary(!matches.is_present("nosummary"))
        .regular(matches.is_present("regular"));
    if let Some(size) = parse_value(matches, size)? {
        builder.size(size);
    }
    if let Some(bins) = parse_value(matches, "bins")? {
        builder.bin_count(bins);
    }
    if let Some(width) = parse_value(matches, "binwidth")? {
        builder.bin_width(width);
    }
    if let Some(title) = matches.value_of("title") {
        builder.title(title);
    }
    if let Some(title) = matches.value_of("x-title") {
        builder.x_title(title);
    }
    if let Some(title) = matches.value_of("y-title") {
        builder.y_title(title);
    }
    builder
        .build()
        .map_err(|error| PlotError::InvalidOption(error.to_string()))
}

fn read_samples(matches: &ArgMatches) -> Result<Vec<f64>> {
    DataReader::default().read(matches.value_of("input").unwrap_or("-"))
}

fn vertical(matches: &ArgMatches) -> Result<()> {
    let options = histogram_options(matches, "height", "xlab")?;
    let histogram = VerticalHistogram::new(&read_samples(matches)?, options)?;
    print!("{}", histogram);
    Ok(())
}

fn horizontal(matches: &ArgMatches) -> Result<()> {
    let options = histogram_options(matches, "width", "ylab")?;
    let histogram = HorizontalHistogram::new(&read_samples(matches)?, options)?;
    print!("{}", histogram);
    Ok(())
}

fn scatter(matches: &ArgMatches) -> Result<()> {
    let mut builder = ScatterOptionsBuilder::default();
    builder
        .point_char(point_char(matches)?)
        .colour(colour(matches))
        .axes(matches.is_present("axes"))
        .alignment(
            matches
                .value_of("align")
                .unwrap_or("center")
                .parse::<Alignment>()
                .map_err(PlotError::InvalidOption)?,
        );
    if let Some(size) = parse_value(matches, "size")? {
        builder.size(size);
    }
    if let Some(title) = matches.value_of("title") {
        builder.title(title);
    }
    if let Some(title) = matches.value_of("x-title") {
        builder.x_title(title);
    }
    if let Some(title) = matches.value_of("y-title") {
        builder.y_title(title);
    }
    let options = builder
        .build()
        .map_err(|error| PlotError::InvalidOption(error.to_string()))?;
    let points = match (matches.value_of("xfile"), matches.value_of("yfile")) {
        (Some(xfile), Some(yfile)) => {
            let reader = DataReader::default();
            Point::zip(&reader.read(xfile)?, &reader.read(yfile)?)?
        }
        _ => PointReader::default().read(matches.value_of("file").unwrap_or("-"))?,
    };
    print!("{}", Scatterplot::new(&points, options)?);
    Ok(())
}

fn main() {
    let matches = app::get_app().get_matches();
    configure_output(
        matches.value_of("color").unwrap_or("auto"),
        matches.is_present("verbose"),
    );
    let result = match matches.subcommand() {
        Some(("hist", subcommand_matches)) => vertical(subcommand_matches),
        Some(("hhist", subcommand_matches)) => horizontal(subcommand_matches),
        Some(("scatter", subcommand_matches)) => scatter(subcommand_matches),
        _ => unreachable!("Invalid subcommand"),
    };
    if let Err(error) = result {
        error!("{}", error);
        std::process::exit(1);
    }
}
