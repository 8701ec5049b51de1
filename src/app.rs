use clap::{self, Arg, Command};

fn add_input(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("input")
            .help("Input file")
            .default_value("-")
            .long_help("If not present or a single dash, standard input will be used"),
    )
}

fn add_pch(app: Command<'static>, default: &'static str) -> Command<'static> {
    app.arg(
        Arg::new("pch")
            .long("pch")
            .short('p')
            .help("Character used for drawing")
            .default_value(default)
            .takes_value(true),
    )
}

fn add_colour(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("colour")
            .long("colour")
            .short('c')
            .help("Colour of the plot")
            .long_help(
                "Colour of the plot: one of white, aqua, pink, blue, yellow, green, red, \
                 grey, black or default.  Unknown names fall back to default",
            )
            .default_value("default")
            .takes_value(true),
    )
}

fn add_titles(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("title")
            .long("title")
            .short('t')
            .help("Title of the plot")
            .takes_value(true),
    )
    .arg(
        Arg::new("x-title")
            .long("x-title")
            .help("Title of the x axis")
            .takes_value(true),
    )
    .arg(
        Arg::new("y-title")
            .long("y-title")
            .help("Title of the y axis")
            .takes_value(true),
    )
}

fn add_bins(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("bins")
            .long("bins")
            .short('b')
            .help("Number of bins (by default, max(10, log2(samples + 1)))")
            .takes_value(true),
    )
    .arg(
        Arg::new("binwidth")
            .long("binwidth")
            .short('w')
            .help("Width of every bin; takes precedence over --bins")
            .takes_value(true),
    )
}

fn add_hist_flags(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("nosummary")
            .long("nosummary")
            .short('n')
            .help("Do not print the summary box"),
    )
    .arg(
        Arg::new("regular")
            .long("regular")
            .short('r')
            .help("Start the count axis at 1 instead of at the smallest count"),
    )
}

pub fn get_app() -> Command<'static> {
    let mut hist = Command::new("hist")
        .version(clap::crate_version!())
        .about("Plot a vertical histogram from input values")
        .arg(
            Arg::new("height")
                .long("height")
                .short('H')
                .help("Use that many rows for the bars (capped at 20 if not given)")
                .takes_value(true),
        )
        .arg(
            Arg::new("xlab")
                .long("xlab")
                .short('x')
                .help("Print bin labels under the bars"),
        );
    hist = add_input(add_hist_flags(add_titles(add_colour(add_pch(
        add_bins(hist),
        "o",
    )))));

    let mut hhist = Command::new("hhist")
        .version(clap::crate_version!())
        .about("Plot a horizontal histogram from input values")
        .arg(
            Arg::new("width")
                .long("width")
                .short('W')
                .help("Use that many columns for the bars (capped at 20 if not given)")
                .takes_value(true),
        )
        .arg(
            Arg::new("ylab")
                .long("ylab")
                .short('y')
                .help("Print count labels under the columns"),
        );
    hhist = add_input(add_hist_flags(add_titles(add_colour(add_pch(
        add_bins(hhist),
        "o",
    )))));

    let mut scatter = Command::new("scatter")
        .version(clap::crate_version!())
        .about("Plot a scatterplot from x,y[,colour] records or from two series")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("File with x,y[,colour] records")
                .long_help(
                    "File with x,y[,colour] records.  If neither this nor --xfile and \
                     --yfile are given, standard input will be used",
                )
                .conflicts_with_all(&["xfile", "yfile"])
                .takes_value(true),
        )
        .arg(
            Arg::new("xfile")
                .long("xfile")
                .short('X')
                .help("File with one x value per line")
                .requires("yfile")
                .takes_value(true),
        )
        .arg(
            Arg::new("yfile")
                .long("yfile")
                .short('Y')
                .help("File with one y value per line")
                .requires("xfile")
                .takes_value(true),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .short('s')
                .help("Number of steps of each axis")
                .default_value("20")
                .takes_value(true),
        )
        .arg(
            Arg::new("align")
                .long("align")
                .short('a')
                .help("Alignment of the title")
                .possible_values(["left", "center", "right"])
                .default_value("center")
                .takes_value(true),
        )
        .arg(
            Arg::new("axes")
                .long("axes")
                .help("Draw the zero lines crossed by the data"),
        );
    scatter = add_titles(add_colour(add_pch(scatter, "x")));

    Command::new("termplots")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .max_term_width(100)
        .subcommand_required(true)
        .arg(
            Arg::new("color")
                .short('C')
                .long("color")
                .help("Use colors in the output")
                .possible_values(["auto", "no", "yes"])
                .default_value("auto")
                .takes_value(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        )
        .subcommand(hist)
        .subcommand(hhist)
        .subcommand(scatter)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn hist_subcommand_arg_parsing() {
        let arg_vec = vec!["termplots", "--verbose", "hist", "foo"];
        let m = get_app().get_matches_from(arg_vec);
        assert!(m.is_present("verbose"));
        assert_eq!("auto", m.value_of("color").unwrap());
        if let Some(sub_m) = m.subcommand_matches("hist") {
            assert_eq!("foo", sub_m.value_of("input").unwrap());
            assert!(sub_m.value_of("height").is_none());
            assert!(sub_m.value_of("bins").is_none());
            assert!(sub_m.value_of("binwidth").is_none());
            assert_eq!("o", sub_m.value_of("pch").unwrap());
            assert_eq!("default", sub_m.value_of("colour").unwrap());
            assert!(!sub_m.is_present("xlab"));
            assert!(!sub_m.is_present("nosummary"));
        } else {
            panic!("Subcommand `hist` not detected");
        }
    }

    #[test]
    fn hhist_subcommand_arg_parsing() {
        let arg_vec = vec![
            "termplots", "hhist", "-W", "30", "-b", "5", "-y", "-n", "-c", "red", "--title",
            "Foo",
        ];
        let m = get_app().get_matches_from(arg_vec);
        assert!(!m.is_present("verbose"));
        if let Some(sub_m) = m.subcommand_matches("hhist") {
            assert_eq!("-", sub_m.value_of("input").unwrap());
            assert_eq!("30", sub_m.value_of("width").unwrap());
            assert_eq!("5", sub_m.value_of("bins").unwrap());
            assert_eq!("red", sub_m.value_of("colour").unwrap());
            assert_eq!("Foo", sub_m.value_of("title").unwrap());
            assert!(sub_m.is_present("ylab"));
            assert!(sub_m.is_present("nosummary"));
        } else {
            panic!("Subcommand `hhist` not detected");
        }
    }

    #[test]
    fn scatter_subcommand_arg_parsing() {
        let arg_vec = vec![
            "termplots", "-C", "no", "scatter", "-X", "xs", "-Y", "ys", "--axes", "-a", "left",
        ];
        let m = get_app().get_matches_from(arg_vec);
        assert_eq!("no", m.value_of("color").unwrap());
        if let Some(sub_m) = m.subcommand_matches("scatter") {
            assert!(sub_m.value_of("file").is_none());
            assert_eq!("xs", sub_m.value_of("xfile").unwrap());
            assert_eq!("ys", sub_m.value_of("yfile").unwrap());
            assert_eq!("20", sub_m.value_of("size").unwrap());
            assert_eq!("x", sub_m.value_of("pch").unwrap());
            assert_eq!("left", sub_m.value_of("align").unwrap());
            assert!(sub_m.is_present("axes"));
        } else {
            panic!("Subcommand `scatter` not detected");
        }
    }

    #[test]
    fn scatter_sources_conflict() {
        let arg_vec = vec!["termplots", "scatter", "-f", "points", "-X", "xs", "-Y", "ys"];
        assert!(get_app().try_get_matches_from(arg_vec).is_err());
        let arg_vec = vec!["termplots", "scatter", "-X", "xs"];
        assert!(get_app().try_get_matches_from(arg_vec).is_err());
    }
}
