//! CLI for finding the bodies in a catalog nearest to a point.

mod logger;
mod report;

use std::{io::BufWriter, path::PathBuf};

use clap::Parser;

/// Print the `k` bodies in a catalog that are nearest to the point (x, y, z).
///
/// The catalog has one `<name>,<x>,<y>,<z>` line per body. Lines that do not
/// fit that shape are skipped.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalog file.
    path: PathBuf,

    /// The x coordinate of the query point.
    #[arg(allow_hyphen_values = true, value_parser = parse_coordinate)]
    x: f64,

    /// The y coordinate of the query point.
    #[arg(allow_hyphen_values = true, value_parser = parse_coordinate)]
    y: f64,

    /// The z coordinate of the query point.
    #[arg(allow_hyphen_values = true, value_parser = parse_coordinate)]
    z: f64,

    /// The number of bodies to print.
    #[arg(allow_negative_numbers = true)]
    k: usize,

    /// Append the distance to the query point to each line.
    #[arg(short('d'), long)]
    distances: bool,

    /// Write logs to this file.
    #[arg(short('l'), long)]
    log_path: Option<PathBuf>,
}

/// Parses a coordinate, accepting only finite numbers.
fn parse_coordinate(s: &str) -> Result<f64, String> {
    let v = s.trim().parse::<f64>().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("`{s}` is not a finite number"))
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let _guard = args.log_path.as_ref().map(logger::configure_logger).transpose()?;
    ftlog::info!("{args:?}");

    let query = [args.x, args.y, args.z];
    let nearest = star_finder::select_file_scored(&args.path, query, args.k).map_err(|e| e.to_string())?;

    let out = BufWriter::new(std::io::stdout().lock());
    report::write_neighbors(out, &nearest, args.distances).map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Parser};
    use test_case::test_case;

    use super::{parse_coordinate, Args};

    #[test_case(&["1.0", "-4.12", "+2e1"], [1.0, -4.12, 20.0]; "plain")]
    #[test_case(&["-.5", "0", "0"], [-0.5, 0.0, 0.0]; "leading dot")]
    #[test_case(&["0", "-1e-1", "0"], [0.0, -0.1, 0.0]; "negative exponent")]
    #[test_case(&["0", "0", "-1E-1"], [0.0, 0.0, -0.1]; "upper case exponent")]
    #[test_case(&["-3", "-.25", "-2.5E+1"], [-3.0, -0.25, -25.0]; "all negative")]
    fn positional(coordinates: &[&str], expected: [f64; 3]) {
        let argv = core::iter::once("star-finder")
            .chain(["stars.txt"])
            .chain(coordinates.iter().copied())
            .chain(["2"]);
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.path, std::path::PathBuf::from("stars.txt"));
        assert_eq!([args.x, args.y, args.z], expected);
        assert_eq!(args.k, 2);
        assert!(!args.distances);
        assert!(args.log_path.is_none());
    }

    #[test]
    fn options() {
        let args = Args::try_parse_from([
            "star-finder",
            "-d",
            "--log-path",
            "logs/run.log",
            "stars.txt",
            "0",
            "0",
            "0",
            "0",
        ])
        .unwrap();
        assert!(args.distances);
        assert_eq!(args.log_path, Some("logs/run.log".into()));
        assert_eq!(args.k, 0);
    }

    #[test_case(&[]; "no arguments")]
    #[test_case(&["stars.txt", "1", "2", "3"]; "missing k")]
    #[test_case(&["stars.txt", "1", "2", "3", "4", "5"]; "extra argument")]
    fn wrong_count(rest: &[&str]) {
        let argv = core::iter::once("star-finder").chain(rest.iter().copied());
        let err = Args::try_parse_from(argv).unwrap_err();
        assert!(
            matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::UnknownArgument
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ),
            "{:?}",
            err.kind()
        );
    }

    #[test_case(&["stars.txt", "one", "2", "3", "4"]; "word coordinate")]
    #[test_case(&["stars.txt", "1", "2", "inf", "4"]; "infinite coordinate")]
    #[test_case(&["stars.txt", "1", "NaN", "3", "4"]; "nan coordinate")]
    #[test_case(&["stars.txt", "-inf", "2", "3", "4"]; "negative infinite coordinate")]
    #[test_case(&["stars.txt", "-x", "2", "3", "4"]; "dash word coordinate")]
    #[test_case(&["stars.txt", "1,5", "2", "3", "4"]; "comma decimal")]
    #[test_case(&["stars.txt", "1", "2", "3", "two"]; "word k")]
    #[test_case(&["stars.txt", "1", "2", "3", "-1"]; "negative k")]
    #[test_case(&["stars.txt", "1", "2", "3", "2.5"]; "fractional k")]
    fn bad_values(rest: &[&str]) {
        let argv = core::iter::once("star-finder").chain(rest.iter().copied());
        let err = Args::try_parse_from(argv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn coordinates() {
        assert_eq!(parse_coordinate("-0.5"), Ok(-0.5));
        assert_eq!(parse_coordinate(" 3 "), Ok(3.0));
        assert!(parse_coordinate("-inf").is_err());
        assert!(parse_coordinate("").is_err());
    }
}
