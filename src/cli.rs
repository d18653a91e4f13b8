use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the report file to evaluate.
    pub input_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_single_path_ok() {
        let args = Args::try_parse_from(["station-uptime", "report.txt"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("report.txt"));
    }

    #[test]
    fn test_missing_path_fails() {
        let error = Args::try_parse_from(["station-uptime"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_argument_fails() {
        assert!(Args::try_parse_from(["station-uptime", "one.txt", "two.txt"]).is_err());
    }
}
