use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line arguments accepted by the `binlift` binary.
#[derive(Parser, Debug)]
#[command(
    name = "binlift",
    version,
    about = "Full-screen launcher for executables discovered on well-known paths"
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "BINLIFT_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading the default configuration file (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        action = ArgAction::Append,
        help = "Extra directory to search for executables (default: none)"
    )]
    pub(crate) dir: Vec<PathBuf>,
    #[arg(
        short = 'l',
        long = "list",
        help = "Print the discovered programs and exit without opening the interface"
    )]
    pub(crate) list: bool,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn extra_dirs_accumulate() {
        let cli =
            CliArgs::try_parse_from(["binlift", "-d", "/srv/bin", "--dir", "/tmp/bin", "--list"])
                .unwrap();
        assert_eq!(
            cli.dir,
            vec![PathBuf::from("/srv/bin"), PathBuf::from("/tmp/bin")]
        );
        assert!(cli.list);
        assert!(!cli.no_config);
    }
}
