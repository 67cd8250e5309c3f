#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["hexdoc", "generate", "src"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.inputs, vec![PathBuf::from("src")]);
                assert!(args.out_dir.is_none());
                assert!(args.prefix.is_none());
                assert!(!args.include_internal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_all_options() {
        let cli = Cli::try_parse_from([
            "hexdoc",
            "generate",
            "a.js",
            "lib",
            "--out-dir",
            "api",
            "--prefix",
            "@acme/",
            "--entry",
            "lib/main.js",
            "--include-internal",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.inputs, vec![PathBuf::from("a.js"), PathBuf::from("lib")]);
        assert_eq!(args.out_dir, Some(PathBuf::from("api")));
        assert_eq!(args.prefix.as_deref(), Some("@acme/"));
        assert_eq!(args.entry, Some(PathBuf::from("lib/main.js")));
        assert!(args.include_internal);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hexdoc", "scan", "src", "--json", "--cwd", "/work", "--no-color", "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.global_options().cwd, Some(PathBuf::from("/work")));
        let Command::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert!(args.json);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["hexdoc", "-v", "-q", "scan"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["hexdoc"]).is_err());
    }
}
