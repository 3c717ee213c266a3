use clap::{CommandFactory, Parser};
use coverpick::tooling::cli::{Cli, Commands, OverrideCommands};
use coverpick::types::{CoverFit, FocalPosition};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["coverpick", "projects"],
        vec!["coverpick", "projects", "--format", "json"],
        vec!["coverpick", "resolve", "Marina Tower"],
        vec!["coverpick", "explain", "Marina Tower", "--format", "json"],
        vec!["coverpick", "export", "--output", "out/projects.json"],
        vec!["coverpick", "export", "--include-empty"],
        vec!["coverpick", "override", "show", "Marina Tower"],
        vec!["coverpick", "override", "set", "Marina Tower", "--fit", "contain"],
        vec!["coverpick", "override", "clear", "Marina Tower"],
        vec!["coverpick", "config"],
        vec!["coverpick", "--workspace", "/srv/site", "--log-level", "debug", "projects"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn override_set_parses_typed_values() {
    let cli = Cli::try_parse_from([
        "coverpick",
        "override",
        "set",
        "Harbour View",
        "--photo",
        "01-facade.jpg",
        "--position",
        "TOP",
        "--fit",
        "contain",
    ])
    .unwrap();
    match cli.command {
        Commands::Override {
            command:
                OverrideCommands::Set {
                    project,
                    photo,
                    position,
                    fit,
                },
        } => {
            assert_eq!(project, "Harbour View");
            assert_eq!(photo.as_deref(), Some("01-facade.jpg"));
            assert_eq!(position, Some(FocalPosition::Top));
            assert_eq!(fit, Some(CoverFit::Contain));
        }
        _ => panic!("expected override set"),
    }
}

#[test]
fn parse_rejects_invalid_values() {
    assert!(Cli::try_parse_from(["coverpick", "override", "set", "X", "--position", "left"]).is_err());
    assert!(Cli::try_parse_from(["coverpick", "override", "set", "X", "--fit", "stretch"]).is_err());
    assert!(Cli::try_parse_from(["coverpick", "resolve"]).is_err());
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
