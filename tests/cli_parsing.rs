use chrono::NaiveDate;
use clap::Parser;
use promptinator::cli::commands::logs::LogsCommands;
use promptinator::cli::{Cli, Commands};

#[test]
fn test_parse_preflight() {
    let cli = Cli::try_parse_from([
        "promptinator",
        "preflight",
        "--content",
        "Write a haiku",
        "--title",
        "Haiku Helper",
        "-c",
        "creative-writing",
        "-t",
        "poetry",
        "-t",
        "haiku",
        "-t",
        "template",
        "--draft",
    ])
    .unwrap();

    match cli.command {
        Commands::Preflight(args) => {
            assert_eq!(args.content.as_deref(), Some("Write a haiku"));
            assert_eq!(args.title.as_deref(), Some("Haiku Helper"));
            assert_eq!(args.mode, "template");
            assert_eq!(args.categories, vec!["creative-writing"]);
            assert_eq!(args.tags.len(), 3);
            assert!(args.draft);
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "promptinator",
        "title",
        "--mode",
        "agent",
        "--meta",
        "agentName=Dr. Data",
        "--json",
        "--config",
        "custom.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config.unwrap().to_str(), Some("custom.yaml"));
    match cli.command {
        Commands::Title(args) => {
            assert_eq!(args.mode, "agent");
            assert_eq!(args.meta[0].0, "agentName");
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_bad_meta_rejected() {
    assert!(Cli::try_parse_from(["promptinator", "title", "--meta", "nokey"]).is_err());
}

#[test]
fn test_parse_logs_list() {
    let cli = Cli::try_parse_from([
        "promptinator",
        "logs",
        "list",
        "--date",
        "2024-03-15",
        "--event",
        "term_created",
        "--limit",
        "5",
    ])
    .unwrap();

    match cli.command {
        Commands::Logs(args) => match args.command {
            LogsCommands::List { date, event, limit } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15));
                assert_eq!(event.as_deref(), Some("term_created"));
                assert_eq!(limit, Some(5));
            }
            _ => panic!("Wrong logs command"),
        },
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_logs_clean_and_bad_date() {
    let cli = Cli::try_parse_from(["promptinator", "logs", "clean", "--days", "3"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Logs(ref args) if matches!(args.command, LogsCommands::Clean { days: Some(3) })
    ));

    assert!(Cli::try_parse_from(["promptinator", "logs", "list", "--date", "yesterday"]).is_err());
}

#[test]
fn test_parse_init() {
    let cli = Cli::try_parse_from(["promptinator", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.path.to_str(), Some("."));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_terms() {
    let cli = Cli::try_parse_from(["promptinator", "terms", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Terms));
    assert!(cli.json);
    assert!(Cli::try_parse_from(["promptinator", "terms", "extra"]).is_err());
}
