//! Argument parsing and command dispatch

use std::io::Write;

use clap::Parser;
use orderdesk_cli::output::OutputStyle;
use orderdesk_cli::router::{Cli, CommandRouter, Commands, OrdersAction, UsersAction};
use orderdesk_cli::{ApplicationFactory, CliError, SeedData};
use orderdesk_config::{AppConfig, SeedPolicy};

const PLAIN: OutputStyle = OutputStyle { use_colors: false };

async fn run(command: &Commands) -> (bool, String) {
    let factory = ApplicationFactory::new(&SeedData::demo(), SeedPolicy::BestEffort)
        .await
        .unwrap();
    let mut out = Vec::new();
    let ok = CommandRouter::execute(command, &factory, &PLAIN, &mut out)
        .await
        .unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "orderdesk",
        "users",
        "list",
        "--strict-seed",
        "--seed",
        "data.json",
        "-v",
    ])
    .unwrap();
    assert!(cli.strict_seed);
    assert!(cli.verbose);
    assert_eq!(cli.seed.unwrap().to_str(), Some("data.json"));
    assert_eq!(
        cli.command,
        Some(Commands::Users {
            action: UsersAction::List
        })
    );
}

#[test]
fn test_parse_order_create_with_negative_quantity() {
    let cli = Cli::try_parse_from([
        "orderdesk", "orders", "create", "--user-id", "1", "--item-id", "2", "--quantity", "-3",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Orders {
            action: OrdersAction::Create {
                user_id: "1".to_string(),
                item_id: "2".to_string(),
                quantity: -3.0,
            }
        })
    );
}

#[test]
fn test_register_requires_all_fields() {
    let result = Cli::try_parse_from(["orderdesk", "users", "register", "--name", "Bob"]);
    assert!(result.is_err());
}

#[test]
fn test_no_subcommand_parses() {
    let cli = Cli::try_parse_from(["orderdesk"]).unwrap();
    assert!(cli.command.is_none());
}

#[tokio::test]
async fn test_demo_walkthrough_succeeds() {
    let (ok, output) = run(&Commands::Demo).await;
    assert!(ok);
    assert!(output.contains("List users"));
    assert!(output.contains("bob.smith@example.com"));
    assert!(output.contains("\"quantity\": 3"));
    assert!(!output.contains("\"success\": false"));
}

#[tokio::test]
async fn test_failed_command_reports_false_and_prints_envelope() {
    let (ok, output) = run(&Commands::Orders {
        action: OrdersAction::Create {
            user_id: "1".to_string(),
            item_id: "1".to_string(),
            quantity: 0.0,
        },
    })
    .await;
    assert!(!ok);

    let envelope: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(envelope["success"], false);
    assert!(envelope.get("data").is_none());
}

#[tokio::test]
async fn test_users_list_prints_single_envelope() {
    let (ok, output) = run(&Commands::Users {
        action: UsersAction::List,
    })
    .await;
    assert!(ok);
    let envelope: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(envelope["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_build_factory_reads_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "users": [
            {{ "id": "a", "name": "Ann", "email": "ann@example.com", "password": "pw" }},
            {{ "id": "b", "name": "Bad", "email": "bad", "password": "pw" }}
        ] }}"#
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "orderdesk",
        "--seed",
        file.path().to_str().unwrap(),
    ])
    .unwrap();
    let factory = CommandRouter::build_factory(&cli, &AppConfig::default())
        .await
        .unwrap();
    let report = factory.seed_report();
    assert_eq!(report.users.loaded, 1);
    assert_eq!(report.users.skipped, 1);
    assert_eq!(factory.item_repository().count(), 0);
}

#[tokio::test]
async fn test_strict_seed_flag_overrides_config_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "items": [ {{ "id": "1", "name": "Broken", "price": -5 }} ] }}"#
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "orderdesk",
        "--strict-seed",
        "--seed",
        file.path().to_str().unwrap(),
    ])
    .unwrap();
    let result = CommandRouter::build_factory(&cli, &AppConfig::default()).await;
    assert!(matches!(result, Err(CliError::Domain(_))));
}

#[tokio::test]
async fn test_missing_seed_file_is_io_error() {
    let cli = Cli::try_parse_from(["orderdesk", "--seed", "/nonexistent/seed.json"]).unwrap();
    let result = CommandRouter::build_factory(&cli, &AppConfig::default()).await;
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "[seed]\npolicy = \"strict\"\n").unwrap();

    let cli = Cli::try_parse_from(["orderdesk", "--config", file.path().to_str().unwrap()])
        .unwrap();
    let config = CommandRouter::load_config(&cli).unwrap();
    assert_eq!(config.seed.policy, SeedPolicy::Strict);
}
