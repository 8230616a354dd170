//! lostfound-client CLI entry point.

use clap::Parser;
use lostfound_client::cli::items::create_request;
use lostfound_client::cli::{Cli, Commands};
use lostfound_client::client::LostFoundClient;
use lostfound_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = LostFoundClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => {
            use lostfound_client::cli::items::ItemsAction;
            match items_cmd.action {
                ItemsAction::List => {
                    let items = client.list_items().await?;
                    println!(
                        "{}",
                        format_output(&items[..], cli.format, pretty::format_items)
                    );
                }
                ItemsAction::Create {
                    student_name,
                    student_email,
                    item_name,
                    description,
                    location_found,
                    date_found,
                } => {
                    let request = create_request(
                        student_name,
                        student_email,
                        item_name,
                        description,
                        location_found,
                        date_found,
                        chrono::Local::now().date_naive(),
                    );
                    let created = client.create_item(&request).await?;
                    if !cli.quiet {
                        println!(
                            "{}",
                            format_output(&created, cli.format, |c| c.message.clone())
                        );
                    }
                }
                ItemsAction::Get { id } => {
                    let item = client.get_item(id).await?;
                    println!("{}", format_output(&item, cli.format, pretty::format_item));
                }
                ItemsAction::Search { keyword } => {
                    let items = client.search_items(&keyword).await?;
                    println!(
                        "{}",
                        format_output(&items[..], cli.format, pretty::format_items)
                    );
                }
            }
        }
        Commands::Health(health_cmd) => {
            use lostfound_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Status => {
                    let health = client.health().await?;
                    println!(
                        "{}",
                        format_output(&health, cli.format, |h| format!("Status: {}", h.status))
                    );
                }
                HealthAction::Ready => {
                    let ready = client.ready().await?;
                    println!(
                        "{}",
                        format_output(&ready, cli.format, |r| match &r.error {
                            Some(error) => format!("Ready: {}\n  Error: {}", r.healthy, error),
                            None => format!("Ready: {}", r.healthy),
                        })
                    );
                    if !ready.healthy {
                        std::process::exit(1);
                    }
                }
            }
        }
    }

    Ok(())
}
