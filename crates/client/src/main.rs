//! rostersync-client CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rostersync_client::cli::{Cli, Commands, OutputFormat};
use rostersync_client::client::clients::CreateClientRequest;
use rostersync_client::client::locations::CreateLocationRequest;
use rostersync_client::client::teams::CreateTeamRequest;
use rostersync_client::client::RostersyncClient;
use rostersync_client::output::{format_output, pretty};
use rostersync_core::api::{CreateShiftRequest, ShiftQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rostersync_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = RostersyncClient::new(&cli.base_url);

    match cli.command {
        Commands::Shifts(shifts_cmd) => {
            use rostersync_client::cli::shifts::ShiftsAction;
            match shifts_cmd.action {
                ShiftsAction::List {
                    start,
                    end,
                    include_relations,
                } => {
                    let shifts = client
                        .list_shifts(ShiftQuery {
                            start_date: Some(start),
                            end_date: Some(end),
                            include_relations: Some(include_relations),
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&shifts, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_shifts(&shifts)),
                    }
                }
                ShiftsAction::Get { id } => {
                    let shift = client.get_shift(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&shift, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_shift(&shift)),
                    }
                }
                ShiftsAction::Create {
                    title,
                    starts_at,
                    ends_at,
                    published,
                } => {
                    let mut req = CreateShiftRequest::new(title, starts_at, ends_at);
                    req.published = published.then_some(true);
                    let shift = client.create_shift(&req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&shift, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_shift(&shift))
                        }
                    }
                }
                ShiftsAction::Delete { id } => {
                    client.delete_shift(id).await?;
                    if !cli.quiet {
                        println!("Deleted shift {}", id);
                    }
                }
                ShiftsAction::Cancel { id } => {
                    let shift = client.cancel_shift(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&shift, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Cancelled:\n{}", pretty::format_shift(&shift))
                        }
                    }
                }
                ShiftsAction::Instruct { id, text } => {
                    let shift = client.add_instruction(id, &text).await?;
                    if !cli.quiet {
                        println!(
                            "Added instruction to {} ({} total)",
                            id,
                            shift.instructions.len()
                        );
                    }
                }
                ShiftsAction::Message { id, text } => {
                    let shift = client.add_message(id, &text).await?;
                    if !cli.quiet {
                        println!("Added message to {} ({} total)", id, shift.messages.len());
                    }
                }
            }
        }
        Commands::Clients(clients_cmd) => {
            use rostersync_client::cli::clients::ClientsAction;
            match clients_cmd.action {
                ClientsAction::List => {
                    let clients = client.list_clients().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&clients, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_clients(&clients)),
                    }
                }
                ClientsAction::Get { id } => {
                    let record = client.get_client(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&record, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_client(&record)),
                    }
                }
                ClientsAction::Create {
                    name,
                    contact_email,
                } => {
                    let record = client
                        .create_client(CreateClientRequest {
                            name,
                            contact_email,
                        })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&record, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_client(&record))
                        }
                    }
                }
                ClientsAction::Delete { id } => {
                    client.delete_client(id).await?;
                    if !cli.quiet {
                        println!("Deleted client {}", id);
                    }
                }
            }
        }
        Commands::Locations(locations_cmd) => {
            use rostersync_client::cli::locations::LocationsAction;
            match locations_cmd.action {
                LocationsAction::List => {
                    let locations = client.list_locations().await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&locations, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_locations(&locations))
                        }
                    }
                }
                LocationsAction::Create { name, address } => {
                    let location = client
                        .create_location(CreateLocationRequest { name, address })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&location, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_location(&location))
                        }
                    }
                }
                LocationsAction::Delete { id } => {
                    client.delete_location(id).await?;
                    if !cli.quiet {
                        println!("Deleted location {}", id);
                    }
                }
            }
        }
        Commands::Teams(teams_cmd) => {
            use rostersync_client::cli::teams::TeamsAction;
            match teams_cmd.action {
                TeamsAction::List => {
                    let teams = client.list_teams().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&teams, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_teams(&teams)),
                    }
                }
                TeamsAction::Create { name } => {
                    let team = client.create_team(CreateTeamRequest { name }).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&team, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_team(&team))
                        }
                    }
                }
                TeamsAction::Delete { id } => {
                    client.delete_team(id).await?;
                    if !cli.quiet {
                        println!("Deleted team {}", id);
                    }
                }
            }
        }
        Commands::Staff(staff_cmd) => {
            use rostersync_client::cli::staff::StaffAction;
            match staff_cmd.action {
                StaffAction::List => {
                    let staff = client.list_staff().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&staff, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_staff(&staff)),
                    }
                }
                StaffAction::Get { id } => {
                    let member = client.get_staff_member(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&member, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_staff_member(&member))
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
