//! gracesite CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::{Datelike, Local, Utc};
use clap::Parser;
use gracesite_client::cli::contact::ContactCommand;
use gracesite_client::cli::events::EventsAction;
use gracesite_client::cli::playback::PlaybackAction;
use gracesite_client::cli::sermons::{BrowseArgs, SermonsAction};
use gracesite_client::cli::{Cli, Commands, OutputFormat};
use gracesite_client::output::{format_output, pretty, NO_EVENTS, NO_MATCHES};
use gracesite_client::store::FileStore;
use gracesite_client::{Config, GraceClient};
use gracesite_core::browse::{apply_filters, BrowseState, EVENTS_PER_PAGE, SERMONS_PER_PAGE};
use gracesite_core::contact::ContactForm;
use gracesite_core::events::{google_calendar_url, ics_filename, to_ical, Event, MonthGrid};
use gracesite_core::notify::{ToastRequest, ToastState, ToastStore};
use gracesite_core::playback::{PlaybackStore, Player};
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gracesite=info,gracesite_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_overrides(
        cli.sermons_url,
        cli.events_url,
        cli.contact_url,
        cli.store_path,
        cli.http_timeout_secs,
    );
    let store = FileStore::new(config.store_path.clone());
    let client = GraceClient::new(config)?;

    match cli.command {
        Commands::Sermons(sermons_cmd) => match sermons_cmd.action {
            SermonsAction::List(args) => {
                let sermons = client.fetch_sermons_or_empty().await;
                let state = browse_state(&args, SERMONS_PER_PAGE, &sermons);
                let view = state.view(&sermons);
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&view, cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_sermon_page(&view, cli.quiet))
                    }
                }
            }
            SermonsAction::Show { id } => {
                let sermons = client.fetch_sermons().await?;
                let Some(sermon) = sermons.iter().find(|s| s.id == id) else {
                    bail!("No sermon with ID {id}");
                };
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(sermon, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_sermon(sermon)),
                }
            }
        },
        Commands::Events(events_cmd) => match events_cmd.action {
            EventsAction::List(args) => {
                let events = client.fetch_events_or_empty().await;
                let state = browse_state(&args, EVENTS_PER_PAGE, &events);
                let view = state.view(&events);
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&view, cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_event_page(&view, cli.quiet))
                    }
                }
            }
            EventsAction::Calendar { year, month, day } => {
                let events = client.fetch_events_or_empty().await;
                let today = Local::now().date_naive();
                let year = year.unwrap_or(today.year());
                let month0 = month.unwrap_or(today.month()) - 1;
                let grid = MonthGrid::build(year, month0, &events)?;

                match day {
                    Some(day) => match (grid.select(day), cli.format) {
                        (Some(cell), OutputFormat::Json) => {
                            println!("{}", format_output(cell, cli.format))
                        }
                        (Some(cell), OutputFormat::Pretty) => {
                            println!("{}", pretty::format_day(cell))
                        }
                        (None, _) => {
                            if !cli.quiet {
                                println!("No events on {}-{:02}-{:02}.", year, month0 + 1, day);
                            }
                        }
                    },
                    None => match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&grid, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_month_grid(&grid, cli.quiet))
                        }
                    },
                }
            }
            EventsAction::Export {
                search,
                category,
                output,
            } => {
                let events = client.fetch_events_or_empty().await;
                let selected: Vec<Event> =
                    apply_filters(&events, search.as_deref().unwrap_or_default(), category)
                        .into_iter()
                        .cloned()
                        .collect();
                if selected.is_empty() {
                    println!("{}", if events.is_empty() { NO_EVENTS } else { NO_MATCHES });
                    return Ok(());
                }
                let path = output.unwrap_or_else(|| PathBuf::from(ics_filename(&selected)));
                export_events(&selected, &path).await?;
                if !cli.quiet {
                    println!("Exported {} event(s) to {}", selected.len(), path.display());
                }
            }
            EventsAction::GoogleLink { index } => {
                let events = client.fetch_events().await?;
                let event = index
                    .checked_sub(1)
                    .and_then(|i| events.get(i))
                    .with_context(|| {
                        format!("Event {index} not found ({} events listed)", events.len())
                    })?;
                println!("{}", google_calendar_url(event));
            }
        },
        Commands::Contact(contact_cmd) => {
            submit_contact(&client, contact_cmd, cli.format, cli.quiet).await?;
        }
        Commands::Playback(playback_cmd) => match playback_cmd.action {
            PlaybackAction::Show {
                sermon_id,
                media,
                duration,
            } => {
                let mut player = Player::new(sermon_id, media, duration.unwrap_or(0.0));
                let resumed = match store.get_position(&player.sermon_id, media).await? {
                    Some(saved) => player.resume_from(saved),
                    None => false,
                };
                if let Some(speed) = store.get_speed(media).await? {
                    player.set_speed(speed);
                }
                match cli.format {
                    OutputFormat::Json => println!(
                        "{}",
                        format_output(
                            &serde_json::json!({ "player": player, "resumed": resumed }),
                            cli.format
                        )
                    ),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_playback(&player, resumed))
                    }
                }
            }
            PlaybackAction::Save {
                sermon_id,
                seconds,
                media,
            } => {
                store.set_position(&sermon_id, media, seconds).await?;
                if !cli.quiet {
                    println!("Saved {media} position {seconds}s for sermon {sermon_id}");
                }
            }
            PlaybackAction::Speed { speed, media } => {
                store.set_speed(media, speed).await?;
                if !cli.quiet {
                    println!("Saved {media} speed {speed}x");
                }
            }
            PlaybackAction::Clear { sermon_id, media } => {
                store.clear_position(&sermon_id, media).await?;
                if !cli.quiet {
                    println!("Cleared {media} position for sermon {sermon_id}");
                }
            }
        },
    }

    Ok(())
}

/// Applies the list filters, clamping the requested page.
fn browse_state<T: gracesite_core::browse::Searchable>(
    args: &BrowseArgs,
    page_size: usize,
    items: &[T],
) -> BrowseState {
    let mut state = BrowseState::new(page_size);
    if let Some(query) = &args.search {
        state.set_query(query.clone());
    }
    state.set_category(args.category);
    state.set_page(args.page, items);
    state
}

async fn export_events(events: &[Event], path: &Path) -> anyhow::Result<()> {
    let ics = to_ical(events, Utc::now());
    tokio::fs::write(path, ics)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = events.len(), "exported events");
    Ok(())
}

async fn submit_contact(
    client: &GraceClient,
    cmd: ContactCommand,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let toasts = ToastStore::new();
    let mut updates = toasts.subscribe();

    let mut form = ContactForm::new(cmd.name, cmd.email, cmd.message);
    if let Some(phone) = cmd.phone {
        form = form.with_phone(phone);
    }
    if let Some(subject) = cmd.subject {
        form = form.with_subject(subject);
    }

    let result = client.submit_contact(&form).await;
    match &result {
        Ok(()) => {
            toasts
                .toast(
                    ToastRequest::new("Message sent")
                        .with_description("Thank you for reaching out. We'll be in touch soon."),
                )
                .await;
        }
        Err(e) => {
            toasts
                .toast(
                    ToastRequest::new("Message not sent")
                        .with_description(e.to_string())
                        .destructive(),
                )
                .await;
        }
    }

    if !quiet || result.is_err() {
        print_toasts(&mut updates, format);
    }
    if result.is_err() {
        bail!("Contact form was not submitted");
    }
    Ok(())
}

/// Prints the visible toasts from every state published so far.
fn print_toasts(updates: &mut broadcast::Receiver<ToastState>, format: OutputFormat) {
    while let Ok(state) = updates.try_recv() {
        for toast in state.toasts.iter().filter(|t| t.open) {
            match format {
                OutputFormat::Json => println!("{}", format_output(toast, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_toast(toast)),
            }
        }
    }
}
