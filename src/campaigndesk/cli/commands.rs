//! # CLI Layer
//!
//! This module is **one possible UI client** for campaigndesk. It is the only
//! place that parses arguments, writes to stdout/stderr and picks "today".
//!
//! ## Structure
//!
//! - `run()`: parses arguments, sets up logging and context, dispatches
//! - `handle_*()`: per-command handlers that call the API and print the result
//! - rendering lives in `render.rs`, argument definitions in `setup.rs`

use super::render::{
    print_messages, render_dashboard, render_full, render_report, render_text_list, Rendered,
};
use super::setup::{
    CampaignCommands, Cli, ClientCommands, Commands, ContentCommands, ReportCommands,
};
use campaigndesk::api::{CmdResult, ConfigAction, DeskApi, ReportKind};
use campaigndesk::config::DeskConfig;
use campaigndesk::error::Result;
use campaigndesk::init::{init_logging, initialize};
use campaigndesk::model::{
    Campaign, CampaignDraft, CampaignPatch, Client, ClientDraft, ClientPatch, ContentDraft,
    ContentItem, ContentPatch,
};
use campaigndesk::store::fs::FileStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

struct AppContext {
    api: DeskApi<FileStore>,
    config: DeskConfig,
    today: NaiveDate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        None | Some(Commands::Dashboard) => handle_dashboard(&ctx),
        Some(Commands::Client { action }) => handle_client(&mut ctx, action),
        Some(Commands::Campaign { action }) => handle_campaign(&mut ctx, action),
        Some(Commands::Content { action }) => handle_content(&mut ctx, action),
        Some(Commands::Report { kind }) => handle_report(&ctx, kind),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Export { file }) => handle_export(&ctx, file),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
    }
}

fn init_context() -> Result<AppContext> {
    let ctx = initialize()?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        today: Local::now().date_naive(),
    })
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dashboard(ctx.today, &ctx.config)?;
    if let Some(view) = &result.dashboard {
        print!("{}", render_dashboard(view, &ctx.config.currency));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_client(ctx: &mut AppContext, action: ClientCommands) -> Result<()> {
    match action {
        ClientCommands::Add {
            name,
            company,
            email,
            phone,
            industry,
            notes,
        } => {
            let draft = ClientDraft {
                name,
                company,
                email,
                phone,
                industry,
                notes,
            };
            let result = ctx.api.add::<Client>(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        ClientCommands::List => {
            let result = ctx.api.list_clients()?;
            print_listed::<Client>(ctx, &result);
            Ok(())
        }
        ClientCommands::Show(selectors) => handle_show::<Client>(ctx, &selectors.records),
        ClientCommands::Edit {
            record,
            name,
            company,
            email,
            phone,
            industry,
            notes,
        } => {
            let patch = ClientPatch {
                name,
                company,
                email,
                phone,
                industry,
                notes,
            };
            let result = ctx.api.update::<Client>(&record, patch)?;
            print_messages(&result.messages);
            Ok(())
        }
        ClientCommands::Rm(selectors) => handle_delete::<Client>(ctx, &selectors.records),
    }
}

fn handle_campaign(ctx: &mut AppContext, action: CampaignCommands) -> Result<()> {
    match action {
        CampaignCommands::Add {
            name,
            client,
            objective,
            budget,
            start,
            end,
            status,
            description,
            metrics,
        } => {
            let draft = CampaignDraft {
                name,
                client_name: client,
                objective,
                budget,
                start_date: start,
                end_date: end,
                status,
                description,
                target_metrics: metrics,
            };
            let result = ctx.api.add::<Campaign>(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        CampaignCommands::List { status } => {
            let result = ctx.api.list_campaigns(status)?;
            print_listed::<Campaign>(ctx, &result);
            Ok(())
        }
        CampaignCommands::Show(selectors) => handle_show::<Campaign>(ctx, &selectors.records),
        CampaignCommands::Edit {
            record,
            name,
            client,
            objective,
            budget,
            start,
            end,
            status,
            description,
            metrics,
        } => {
            let patch = CampaignPatch {
                name,
                client_name: client,
                objective,
                budget,
                start_date: start,
                end_date: end,
                status,
                description,
                target_metrics: metrics,
            };
            let result = ctx.api.update::<Campaign>(&record, patch)?;
            print_messages(&result.messages);
            Ok(())
        }
        CampaignCommands::Rm(selectors) => handle_delete::<Campaign>(ctx, &selectors.records),
    }
}

fn handle_content(ctx: &mut AppContext, action: ContentCommands) -> Result<()> {
    match action {
        ContentCommands::Add {
            title,
            platform,
            content_type,
            client,
            date,
            time,
            status,
            description,
        } => {
            let draft = ContentDraft {
                title,
                platform,
                content_type,
                client_name: client,
                publish_date: date,
                publish_time: time,
                status,
                description,
            };
            let result = ctx.api.add::<ContentItem>(draft)?;
            print_messages(&result.messages);
            Ok(())
        }
        ContentCommands::List { platform, status } => {
            let result = ctx.api.list_content(platform, status)?;
            print_listed::<ContentItem>(ctx, &result);
            Ok(())
        }
        ContentCommands::Show(selectors) => handle_show::<ContentItem>(ctx, &selectors.records),
        ContentCommands::Edit {
            record,
            title,
            platform,
            content_type,
            client,
            date,
            time,
            status,
            description,
        } => {
            let patch = ContentPatch {
                title,
                platform,
                content_type,
                client_name: client,
                publish_date: date,
                publish_time: time,
                status,
                description,
            };
            let result = ctx.api.update::<ContentItem>(&record, patch)?;
            print_messages(&result.messages);
            Ok(())
        }
        ContentCommands::Rm(selectors) => handle_delete::<ContentItem>(ctx, &selectors.records),
    }
}

fn print_listed<R: Rendered>(ctx: &AppContext, result: &CmdResult) {
    print!("{}", R::render_list(result.listed::<R>(), &ctx.config.currency));
    print_messages(&result.messages);
}

fn handle_show<R: Rendered>(ctx: &AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.view::<R, _>(selectors)?;
    print!("{}", render_full(result.listed::<R>(), &ctx.config.currency));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<R: Rendered>(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.delete::<R, _>(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &AppContext, kind: ReportCommands) -> Result<()> {
    let kind = match kind {
        ReportCommands::Overview => ReportKind::Overview,
        ReportCommands::Clients => ReportKind::Clients,
        ReportCommands::Status => ReportKind::CampaignStatus,
        ReportCommands::Platforms => ReportKind::Platforms,
        ReportCommands::Upcoming { days } => ReportKind::Upcoming {
            days: days.unwrap_or(ctx.config.upcoming_days),
        },
    };
    let result = ctx.api.report(kind, ctx.today)?;
    if let Some(report) = &result.report {
        print!("{}", render_report(report, &ctx.config.currency));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path()?;
    let lines: Vec<String> = result
        .paths
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    print!("{}", render_text_list(&lines, "No data file."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(file.as_deref())?;
    if let Some(json) = &result.exported {
        println!("{}", json);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import(&file)?;
    print_messages(&result.messages);
    Ok(())
}
