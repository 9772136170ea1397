//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns
//! a `String` so output can be tested without a terminal; only
//! [`print_messages`] writes directly.
//!
//! Column layout is done with display widths (`unicode-width`), so names with
//! wide characters still line up.

use campaigndesk::api::{CmdMessage, DashboardView, MessageLevel, ReportOutput};
use campaigndesk::commands::Listed;
use campaigndesk::index::Indexed;
use campaigndesk::model::{Campaign, Client, ContentItem};
use campaigndesk::reports::parse_budget;
use colored::Colorize;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 28;
const FIELD_WIDTH: usize = 18;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// How each record kind is listed and shown.
pub(super) trait Rendered: Listed {
    fn render_list(records: &[Indexed<Self>], currency: &str) -> String;
    fn render_details(record: &Indexed<Self>, currency: &str) -> String;
}

pub(super) fn render_full<R: Rendered>(records: &[Indexed<R>], currency: &str) -> String {
    records
        .iter()
        .map(|r| R::render_details(r, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Rendered for Client {
    fn render_list(records: &[Indexed<Self>], _currency: &str) -> String {
        if records.is_empty() {
            return "No clients yet.\n".to_string();
        }
        let mut out = header(&[
            ("Name", NAME_WIDTH),
            ("Company", NAME_WIDTH),
            ("Industry", FIELD_WIDTH),
            ("Email", 0),
        ]);
        for r in records {
            let c = &r.record;
            line(
                &mut out,
                r.index,
                &[
                    (&c.name, NAME_WIDTH),
                    (&c.company, NAME_WIDTH),
                    (&c.industry, FIELD_WIDTH),
                    (&c.email, 0),
                ],
            );
        }
        out
    }

    fn render_details(r: &Indexed<Self>, _currency: &str) -> String {
        let c = &r.record;
        let mut out = title(r.index, &c.name);
        field(&mut out, "Company", &c.company);
        field(&mut out, "Email", &c.email);
        field(&mut out, "Phone", &c.phone);
        field(&mut out, "Industry", &c.industry);
        optional(&mut out, "Notes", &c.notes);
        field(&mut out, "Id", c.id.as_str());
        out
    }
}

impl Rendered for Campaign {
    fn render_list(records: &[Indexed<Self>], currency: &str) -> String {
        if records.is_empty() {
            return "No campaigns yet.\n".to_string();
        }
        let mut out = header(&[
            ("Name", NAME_WIDTH),
            ("Client", FIELD_WIDTH),
            ("Status", 10),
            ("Budget", 14),
            ("Dates", 0),
        ]);
        for r in records {
            let c = &r.record;
            let budget = format_money(parse_budget(&c.budget), currency);
            let dates = format!("{} → {}", c.start_date, c.end_date);
            line(
                &mut out,
                r.index,
                &[
                    (&c.name, NAME_WIDTH),
                    (&c.client_name, FIELD_WIDTH),
                    (c.status.as_str(), 10),
                    (&budget, 14),
                    (&dates, 0),
                ],
            );
        }
        out
    }

    fn render_details(r: &Indexed<Self>, currency: &str) -> String {
        let c = &r.record;
        let mut out = title(r.index, &c.name);
        field(&mut out, "Client", &c.client_name);
        field(&mut out, "Objective", &c.objective);
        let budget = if c.budget.trim().is_empty() {
            String::new()
        } else {
            format!("{} ({})", format_money(parse_budget(&c.budget), currency), c.budget.trim())
        };
        field(&mut out, "Budget", &budget);
        field(&mut out, "Start", &c.start_date.to_string());
        field(&mut out, "End", &c.end_date.to_string());
        field(&mut out, "Status", c.status.as_str());
        optional(&mut out, "Description", &c.description);
        optional(&mut out, "Target metrics", &c.target_metrics);
        field(&mut out, "Id", c.id.as_str());
        out
    }
}

impl Rendered for ContentItem {
    fn render_list(records: &[Indexed<Self>], _currency: &str) -> String {
        if records.is_empty() {
            return "No content scheduled.\n".to_string();
        }
        let mut out = header(&[
            ("Date", 17),
            ("Title", NAME_WIDTH),
            ("Platform", 10),
            ("Type", 11),
            ("Status", 0),
        ]);
        for r in records {
            let i = &r.record;
            let when = format!("{} {}", i.publish_date, i.publish_time);
            line(
                &mut out,
                r.index,
                &[
                    (when.trim_end(), 17),
                    (&i.title, NAME_WIDTH),
                    (i.platform.as_str(), 10),
                    (i.content_type.as_str(), 11),
                    (i.status.as_str(), 0),
                ],
            );
        }
        out
    }

    fn render_details(r: &Indexed<Self>, _currency: &str) -> String {
        let i = &r.record;
        let mut out = title(r.index, &i.title);
        field(&mut out, "Platform", i.platform.as_str());
        field(&mut out, "Type", i.content_type.as_str());
        optional(&mut out, "Client", &i.client_name);
        field(&mut out, "Publish date", &i.publish_date.to_string());
        field(&mut out, "Publish time", &i.publish_time);
        field(&mut out, "Status", i.status.as_str());
        optional(&mut out, "Description", &i.description);
        field(&mut out, "Id", i.id.as_str());
        out
    }
}

pub(super) fn render_dashboard(view: &DashboardView, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Dashboard".bold());
    let _ = writeln!(out, "  Clients            {}", view.total_clients);
    let _ = writeln!(
        out,
        "  Active campaigns   {} of {}",
        view.active_campaigns, view.total_campaigns
    );
    let _ = writeln!(
        out,
        "  Content, next {} days  {}",
        view.upcoming_days, view.upcoming_content
    );

    out.push('\n');
    let _ = writeln!(out, "{}", "Recent campaigns".bold());
    out.push_str(&Campaign::render_list(&view.recent_campaigns, currency));

    out.push('\n');
    let _ = writeln!(out, "{}", "Coming up".bold());
    out.push_str(&ContentItem::render_list(&view.next_content, currency));
    out
}

pub(super) fn render_report(report: &ReportOutput, currency: &str) -> String {
    let mut out = String::new();
    match report {
        ReportOutput::Overview(o) => {
            let _ = writeln!(out, "{}", "Overview".bold());
            let rows = [
                ("Clients", o.total_clients.to_string()),
                ("Campaigns", o.total_campaigns.to_string()),
                ("  active", o.active_campaigns.to_string()),
                ("  completed", o.completed_campaigns.to_string()),
                ("Total budget", format_money(o.total_budget, currency)),
                ("Content items", o.total_content.to_string()),
                ("  scheduled ahead", o.upcoming_content.to_string()),
                ("  published", o.published_content.to_string()),
            ];
            for (label, value) in rows {
                let _ = writeln!(out, "  {}{}", fit(label, 20), value);
            }
        }
        ReportOutput::Clients(rows) => {
            if rows.is_empty() {
                return "No clients yet.\n".to_string();
            }
            out.push_str(&header(&[
                ("Client", NAME_WIDTH),
                ("Company", FIELD_WIDTH),
                ("Campaigns", 11),
                ("Active", 8),
                ("Content", 9),
                ("Budget", 0),
            ]));
            for (i, row) in rows.iter().enumerate() {
                line(
                    &mut out,
                    i + 1,
                    &[
                        (&row.name, NAME_WIDTH),
                        (&row.company, FIELD_WIDTH),
                        (&row.campaigns.to_string(), 11),
                        (&row.active_campaigns.to_string(), 8),
                        (&row.content.to_string(), 9),
                        (&format_money(row.budget, currency), 0),
                    ],
                );
            }
        }
        ReportOutput::CampaignStatus(buckets) => {
            let _ = writeln!(out, "{}", "Campaigns by status".bold());
            for b in buckets {
                let _ = writeln!(
                    out,
                    "  {}{}{}",
                    fit(b.status.as_str(), 12),
                    fit(&b.count.to_string(), 6),
                    format_money(b.budget, currency)
                );
            }
        }
        ReportOutput::Platforms(tallies) => {
            let _ = writeln!(out, "{}", "Content by platform".bold());
            let _ = writeln!(
                out,
                "  {}{}{}{}{}",
                fit("Platform", 12),
                fit("Total", 7),
                fit("Sched.", 8),
                fit("Publ.", 7),
                "Draft"
            );
            for t in tallies {
                let _ = writeln!(
                    out,
                    "  {}{}{}{}{}",
                    fit(t.platform.as_str(), 12),
                    fit(&t.total.to_string(), 7),
                    fit(&t.scheduled.to_string(), 8),
                    fit(&t.published.to_string(), 7),
                    t.draft
                );
            }
        }
        ReportOutput::Upcoming { days, items } => {
            let _ = writeln!(out, "{}", format!("Content in the next {} days", days).bold());
            out.push_str(&ContentItem::render_list(items, currency));
        }
    }
    out
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `1234.5` with `$` becomes `$1,234.50`. Formatted from the float itself, so
/// amounts of any magnitude keep all their whole digits.
pub(super) fn format_money(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}{}.{}", sign, currency, grouped, cents)
}

fn title(index: usize, label: &str) -> String {
    format!("{} {}\n", format!("{}.", index).yellow(), label.bold())
}

fn field(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {}{}", fit(&format!("{}:", label), 16).dimmed(), value);
}

fn optional(out: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        field(out, label, value);
    }
}

fn header(columns: &[(&str, usize)]) -> String {
    let mut out = " ".repeat(INDEX_WIDTH);
    for (label, width) in columns {
        out.push_str(&fit(label, *width));
    }
    format!("{}\n", out.trim_end().dimmed())
}

fn line(out: &mut String, index: usize, cells: &[(&str, usize)]) {
    let idx = format!("{:>width$} ", format!("{}.", index), width = INDEX_WIDTH - 1);
    let mut rest = String::new();
    for (text, width) in cells {
        rest.push_str(&fit(text, *width));
    }
    let _ = writeln!(out, "{}{}", idx.yellow(), rest.trim_end());
}

/// Pads or truncates to `width` display columns. A width of zero leaves the text as is.
fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let text = truncate_to_width(text, width.saturating_sub(1));
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
