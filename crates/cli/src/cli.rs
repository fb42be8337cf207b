// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use time::Date;
use time::macros::format_description;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// facilitydesk - job requests, work orders, and invoices for a facilities
/// maintenance business
#[derive(Debug, Parser)]
#[command(name = "facilitydesk", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an in-memory database.
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    #[command(flatten)]
    pub credentials: Credentials,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Login for commands that act on behalf of a user.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct Credentials {
    /// Login email
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Login password
    #[arg(long, global = true)]
    pub password: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage client companies
    #[command(subcommand)]
    Companies(CompanyCommand),

    /// Manage users and logins
    #[command(subcommand)]
    Users(UserCommand),

    /// Submit and triage job requests
    #[command(subcommand, visible_alias = "jr")]
    JobRequests(JobRequestCommand),

    /// Manage work orders
    #[command(subcommand, visible_alias = "wo")]
    WorkOrders(WorkOrderCommand),

    /// Manage the charge catalog
    #[command(subcommand)]
    Charges(ChargeCommand),

    /// Manage invoices
    #[command(subcommand)]
    Invoices(InvoiceCommand),

    /// Show work order counts by progress
    Stats,

    /// Show the Monday to Sunday work order schedule
    Schedule {
        /// Weeks relative to the current week
        #[arg(long = "week", default_value_t = 0, allow_negative_numbers = true)]
        week_offset: i64,

        /// Day treated as today, `YYYY-MM-DD`. Defaults to the current UTC date.
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },

    /// Show statistics, all work orders, and pending job requests
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// Create a company from a JSON payload file
    Create { payload: PathBuf },
    /// List every company
    List,
    /// Show one company by id or, with --by-name, by name
    Show {
        key: String,
        #[arg(long)]
        by_name: bool,
    },
    /// Activate or deactivate a company
    SetActive {
        id: String,
        #[arg(action = ArgAction::Set)]
        active: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user from a JSON payload file
    Create { payload: PathBuf },
    /// List users
    List {
        #[arg(long)]
        role: Option<String>,
    },
    /// Show one user
    Show { id: String },
    /// Register a contractor with a login
    Signup { payload: PathBuf },
    /// Attach a login to an existing user
    Credentials { payload: PathBuf },
    /// Check a login and show who it belongs to
    Whoami,
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct JobRequestFilterArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum JobRequestCommand {
    /// Submit a job request from a JSON payload file
    Submit { payload: PathBuf },
    /// List job requests
    List {
        #[command(flatten)]
        filter: JobRequestFilterArgs,
    },
    /// Show one job request
    Show { id: String },
    /// Apply a partial update from a JSON payload file
    Update { id: String, payload: PathBuf },
    /// Approve a job request and open a work order (admin)
    Approve { id: String },
    /// Reject a job request (admin)
    Reject { id: String },
    /// Remove a job request
    Remove { id: String },
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct WorkOrderFilterArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub contractor: Option<String>,
    #[arg(long)]
    pub job_request: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum WorkOrderCommand {
    /// Create a work order from a JSON payload file
    Create { payload: PathBuf },
    /// List work orders. With a login, contractors see only their own.
    List {
        #[command(flatten)]
        filter: WorkOrderFilterArgs,
    },
    /// Show one work order. With a login, contractors see only their own.
    Show { id: String },
    /// Apply a partial update from a JSON payload file
    Update { id: String, payload: PathBuf },
    /// Append a comment as the logged-in user
    Comment {
        id: String,
        #[arg(long)]
        text: String,
    },
    /// Remove a work order
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ChargeCommand {
    /// Add a charge from a JSON payload file (admin)
    Create { payload: PathBuf },
    /// List charges
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one charge
    Show { id: String },
    /// Apply a partial update from a JSON payload file (admin)
    Update { id: String, payload: PathBuf },
    /// Remove a charge (admin)
    Remove { id: String },
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct InvoiceFilterArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub work_order: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum InvoiceCommand {
    /// Create an invoice from a JSON payload file (admin)
    Create { payload: PathBuf },
    /// List invoices
    List {
        #[command(flatten)]
        filter: InvoiceFilterArgs,
    },
    /// Show one invoice
    Show { id: String },
    /// Apply a partial update from a JSON payload file (admin)
    Update { id: String, payload: PathBuf },
    /// Remove an invoice (admin)
    Remove { id: String },
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
