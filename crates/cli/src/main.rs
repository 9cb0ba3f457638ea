mod cmd;
mod output;
mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use output::{OutputFormat, print_error};

/// m365 - Manage Microsoft 365 and SharePoint Online from the command line
#[derive(Parser)]
#[command(name = "m365")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(flatten)]
  global: GlobalArgs,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct GlobalArgs {
  /// Log progress while running
  #[arg(long, global = true)]
  pub verbose: bool,

  /// Log every request made
  #[arg(long, global = true)]
  pub debug: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  pub output: OutputFormat,
}

impl GlobalArgs {
  fn log_filter(&self) -> &'static str {
    if self.debug {
      "debug"
    } else if self.verbose {
      "info"
    } else {
      "warn"
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Store an access token to use for subsequent commands
  Login {
    /// Bearer token acquired for Microsoft Graph or SharePoint
    #[arg(long)]
    access_token: String,

    /// Resource the token is for, e.g. https://contoso.sharepoint.com
    #[arg(long)]
    resource: Option<String>,

    /// Root URL of the tenant's SharePoint Online site
    #[arg(long)]
    spo_url: Option<String>,
  },

  /// Remove the stored connection
  Logout,

  /// Show the current connection
  Status,

  /// Azure Active Directory commands
  Aad {
    #[command(subcommand)]
    command: AadCommands,
  },

  /// Microsoft Graph commands
  Graph {
    #[command(subcommand)]
    command: GraphCommands,
  },

  /// SharePoint Online commands
  Spo {
    #[command(subcommand)]
    command: SpoCommands,
  },
}

#[derive(Subcommand)]
enum AadCommands {
  /// Manage Microsoft 365 Groups
  O365group {
    #[command(subcommand)]
    command: O365GroupCommands,
  },
}

#[derive(Subcommand)]
enum O365GroupCommands {
  /// Creates Microsoft 365 Group
  Add {
    /// Display name for the Microsoft 365 Group
    #[arg(short = 'n', long)]
    display_name: String,

    /// Description for the Microsoft 365 Group
    #[arg(short, long)]
    description: String,

    /// Name to use in the group e-mail (part before the @)
    #[arg(short, long)]
    mail_nickname: String,

    /// Comma-separated list of user principal names to add as group owners
    #[arg(long)]
    owners: Option<String>,

    /// Comma-separated list of user principal names to add as group members
    #[arg(long)]
    members: Option<String>,

    /// Set to true if the group should be private, false if public (default)
    #[arg(long)]
    is_private: Option<String>,

    /// Local path to the image file to use as group logo
    #[arg(short, long)]
    logo_path: Option<PathBuf>,
  },
}

#[derive(Subcommand)]
enum GraphCommands {
  /// Manage schema extensions
  Schemaextension {
    #[command(subcommand)]
    command: SchemaExtensionCommands,
  },
}

#[derive(Subcommand)]
enum SchemaExtensionCommands {
  /// Removes specified Microsoft Graph schema extension
  Remove {
    /// The unique identifier for the schema extension definition
    #[arg(short, long)]
    id: String,

    /// Don't prompt for confirming removing the schema extension
    #[arg(long)]
    confirm: bool,
  },
}

#[derive(Subcommand)]
enum SpoCommands {
  /// Sets the URL of the root SharePoint site collection
  Set {
    /// Root URL of the tenant's SharePoint Online site
    #[arg(short, long)]
    url: String,
  },

  /// Manage apps in an app catalog
  App {
    #[command(subcommand)]
    command: AppCommands,
  },

  /// Manage hub sites
  Hubsite {
    #[command(subcommand)]
    command: HubSiteCommands,
  },

  /// Manage site scripts
  Sitescript {
    #[command(subcommand)]
    command: SiteScriptCommands,
  },
}

#[derive(Subcommand)]
enum AppCommands {
  /// Uninstalls an app from the site
  Uninstall {
    /// ID of the app to uninstall
    #[arg(short, long)]
    id: String,

    /// Absolute URL of the site to uninstall the app from
    #[arg(short, long)]
    site_url: String,

    /// Scope of the app catalog: tenant or sitecollection. Default tenant
    #[arg(long)]
    scope: Option<String>,

    /// Don't prompt for confirming uninstalling the app
    #[arg(long)]
    confirm: bool,
  },
}

#[derive(Subcommand)]
enum HubSiteCommands {
  /// Disconnects the specified site collection from its hub site
  Disconnect {
    /// URL of the site collection to disconnect from its hub site
    #[arg(short, long)]
    url: String,

    /// Don't prompt for confirming disconnecting from the hub site
    #[arg(long)]
    confirm: bool,
  },
}

#[derive(Subcommand)]
enum SiteScriptCommands {
  /// Updates existing site script
  Set {
    /// Site script ID
    #[arg(short, long)]
    id: String,

    /// Site script title
    #[arg(short, long)]
    title: Option<String>,

    /// Site script description
    #[arg(short, long)]
    description: Option<String>,

    /// Site script version
    #[arg(short = 'v', long = "version")]
    script_version: Option<String>,

    /// JSON string containing the site script
    #[arg(short, long)]
    content: Option<String>,
  },
}

fn init_tracing(global: &GlobalArgs) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(global.log_filter()));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(&cli.global);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let global = cli.global;

  match cli.command {
    Commands::Login {
      access_token,
      resource,
      spo_url,
    } => cmd::cmd_login(access_token, resource, spo_url, &global),
    Commands::Logout => cmd::cmd_logout(&global),
    Commands::Status => cmd::cmd_status(&global),
    Commands::Aad {
      command: AadCommands::O365group {
        command:
          O365GroupCommands::Add {
            display_name,
            description,
            mail_nickname,
            owners,
            members,
            is_private,
            logo_path,
          },
      },
    } => cmd::cmd_o365group_add(
      m365_lib::commands::aad::o365group_add::O365GroupAddOptions {
        display_name,
        description,
        mail_nickname,
        owners,
        members,
        is_private,
        logo_path,
      },
      &global,
    ),
    Commands::Graph {
      command: GraphCommands::Schemaextension {
        command: SchemaExtensionCommands::Remove { id, confirm },
      },
    } => cmd::cmd_schemaextension_remove(id, confirm, &global),
    Commands::Spo { command } => match command {
      SpoCommands::Set { url } => cmd::cmd_spo_set(url, &global),
      SpoCommands::App {
        command: AppCommands::Uninstall {
          id,
          site_url,
          scope,
          confirm,
        },
      } => cmd::cmd_app_uninstall(id, site_url, scope, confirm, &global),
      SpoCommands::Hubsite {
        command: HubSiteCommands::Disconnect { url, confirm },
      } => cmd::cmd_hubsite_disconnect(url, confirm, &global),
      SpoCommands::Sitescript {
        command: SiteScriptCommands::Set {
          id,
          title,
          description,
          script_version,
          content,
        },
      } => cmd::cmd_sitescript_set(
        m365_lib::commands::spo::sitescript_set::SiteScriptSetOptions {
          id,
          title,
          description,
          version: script_version,
          content,
        },
        &global,
      ),
    },
  }
}
