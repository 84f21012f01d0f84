//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, TemplateScope};
use crate::app::logging;
use crate::domain::{AppError, CommandLineGeneratorModel, GeneratedFile, ViewGeneratorModel};

#[derive(Parser)]
#[command(name = "mvcgen")]
#[command(version)]
#[command(about = "Scaffold MVC controllers and views from project templates", long_about = None)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project: Option<PathBuf>,
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a controller class
    #[clap(visible_alias = "c")]
    Controller {
        /// Controller class name, e.g. HomeController
        name: String,
        /// Output folder relative to the project directory
        #[arg(short = 'p', long, value_name = "DIR")]
        relative_folder_path: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
        /// Generate read/write action stubs
        #[arg(long)]
        actions: bool,
        /// Generate async action signatures
        #[arg(long = "async")]
        use_async: bool,
        /// Generate an API controller
        #[arg(long)]
        api: bool,
    },
    /// Generate an empty view
    #[clap(visible_alias = "v")]
    View {
        /// View name, e.g. Index
        name: String,
        /// Output folder relative to the project directory
        #[arg(short = 'p', long, value_name = "DIR")]
        relative_folder_path: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
        /// Layout page to reference
        #[arg(long, value_name = "PAGE", conflicts_with = "partial")]
        layout: Option<String>,
        /// Generate a partial view
        #[arg(long)]
        partial: bool,
    },
    /// List template folders in search order
    #[clap(visible_alias = "t")]
    Templates {
        /// Show the view generator's search path instead of the controller's
        #[arg(long)]
        views: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.project {
        Some(dir) => dispatch(dir, cli.command),
        None => std::env::current_dir()
            .map_err(AppError::from)
            .and_then(|dir| dispatch(dir, cli.command)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(project_dir: PathBuf, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Controller {
            name,
            relative_folder_path,
            force,
            actions,
            use_async,
            api: api_controller,
        } => {
            let model = CommandLineGeneratorModel {
                controller_name: name,
                relative_folder_path,
                force,
                read_write_actions: actions,
                use_async_actions: use_async,
                api: api_controller,
            };
            let generated = api::generate_controller_at(project_dir, &model)?;
            report(&generated);
            Ok(())
        }
        Commands::View { name, relative_folder_path, force, layout, partial } => {
            let model = ViewGeneratorModel {
                view_name: name,
                relative_folder_path,
                force,
                layout_page: layout,
                partial_view: partial,
            };
            let generated = api::generate_view_at(project_dir, &model)?;
            report(&generated);
            Ok(())
        }
        Commands::Templates { views } => {
            let scope = if views { TemplateScope::Views } else { TemplateScope::Controllers };
            for folder in api::template_folders_at(project_dir, scope)? {
                println!("{}", folder.display());
            }
            println!("(embedded)");
            Ok(())
        }
    }
}

fn report(generated: &GeneratedFile) {
    if generated.overwritten {
        println!("✅ Regenerated {}", generated.path.display());
    } else {
        println!("✅ Generated {}", generated.path.display());
    }
}
