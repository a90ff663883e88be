use clap::Parser;
use lusakey::cli::commands::generate::Overrides;
use lusakey::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    lusakey::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Init => lusakey::cli::commands::init::execute(&cli),
        Commands::List {
            ref search,
            ref category,
        } => lusakey::cli::commands::list::execute(&cli, search.as_deref(), category.as_deref()),
        Commands::Show {
            index,
            reveal,
            copy,
            open,
        } => lusakey::cli::commands::show::execute(&cli, index, reveal, copy, open),
        Commands::Add {
            ref fields,
            generate,
        } => lusakey::cli::commands::add::execute(&cli, fields, generate),
        Commands::Edit {
            index,
            ref fields,
            password,
            generate,
        } => lusakey::cli::commands::edit::execute(&cli, index, fields, password, generate),
        Commands::Remove { index, force } => {
            lusakey::cli::commands::remove::execute(&cli, index, force)
        }
        Commands::Categories => lusakey::cli::commands::categories::execute(&cli),
        Commands::Import {
            ref file,
            ref format,
        } => lusakey::cli::commands::import_cmd::execute(&cli, file, format.as_deref()),
        Commands::Export {
            ref file,
            ref format,
        } => lusakey::cli::commands::export::execute(&cli, file, format.as_deref()),
        Commands::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            symbols,
            copy,
        } => lusakey::cli::commands::generate::execute(
            Overrides {
                length,
                no_lowercase,
                no_uppercase,
                no_digits,
                symbols,
            },
            copy,
        ),
        Commands::Passwd => lusakey::cli::commands::passwd::execute(&cli),
        Commands::Completions { shell } => lusakey::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        lusakey::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
