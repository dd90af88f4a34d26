use aroma_journal::application::init::init;
use aroma_journal::application::{ConfigService, EntryService};
use aroma_journal::cli::{format_entry_list, format_vocabulary, Cli, Commands};
use aroma_journal::domain::form::{
    FIELD_AROUSAL, FIELD_INTENSITY, FIELD_MOOD, FIELD_NOTES, FIELD_PLACE, FIELD_SCENT,
    FIELD_SOURCE, FIELD_VALENCE,
};
use aroma_journal::domain::FormFields;
use aroma_journal::error::JournalError;
use aroma_journal::infrastructure::FileSystemRepository;
use clap::Parser;
use log::debug;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{:?}", cli);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Add {
            scent,
            source,
            intensity,
            valence,
            arousal,
            mood,
            place,
            notes,
        }) => {
            let mut fields = FormFields::new().with(FIELD_SCENT, scent);
            let optional = [
                (FIELD_SOURCE, source),
                (FIELD_INTENSITY, intensity),
                (FIELD_VALENCE, valence),
                (FIELD_AROUSAL, arousal),
                (FIELD_PLACE, place),
                (FIELD_NOTES, notes),
            ];
            for (name, value) in optional {
                if let Some(v) = value {
                    fields.push(name, v);
                }
            }
            for tag in mood {
                fields.push(FIELD_MOOD, tag);
            }

            let repo = FileSystemRepository::discover()?;
            let mut service = EntryService::open(repo)?;
            let entry = service.add(&fields)?;
            println!("Saved: {} ({})", entry.scent, entry.timestamp_string());
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let service = EntryService::open(repo)?;
            print!("{}", format_entry_list(service.list(limit)));
            Ok(())
        }
        Some(Commands::Export { output, stdout }) => {
            let repo = FileSystemRepository::discover()?;
            let service = EntryService::open(repo)?;
            if stdout {
                println!("{}", service.csv());
            } else {
                let path = service.export(output)?;
                println!("Exported {}", path.display());
            }
            Ok(())
        }
        Some(Commands::Tags) => {
            print!("{}", format_vocabulary());
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                println!("This deletes every entry. Run 'aroma clear --yes' to confirm.");
                return Ok(());
            }
            let repo = FileSystemRepository::discover()?;
            let mut service = EntryService::open(repo)?;
            let removed = service.clear()?;
            println!("Removed {} entries", removed);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("store = {}", config.store);
                println!(
                    "export_dir = {}",
                    config
                        .export_dir
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: aroma config [--list | <key> [<value>]]");
                println!("Valid keys: store, export_dir, created");
                Ok(())
            }
        }
        None => {
            println!("aroma - Scent and mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
