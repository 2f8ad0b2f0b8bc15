use anyhow::{Context, Result, bail};
use iniloom_config::Config;
use iniloom_engine::{Cmd, Document, io};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: iniloom <file> <command> [args...]

Commands:
  dump                           print the document
  get <section> <key>            print an entry's value
  has <section> <key> <value>    exit 0 if the value is present, 1 otherwise
  add-section <section>          add an empty section
  add <section> <key> <value>    add an entry
  set <section> <key> <value>    overwrite an entry's value
  append <section> <key> <value> append to an entry's value";

/// What the user asked for on the command line
#[derive(Debug, PartialEq)]
enum Action {
    Dump,
    Get { section: String, key: String },
    Has { section: String, key: String, value: String },
    Edit(Cmd),
}

fn parse_action(args: &[String]) -> Result<Action> {
    let (command, rest) = args.split_first().context("missing command")?;
    let arg = |i: usize| -> Result<String> {
        rest.get(i)
            .cloned()
            .with_context(|| format!("'{command}' expects more arguments"))
    };

    let action = match command.as_str() {
        "dump" => Action::Dump,
        "get" => Action::Get {
            section: arg(0)?,
            key: arg(1)?,
        },
        "has" => Action::Has {
            section: arg(0)?,
            key: arg(1)?,
            value: arg(2)?,
        },
        "add-section" => Action::Edit(Cmd::AddSection { name: arg(0)? }),
        "add" => Action::Edit(Cmd::AddEntry {
            section: arg(0)?,
            key: arg(1)?,
            value: arg(2)?,
        }),
        "set" => Action::Edit(Cmd::ModifyEntry {
            section: arg(0)?,
            key: arg(1)?,
            value: arg(2)?,
        }),
        "append" => Action::Edit(Cmd::AppendEntry {
            section: arg(0)?,
            key: arg(1)?,
            value: arg(2)?,
        }),
        other => bail!("unknown command '{other}'"),
    };
    Ok(action)
}

fn load_document(path: &Path) -> Result<Document> {
    let config = Config::load()
        .context("Failed to load configuration")?
        .unwrap_or_default();
    log::debug!("using format {:?}", config.format);

    if path.exists() {
        io::read_file_with_format(path, config.format)
            .with_context(|| format!("Failed to read {}", path.display()))
    } else {
        log::info!("{} does not exist, starting empty", path.display());
        Ok(Document::with_format(config.format))
    }
}

fn run(path: PathBuf, action: Action) -> Result<bool> {
    let mut doc = load_document(&path)?;

    match action {
        Action::Dump => print!("{doc}"),
        Action::Get { section, key } => {
            let entry = doc
                .section(&section)
                .and_then(|s| s.entry(&key))
                .with_context(|| format!("entry [{section}]/{key} not found"))?;
            println!("{}", entry.value());
        }
        Action::Has {
            section,
            key,
            value,
        } => return Ok(doc.has_value(&section, &key, &value)),
        Action::Edit(cmd) => {
            doc.apply(&cmd)?;
            io::write_file(&path, &doc)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }

    Ok(true)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let result = parse_action(&args[2..]).and_then(|action| run(path, action));

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}
