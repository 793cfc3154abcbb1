use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use wikitext_config::{Config, DEFAULT_MAX_PAGE_BYTES};
use wikitext_engine::{Node, load_page, outgoing_links, outline, text_content};

const USAGE: &str = "Usage: wikitext-cli [--root <wiki-folder>] <dump|text|links> <page>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Indented node outline with spans.
    Dump,
    /// Flattened text content.
    Text,
    /// Resolved outgoing page links, one per line.
    Links,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "dump" => Some(Command::Dump),
            "text" => Some(Command::Text),
            "links" => Some(Command::Links),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    page: String,
    root: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut root = None;
    let mut positional = vec![];
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "--root" {
            let Some(dir) = args.next() else {
                bail!("--root needs a folder");
            };
            root = Some(PathBuf::from(dir));
        } else {
            positional.push(arg.as_str());
        }
    }

    let [command, page] = positional[..] else {
        bail!("expected a command and a page");
    };
    let Some(command) = Command::parse(command) else {
        bail!("unknown command '{command}'");
    };
    Ok(Invocation {
        command,
        page: page.to_string(),
        root,
    })
}

fn run(command: Command, page: &Node, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Dump => write!(out, "{}", outline(page)),
        Command::Text => writeln!(out, "{}", text_content(page)),
        Command::Links => {
            for link in outgoing_links(page) {
                writeln!(out, "{link}")?;
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let config = Config::load().context("Failed to load config file")?;
    let max_page_bytes = config
        .as_ref()
        .map_or(DEFAULT_MAX_PAGE_BYTES, |config| config.max_page_bytes);
    let wiki_root = match (invocation.root, config) {
        (Some(root), _) => root,
        (None, Some(config)) => config.wiki_root,
        (None, None) => {
            eprintln!("Error: No wiki root given and no config file found");
            eprintln!("Pass --root or create {}", Config::config_path().display());
            process::exit(1);
        }
    };
    info!("Wiki root: {}", wiki_root.display());

    let page = load_page(&wiki_root, &invocation.page, max_page_bytes)
        .with_context(|| format!("Failed to load page '{}'", invocation.page))?;
    debug!("running {:?} on {}", invocation.command, invocation.page);

    let stdout = io::stdout();
    run(invocation.command, &page, &mut stdout.lock())?;
    Ok(())
}
