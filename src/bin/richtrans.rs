//! Command-line interface for richtrans.
//!
//! Usage:
//!   richtrans preview [TEXT]          - Render markup to the terminal
//!   richtrans tokens [TEXT]           - Show the parsed tokens
//!   richtrans html [TEXT]             - Render markup as HTML
//!   richtrans lookup KEY [--ns NS]    - Resolve a translation key
//!   richtrans key TEXT                - Derive an explanation key
//!   richtrans export                  - Dump the translation table as JSON
//!   richtrans demo                    - Run the interactive editor demo
//!
//! Markup is read from stdin when TEXT is omitted.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use i18n::{Language, StoreConfig, TranslationStore};
use log::Level;
use richtrans::{Demo, DemoApp, Result, log_init};
use trans::{Namespace, Renderer, TemplateSet, Token};

#[derive(Parser, Debug)]
#[command(name = "richtrans", version, about = "Numbered-tag rich text tools")]
struct Cli {
    /// Language to resolve translations in (de, en)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Store configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct MarkupArgs {
    /// Markup to process; read from stdin when omitted
    text: Option<String>,

    /// Template override such as `6=<mark>` or `2=em` (repeatable)
    #[arg(long = "template", value_name = "ID=TEMPLATE")]
    templates: Vec<String>,
}

impl MarkupArgs {
    fn input(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }

    fn renderer(&self) -> Result<Renderer> {
        let mut renderer = Renderer::default();
        for entry in &self.templates {
            let (tag, template) = TemplateSet::parse_override(entry)?;
            renderer = renderer.with(tag, template);
        }
        Ok(renderer)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render markup to the terminal
    Preview(MarkupArgs),
    /// Show the parsed tokens
    Tokens(MarkupArgs),
    /// Render markup as HTML
    Html(MarkupArgs),
    /// Resolve a translation key
    Lookup {
        key: String,
        /// Namespace to look in (content, explain)
        #[arg(long = "ns", default_value = "content")]
        namespace: Namespace,
    },
    /// Derive the explanation key for a piece of text
    Key { text: String },
    /// Dump the translation table as JSON
    Export,
    /// Run the interactive editor demo
    Demo,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        log_init::init_logger(path, Level::Debug)?;
    }

    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    if let Some(language) = cli.lang {
        config.language = language;
    }
    log::debug!("store config: {config:?}");
    let store = TranslationStore::open(config);

    match cli.command {
        Command::Preview(args) => {
            let rendered = args.renderer()?.render(&args.input()?);
            richtrans::write_rendered(&mut io::stdout(), &rendered, &store)?;
            println!();
        }
        Command::Tokens(args) => {
            let input = args.input()?;
            let renderer = args.renderer()?;
            for token in renderer.parse(&input).tokens() {
                print_token(token);
            }
        }
        Command::Html(args) => {
            let rendered = args.renderer()?.render(&args.input()?);
            println!("{}", rendered.to_html());
        }
        Command::Lookup { key, namespace } => {
            println!("{}", store.t(&key, namespace));
        }
        Command::Key { text } => {
            println!("{}", editor::generate_i18n_key(&text));
        }
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&store.translations())?);
        }
        Command::Demo => {
            DemoApp::new(Demo::new(store)).run().await?;
        }
    }
    Ok(())
}

fn print_token(token: &Token<'_>) {
    let span = token.span();
    match token {
        Token::Text { text, .. } => {
            println!("{:>4}..{:<4} text  {:?}", span.start, span.end, text);
        }
        Token::Tag(tag) => {
            let attributes: Vec<String> = tag
                .attributes
                .iter()
                .map(|(k, v)| format!("{k}={v:?}"))
                .collect();
            println!(
                "{:>4}..{:<4} <{}>   {:?} [{}]{}",
                span.start,
                span.end,
                tag.tag,
                tag.inner,
                attributes.join(" "),
                if tag.self_closing { " self-closing" } else { "" }
            );
        }
    }
}
