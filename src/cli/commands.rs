//! Command implementations for the Deskbot CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::analysis::StandardAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{ChatEngine, ChatMode, EngineConfig};
use crate::error::{DeskbotError, Result};
use crate::intent::{IntentCatalog, IntentClassifier, KeywordClassifier, SimilarityClassifier};
use crate::orders::OrderBook;
use crate::session::Conversation;

/// Execute a CLI command.
pub fn execute_command(args: DeskbotArgs) -> Result<()> {
    match &args.command {
        Command::Chat(chat_args) => run_chat(chat_args.clone(), &args),
        Command::Ask(ask_args) => run_ask(ask_args.clone(), &args),
        Command::Lookup(lookup_args) => run_lookup(lookup_args.clone(), &args),
        Command::Classify(classify_args) => run_classify(classify_args.clone(), &args),
    }
}

/// Build an engine from the shared bot flags.
fn build_engine(bot: &BotArgs, cli_args: &DeskbotArgs) -> Result<ChatEngine> {
    if cli_args.verbosity() > 1 {
        println!("Loading intents from: {}", bot.intents.display());
        println!("Loading orders from: {}", bot.orders.display());
    }

    let catalog = IntentCatalog::load_from_file(&bot.intents)?;
    let orders = OrderBook::load_from_file(&bot.orders)?;

    let config = EngineConfig {
        mode: bot.mode.into(),
        threshold: bot.threshold,
        retry_threshold: bot.retry_threshold,
        seed: bot.seed,
    };

    ChatEngine::new(catalog, orders, config)
}

fn mode_name(mode: ChatMode) -> &'static str {
    match mode {
        ChatMode::Keyword => "keyword",
        ChatMode::Similarity => "similarity",
    }
}

/// Run an interactive chat session on stdin/stdout.
fn run_chat(args: ChatArgs, cli_args: &DeskbotArgs) -> Result<()> {
    let mut engine = build_engine(&args.bot, cli_args)?;
    let mut conversation = Conversation::new();

    if cli_args.verbosity() > 0 {
        println!(
            "Deskbot ready ({} mode). Type a message, or \"quit\" to exit.",
            mode_name(engine.config().mode)
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        match engine.reply(&mut conversation, line) {
            Ok(reply) => println!("bot> {reply}"),
            Err(DeskbotError::InvalidArgument(_)) => println!("bot> Enter a message."),
            Err(e) => return Err(e),
        }
    }

    if cli_args.verbosity() > 1 {
        println!("Session ended after {} turns.", conversation.len());
    }

    Ok(())
}

/// Send a single message and print the reply.
fn run_ask(args: AskArgs, cli_args: &DeskbotArgs) -> Result<()> {
    let mut engine = build_engine(&args.bot, cli_args)?;
    let mut conversation = Conversation::new();

    let reply = engine.reply(&mut conversation, &args.message)?;

    output_result(
        "Reply",
        &ReplyResult {
            message: args.message,
            reply,
            mode: mode_name(engine.config().mode).to_string(),
        },
        cli_args,
    )
}

/// Look up an order directly.
fn run_lookup(args: LookupArgs, cli_args: &DeskbotArgs) -> Result<()> {
    let order_id = args.order_id.trim();
    if order_id.is_empty() {
        return Err(DeskbotError::invalid_argument("enter an order ID"));
    }

    let orders = OrderBook::load_from_file(&args.orders)?;
    let record = orders.lookup(order_id);

    output_result(
        "Order lookup",
        &LookupResult {
            order_id: order_id.to_uppercase(),
            found: record.is_some(),
            status: record.map(|r| r.status.clone()),
            eta: record.map(|r| r.eta.clone()),
        },
        cli_args,
    )
}

/// Classify a message without generating a reply.
fn run_classify(args: ClassifyArgs, cli_args: &DeskbotArgs) -> Result<()> {
    let catalog = IntentCatalog::load_from_file(&args.bot.intents)?;

    let classifier: Box<dyn IntentClassifier> = match args.bot.mode {
        ModeArg::Keyword => Box::new(KeywordClassifier::from_catalog(&catalog)?),
        ModeArg::Similarity => Box::new(SimilarityClassifier::from_catalog(
            &catalog,
            Arc::new(StandardAnalyzer::new()),
            args.bot.threshold,
        )?),
    };

    let classification = classifier.classify(&args.message)?;

    output_result(
        "Classification",
        &ClassifyResult {
            message: args.message,
            mode: classifier.name().to_string(),
            intent: classification.tag,
            confidence: classification.confidence,
        },
        cli_args,
    )
}
