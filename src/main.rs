mod cli;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use morpho_bridge::{Config, Dispatcher, chat, envelope, logging, tool_definitions};

use cli::{Cli, Commands, GlobalArgs};

fn load_config(global: &GlobalArgs) -> Result<Config, Box<dyn Error>> {
    let config = Config::from_file(global.config.as_deref())?;
    Ok(config.with_backend_url(global.backend_url.as_deref()))
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Call => {
            let config = match load_config(&cli.global) {
                Ok(config) => config,
                Err(err) => {
                    // The stdio contract reports every failure inline.
                    let doc = serde_json::json!({ "error": err.to_string() });
                    println!("{doc}");
                    return Ok(());
                }
            };
            let dispatcher = Dispatcher::from_config(&config);
            envelope::handle(io::stdin().lock(), io::stdout().lock(), &dispatcher)?;
        }
        Commands::Catalog => {
            let catalog = serde_json::to_string_pretty(&tool_definitions())?;
            println!("{catalog}");
        }
        Commands::Chat {
            prompt,
            llm_url,
            model,
            output,
        } => {
            let config = load_config(&cli.global)?.with_llm(llm_url.as_deref(), model.as_deref());
            let dispatcher = Dispatcher::from_config(&config);
            chat::run(&config, &dispatcher, &prompt, output.as_deref())?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "morpho-bridge", &mut io::stdout());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
