/// CLI argument definitions for the `morpho-bridge` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "morpho-bridge",
    version,
    about = "Function-calling bridge to the morpho-rs analysis agent"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
pub struct GlobalArgs {
    /// Base URL of the morpho-rs agent (default: http://127.0.0.1:8080)
    #[arg(long, global = true, env = "MORPHO_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// TOML config file (backend_url, llm_url, model)
    #[arg(long, global = true, env = "MORPHO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle one tool call read from stdin
    #[command(long_about = "\
Handle one tool call read from stdin and write the result to stdout.

Input is a single JSON document:
  {\"name\": \"<tool>\", \"arguments\": {...}}

`arguments` may also be a string holding a JSON object. The output is the
`result` payload of the agent's response, or {\"error\": \"...\"} when anything
fails. The command always exits 0 once the output document is written.

Tools:
  list_rust_items         public_only?, blacklist?
  analyze_rust_callgraph  function, public_only?, blacklist?
  get_rust_source         function, blacklist?

Examples:
  echo '{\"name\":\"list_rust_items\",\"arguments\":{}}' | morpho-bridge call
  morpho-bridge call --backend-url http://10.0.0.5:8080 < request.json")]
    Call,

    /// Print the tool schema catalog as JSON
    #[command(long_about = "\
Print the tool schema catalog as JSON.

The output is the list of function definitions to load into an LLM runtime
that supports function calling (for example as a functions file).")]
    Catalog,

    /// Ask a function-calling model a question about the analyzed project
    #[command(long_about = "\
Ask a function-calling model a question about the analyzed project.

Sends the prompt and the tool catalog to an OpenAI-compatible chat completions
server, runs the tool calls the model requests against the agent, and prints
the model's final answer.

Set MORPHO_LLM_API_KEY if the server requires a bearer token.

Examples:
  morpho-bridge chat \"List all public items in the current Rust project\"
  morpho-bridge chat \"Explain the call graph of main\" --model qwen-coder
  morpho-bridge chat \"Summarize lib.rs\" --llm-url http://localhost:11434/v1")]
    Chat {
        /// Question for the model
        prompt: String,

        /// Chat completions base URL (default: http://localhost:1234/v1)
        #[arg(long, env = "MORPHO_LLM_URL")]
        llm_url: Option<String>,

        /// Model to use (default: qwen-coder)
        #[arg(long)]
        model: Option<String>,

        /// Save the answer to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
