use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hexcraft::commands::{
    assembly_command, binary_command, convert_command, examples_command, machine_code_command,
    tables_command, ConvertArgs, OptionFlags,
};

/// Fabricates machine code, assembly, and binary renderings from source snippets.
///
/// This CLI is a thin wrapper around `hexcraft-core`. Nothing is actually
/// compiled: known keywords map to canned byte sequences and everything
/// else gets random bytes.
#[derive(Parser, Debug)]
#[command(
    name = "hexcraft",
    version,
    about = "Toy text-to-machine-code converter",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// Where the input text comes from.
#[derive(Args, Debug)]
struct InputArgs {
    /// Inline input text.
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Read input from a file (`-` for stdin).
    #[arg(long)]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run machine code, assembly, and binary conversion in one go.
    ///
    /// Options are resolved from defaults, then `--config`, then
    /// `--example`, then explicit flags.
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Prefill input (and language or mode) from a bundled example.
        #[arg(long)]
        example: Option<String>,

        /// Target architecture: x86-64 or arm64.
        #[arg(long)]
        arch: Option<String>,

        /// Source language: c or assembly.
        #[arg(long)]
        lang: Option<String>,

        /// Binary mode: text, machine, or numbers.
        #[arg(long)]
        mode: Option<String>,

        /// Text encoding for text mode: ascii, utf8, or utf16.
        #[arg(long)]
        encoding: Option<String>,

        /// JSON or YAML file with default options.
        #[arg(long)]
        config: Option<String>,

        /// Seed the random bytes used for unrecognized lines.
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write the report to this file instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },

    /// Print only the hex machine code listing.
    MachineCode {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "x86-64")]
        arch: String,

        #[arg(long, default_value = "c")]
        lang: String,

        /// Seed the random bytes used for unrecognized lines.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print only the pseudo-assembly listing.
    Assembly {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "x86-64")]
        arch: String,
    },

    /// Print only the binary rendering of the input.
    ///
    /// With `--mode machine` the input must be a hex listing such as the
    /// output of `machine-code`.
    Binary {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "text")]
        mode: String,

        #[arg(long, default_value = "ascii")]
        encoding: String,
    },

    /// List bundled example inputs.
    Examples {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the pattern tables used for machine code generation.
    Tables {
        #[arg(long)]
        arch: Option<String>,

        #[arg(long)]
        lang: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to listing examples if no command is provided.
    match cli.command.unwrap_or(Command::Examples { json: false }) {
        Command::Convert {
            input,
            example,
            arch,
            lang,
            mode,
            encoding,
            config,
            seed,
            json,
            output,
        } => {
            let args = ConvertArgs {
                text: input.text,
                file: input.file,
                example,
                flags: OptionFlags { arch, lang, mode, encoding },
                config,
                seed,
                json,
                output,
            };
            convert_command(&args)?
        }
        Command::MachineCode { input, arch, lang, seed } => machine_code_command(
            input.text.as_deref(),
            input.file.as_deref(),
            &arch,
            &lang,
            seed,
        )?,
        Command::Assembly { input, arch } => {
            assembly_command(input.text.as_deref(), input.file.as_deref(), &arch)?
        }
        Command::Binary { input, mode, encoding } => {
            binary_command(input.text.as_deref(), input.file.as_deref(), &mode, &encoding)?
        }
        Command::Examples { json } => examples_command(json)?,
        Command::Tables { arch, lang, json } => tables_command(arch.as_deref(), lang.as_deref(), json)?,
    }

    Ok(())
}
