mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_FAILURE, EXIT_FETCH_ERROR, EXIT_INPUT_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "faicons",
    version,
    about = "Font Awesome icon classes, icon names, and metadata catalog tools"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a class string from icon options.
    Classes {
        /// Icon name to normalize and append (e.g. "ArrowRight").
        #[arg(long)]
        icon: Option<String>,
        /// solid, regular, light, thin, duotone, brands.
        #[arg(long)]
        style: Option<String>,
        /// xs, sm, lg, 1x .. 10x.
        #[arg(long)]
        size: Option<String>,
        /// spin, pulse, beat, bounce, fade, beat-fade, shake, flip.
        #[arg(long)]
        animation: Option<String>,
        /// 90, 180, 270.
        #[arg(long)]
        rotation: Option<String>,
        /// horizontal, vertical, both.
        #[arg(long)]
        flip: Option<String>,
        /// left, right.
        #[arg(long)]
        pull: Option<String>,
        /// Stack layer size: 1x, 2x.
        #[arg(long)]
        stack: Option<String>,
        /// Additional classes appended verbatim.
        #[arg(long = "extra")]
        extra: Vec<String>,
    },
    /// Normalize icon names into fa- tokens.
    Normalize {
        /// Names to normalize.
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Resolve a shorthand descriptor into "<style> <token>".
    Resolve {
        /// Descriptor such as "star", "far arrow-right" or "fas fa-star".
        descriptor: String,
        /// Style prefix override (fal, far, fas, fab, fat, fad).
        #[arg(long)]
        style: Option<String>,
    },
    /// Parse an icons.yml catalog and group icons by style.
    Parse {
        /// Path to the catalog file.
        file: PathBuf,
        /// Only show icons available in this style.
        #[arg(long)]
        style: Option<String>,
    },
    /// Fetch the icon catalog from upstream.
    Fetch {
        /// Upstream source: git or npm.
        #[arg(long, default_value = "git")]
        source: String,
        /// Write the catalog to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print a per-style summary of the fetched catalog.
        #[arg(long, default_value_t = false)]
        summary: bool,
        /// Source config file (defaults to ~/.config/faicons/source.json).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Repository URL override for the git source.
        #[arg(long)]
        repo_url: Option<String>,
        /// Package name override for the npm source.
        #[arg(long)]
        package: Option<String>,
        /// Directory to search upward for package.json (npm source).
        #[arg(long)]
        project_dir: Option<PathBuf>,
    },
    /// List style prefixes and option names.
    Styles,
    /// Check that the tools needed for fetching are installed.
    Doctor,
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
    /// Generate man pages in the specified directory.
    ManPages {
        /// Output directory for man pages.
        #[arg(default_value = "man")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("FAICONS_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Classes {
            icon,
            style,
            size,
            animation,
            rotation,
            flip,
            pull,
            stack,
            extra,
        } => commands::classes::run(
            &commands::classes::ClassArgs {
                icon: icon.as_deref(),
                style: style.as_deref(),
                size: size.as_deref(),
                animation: animation.as_deref(),
                rotation: rotation.as_deref(),
                flip: flip.as_deref(),
                pull: pull.as_deref(),
                stack: stack.as_deref(),
                extra: &extra,
            },
            json_output,
        ),
        Commands::Normalize { names } => commands::normalize::run(&names, json_output),
        Commands::Resolve { descriptor, style } => {
            commands::resolve::run(&descriptor, style.as_deref(), json_output)
        }
        Commands::Parse { file, style } => {
            commands::parse::run(&file, style.as_deref(), json_output)
        }
        Commands::Fetch {
            source,
            output,
            summary,
            config,
            repo_url,
            package,
            project_dir,
        } => commands::fetch::run(
            &commands::fetch::FetchArgs {
                source: &source,
                output: output.as_deref(),
                summary,
                config: config.as_deref(),
                repo_url: repo_url.as_deref(),
                package: package.as_deref(),
                project_dir: project_dir.as_deref(),
            },
            json_output,
        ),
        Commands::Styles => commands::styles::run(json_output),
        Commands::Doctor => commands::doctor::run(json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
        Commands::ManPages { dir } => commands::man_pages::run::<Cli>(&dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("input error:") || msg.starts_with("metadata error:") {
                EXIT_INPUT_ERROR
            } else if msg.starts_with("fetch error:") {
                EXIT_FETCH_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
