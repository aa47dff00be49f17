use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use libpaletteer::{ColorFormat, PaletteType, SETTINGS_FILE_NAME};
use std::path::{Path, PathBuf};

use paletteer::commands::convert::{run as convert, ConvertArgs};
use paletteer::commands::generate::{run as generate, GenerateArgs};

#[derive(Parser, Debug, Clone)]
#[command(about = "Paletteer, a color palette generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Generate a palette
    Generate {
        /// complementary, triadic, tetradic, split-complementary, diadic, hexadic, analogous,
        /// monochromatic or random
        palette_type: PaletteType,
        /// Number of swatches
        #[arg(short = 'n', long, default_value_t = 5)]
        num_boxes: usize,
        /// CSS color to build the palette around
        #[arg(long)]
        seed: Option<String>,
        /// Keep the seed's alpha and draw random alpha for random swatches
        #[arg(long)]
        alpha: bool,
        #[arg(long)]
        limit_gray: bool,
        #[arg(long)]
        limit_dark: bool,
        #[arg(long)]
        limit_light: bool,
        /// Seed for the random number generator
        #[arg(long)]
        rng_seed: Option<u64>,
        /// Settings file. Defaults to ./paletteer.yaml when it exists
        #[arg(long)]
        config: Option<PathBuf>,
        /// Save the palette into this directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a CSS color into other formats
    Convert {
        input: String,
        /// Print only this format
        #[arg(long)]
        to: Option<ColorFormat>,
        /// Print the colors as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Generate {
            palette_type,
            num_boxes,
            seed,
            alpha,
            limit_gray,
            limit_dark,
            limit_light,
            rng_seed,
            config,
            out,
            json,
        }) => {
            let config = config.or_else(|| {
                let default = Path::new(SETTINGS_FILE_NAME);
                default.exists().then(|| default.to_path_buf())
            });

            generate(GenerateArgs {
                palette_type,
                num_boxes,
                seed: seed.as_deref(),
                enable_alpha: alpha,
                limit_gray,
                limit_dark,
                limit_light,
                rng_seed,
                config: config.as_deref(),
                out: out.as_deref(),
                json,
                stdout: &mut stdout,
            })
        }
        Some(Commands::Convert { input, to, json }) => convert(ConvertArgs {
            input: &input,
            to,
            json,
            stdout: &mut stdout,
        }),
        None => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
