use clap::Subcommand;
use std::path::PathBuf;

pub mod merge;
pub mod pack;

#[derive(Subcommand)]
pub enum Commands {
    /// Merge translated strings into a locres container
    Merge {
        /// Strings CSV with id, english, russian columns
        #[arg(short, long, default_value = "translations/Game/Game_strings.csv")]
        strings: PathBuf,

        /// Base locres container (usually the English one)
        #[arg(short, long, default_value = "Localization/Game/en/Game.locres")]
        locres: PathBuf,

        /// Where to write the merged container
        #[arg(short, long, default_value = "translations/output/Game_ru.locres")]
        output: PathBuf,
    },

    /// Pack a directory tree into a pak archive
    Pack {
        /// Directory containing the files to pack
        input: PathBuf,

        /// Path to the output pak file
        output: PathBuf,

        /// Optional mount point forwarded to the packer
        #[arg(long)]
        mount_point: Option<String>,

        /// Packer executable to invoke
        #[arg(long, default_value = "u4pak")]
        packer: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Merge {
                strings,
                locres,
                output,
            } => merge::execute(strings, locres, output),
            Commands::Pack {
                input,
                output,
                mount_point,
                packer,
            } => pack::execute(input, output, mount_point.as_deref(), packer),
        }
    }
}
