use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use lt_forge::io::Format;

#[derive(Parser)]
#[command(
    name = "ltforge",
    about = "Molecule template generation for LAMMPS inputs",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a molecule template as a moltemplate block
    #[command(visible_alias = "t")]
    Template(TemplateArgs),

    /// Instantiate a template into LAMMPS data/settings sections
    #[command(visible_alias = "d")]
    Data(DataArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Template library TOML (built-in library if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub library: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct TemplateArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Template to write
    #[arg(short, long, value_name = "NAME", default_value = "Solvent")]
    pub name: String,
}

#[derive(Args)]
pub struct DataArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Template to instantiate
    #[arg(short, long, value_name = "NAME", default_value = "Solvent")]
    pub name: String,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<DataOutputFormat>,

    #[command(flatten)]
    pub ids: IdOptions,
}

/// Id assignment options for instantiation.
#[derive(Args)]
#[command(next_help_heading = "Id Assignment")]
pub struct IdOptions {
    /// Number of molecules to stamp out
    #[arg(short, long, value_name = "N", default_value = "1")]
    pub copies: usize,

    /// Atom id of the first emitted atom
    #[arg(long = "start-atom-id", value_name = "ID", default_value = "1")]
    pub start_atom_id: usize,

    /// Molecule id of the first copy
    #[arg(long = "start-mol-id", value_name = "ID", default_value = "1")]
    pub start_molecule_id: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DataOutputFormat {
    /// Data-file sections (Masses, Atoms)
    #[value(name = "data")]
    Data,
    /// Settings lines (pair_coeff, group)
    #[value(name = "settings")]
    Settings,
}

impl From<DataOutputFormat> for Format {
    fn from(fmt: DataOutputFormat) -> Self {
        match fmt {
            DataOutputFormat::Data => Format::LammpsData,
            DataOutputFormat::Settings => Format::LammpsSettings,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
