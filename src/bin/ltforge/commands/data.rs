use anyhow::{Context, Result, bail};

use lt_forge::io::{Format, data};
use lt_forge::{InstantiateConfig, instantiate, load_library};

use crate::cli::DataArgs;
use crate::display::{Context as DisplayContext, Progress, print_fragment_summary};
use crate::io::{create_output, infer_output_format, read_library};

const TOTAL_STEPS: u8 = 3;

pub fn run_data(args: DataArgs, ctx: DisplayContext) -> Result<()> {
    let format = resolve_output_format(&args)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading template library");
    let custom = read_library(args.io.library.as_deref())?;
    let library = load_library(custom.as_deref()).context("Failed to load template library")?;
    let template = library.get(&args.name)?.clone();
    progress.complete_step("Loading template library");

    progress.step("Instantiating template");
    let config = InstantiateConfig {
        copies: args.ids.copies,
        start_atom_id: args.ids.start_atom_id,
        start_molecule_id: args.ids.start_molecule_id,
    };
    let fragment = instantiate(&template, &config).context("Instantiation failed")?;
    progress.complete_step("Instantiating template");

    if ctx.interactive {
        print_fragment_summary(&fragment);
    }

    progress.step("Writing output");
    let writer = create_output(args.io.output.as_deref())?;
    match format {
        Format::LammpsData => {
            data::write(writer, &fragment).context("Failed to write LAMMPS data sections")?;
        }
        Format::LammpsSettings => {
            data::write_settings(writer, &fragment)
                .context("Failed to write LAMMPS settings lines")?;
        }
        Format::Lt => {
            return Err(lt_forge::io::Error::UnsupportedWriteFormat(Format::Lt))
                .context("The 'data' command writes instantiated output (use 'ltforge template')");
        }
    }
    progress.complete_step("Writing output");

    progress.finish();

    Ok(())
}

fn resolve_output_format(args: &DataArgs) -> Result<Format> {
    if let Some(fmt) = args.output_format {
        return Ok(fmt.into());
    }

    if let Some(path) = &args.io.output {
        if let Some(fmt) = infer_output_format(path) {
            return Ok(fmt);
        }
        bail!(
            "Cannot infer format from '{}'. Use --outfmt to specify.",
            path.display()
        );
    }

    Ok(Format::LammpsData)
}
