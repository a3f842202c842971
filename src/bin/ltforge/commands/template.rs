use anyhow::{Context, Result};

use lt_forge::io::lt;
use lt_forge::load_library;

use crate::cli::TemplateArgs;
use crate::display::{Context as DisplayContext, Progress, print_template_summary};
use crate::io::{create_output, read_library};

const TOTAL_STEPS: u8 = 2;

pub fn run_template(args: TemplateArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading template library");
    let custom = read_library(args.io.library.as_deref())?;
    let library = load_library(custom.as_deref()).context("Failed to load template library")?;
    let template = library.get(&args.name)?.clone();
    progress.complete_step("Loading template library");

    if ctx.interactive {
        print_template_summary(&template);
    }

    progress.step("Writing moltemplate block");
    let writer = create_output(args.io.output.as_deref())?;
    lt::write(writer, &template).context("Failed to write moltemplate block")?;
    progress.complete_step("Writing moltemplate block");

    progress.finish();

    Ok(())
}
