mod data;
mod template;

use data::run_data;
use template::run_template;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Template(args) => run_template(args, ctx),
        Command::Data(args) => run_data(args, ctx),
    }
}
