use std::error::Error;

use crate::cli::{UnpatchArgs, read::load_json_file};

pub fn handle_unpatch_command(args: UnpatchArgs) -> Result<(), Box<dyn Error>> {
    let right = load_json_file(&args.right)?;
    let delta = load_json_file(&args.delta)?;

    let result = spatch::unpatch(&right, &delta)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
