use std::error::Error;

use crate::cli::{PatchArgs, read::load_json_file};

pub fn handle_patch_command(args: PatchArgs) -> Result<(), Box<dyn Error>> {
    let left = load_json_file(&args.left)?;
    let delta = load_json_file(&args.delta)?;

    let result = spatch::patch(&left, &delta)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
