use std::error::Error;

use spatch::{ArrayDiffMode, DiffBehaviors, Options};

use crate::cli::{ArrayModeArg, DiffArgs, read::load_json_file};

pub fn handle_diff_command(args: DiffArgs) -> Result<(), Box<dyn Error>> {
    let left = load_json_file(&args.left)?;
    let right = load_json_file(&args.right)?;

    let array_diff_mode = match args.array_mode {
        ArrayModeArg::Efficient => ArrayDiffMode::Efficient,
        ArrayModeArg::Simple => ArrayDiffMode::Simple,
    };

    let options = Options::new()
        .with_exclude_paths(args.exclude_paths)
        .with_diff_behaviors(DiffBehaviors {
            ignore_missing_properties: args.ignore_missing,
            ignore_new_properties: args.ignore_new,
        })
        .with_array_diff_mode(array_diff_mode);

    let delta = spatch::diff(&left, &right, &options);

    println!("{}", serde_json::to_string_pretty(&delta)?);
    Ok(())
}
