use super::utils;
use bitree::libs::bitree::{join_path, reader};
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("path")
        .about("Prints the path from the root to a node")
        .after_help(
            r###"
Searches depth-first, the node before its children and the left subtree
before the right one, and prints the values from the root to the first
matching node joined by `->`. Prints -1 if no node matches.

Examples:
1. bitree build "AB#D##C##"
   bitree path tree_data.tmp D
   # A->B->D

"###,
        )
        .arg(utils::arg_infile())
        .arg(utils::arg_target())
        .arg(utils::arg_outfile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = bitree::writer(args.get_one::<String>("outfile").unwrap())?;

    let infile = args.get_one::<String>("infile").unwrap();
    let target = utils::get_target(args)?;
    let tree = reader::from_file(infile)?;

    let out_string = match tree.find_path(target) {
        Some(path) => join_path(&path),
        None => "-1".to_string(),
    };
    writer.write_all((out_string + "\n").as_ref())?;
    writer.flush()?;

    Ok(())
}
