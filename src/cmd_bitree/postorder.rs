use super::utils;
use bitree::libs::bitree::reader;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("postorder")
        .about("Prints the postorder traversal")
        .after_help(
            r###"
Prints node values left subtree first, then right subtree, then the node
itself, on a single line. The empty tree prints an empty line.

Examples:
1. bitree build "AB#D##C##"
   bitree postorder tree_data.tmp
   # DBCA

"###,
        )
        .arg(utils::arg_infile())
        .arg(utils::arg_outfile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = bitree::writer(args.get_one::<String>("outfile").unwrap())?;

    let infile = args.get_one::<String>("infile").unwrap();
    let tree = reader::from_file(infile)?;

    let out_string: String = tree.postorder().into_iter().collect();
    writer.write_all((out_string + "\n").as_ref())?;
    writer.flush()?;

    Ok(())
}
