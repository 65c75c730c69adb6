use super::utils;
use bitree::libs::bitree::reader;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("height")
        .about("Prints the height of the tree")
        .after_help(
            r###"
Prints the number of nodes on the longest root-to-leaf path.
The empty tree has height 0, a single node has height 1.

Examples:
1. bitree build "AB#D##C##"
   bitree height tree_data.tmp

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

    writer.write_fmt(format_args!("{}\n", tree.height()))?;
    writer.flush()?;

    Ok(())
}
