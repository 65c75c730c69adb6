use super::utils;
use bitree::libs::bitree::reader;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("nodelevel")
        .about("Prints the level of a node")
        .after_help(
            r###"
Searches breadth-first and prints the level of the first matching node,
the root being at level 1. With duplicated values this is the shallowest
match, the leftmost one on ties. Prints -1 if no node matches.

Examples:
1. bitree build "AB#D##C##"
   bitree nodelevel tree_data.tmp C
   # 2

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

    let level = match tree.node_level(target) {
        Some(level) => level.to_string(),
        None => "-1".to_string(),
    };
    writer.write_fmt(format_args!("{}\n", level))?;
    writer.flush()?;

    Ok(())
}
