use bitree::libs::bitree::DEFAULT_TREE_FILE;
use clap::*;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("free")
        .about("Deletes the tree file")
        .after_help(
            r###"
Removes a tree file written by `build`. A missing file is not an error.

Examples:
1. bitree free

2. bitree free tree.txt

"###,
        )
        .arg(
            Arg::new("infile")
                .num_args(1)
                .index(1)
                .default_value(DEFAULT_TREE_FILE)
                .help("Tree file to delete"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let path = std::path::Path::new(infile);

    if !path.exists() {
        println!("No tree file.");
        return Ok(());
    }

    std::fs::remove_file(path)
        .map_err(|e| anyhow::anyhow!("Cannot delete tree file {}: {}", infile, e))?;
    log::debug!("Removed {}", infile);
    println!("Tree freed.");

    Ok(())
}
