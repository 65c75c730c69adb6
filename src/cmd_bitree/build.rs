use super::utils;
use bitree::libs::bitree::tree::build;
use bitree::libs::bitree::Tree;
use clap::*;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("build")
        .about("Builds a tree from a preorder sequence and saves it")
        .after_help(
            r###"
Builds a binary tree from a preorder sequence and writes the sequence,
byte for byte, to a tree file that the query subcommands read back.

Notes:
* `#` stands for an absent child; `#` alone is the empty tree.
* Node values are single characters. Duplicated values are allowed.
* Sequences longer than 2048 characters are rejected.
* By default, missing tokens at the end are read as absent children and
  tokens after a complete tree are ignored. `--strict` rejects both.
* An existing tree file is overwritten.

Examples:
1. Build and save to tree_data.tmp:
   bitree build "AB#D##C##"

2. Save to another file, rejecting malformed input:
   bitree build "AB#D##C##" -o tree.txt --strict

"###,
        )
        .arg(
            Arg::new("preorder")
                .required(true)
                .num_args(1)
                .index(1)
                .allow_hyphen_values(true)
                .help("Preorder sequence, `#` for an absent child"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject sequences that don't describe exactly one tree"),
        )
        .arg(utils::arg_treefile())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let preorder = args.get_one::<String>("preorder").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();

    let tree = if args.get_flag("strict") {
        Tree::from_preorder_strict(preorder)?
    } else {
        let parsed = build::parse(preorder)?;
        if !parsed.complete {
            log::warn!("Sequence ended early, missing children are empty");
        } else if !parsed.is_exact() {
            log::warn!(
                "Ignored {} tokens after the tree",
                parsed.total - parsed.consumed
            );
        }
        parsed.tree
    };
    log::debug!("Built tree with {} nodes", tree.len());

    let mut writer = bitree::writer(outfile)?;
    writer.write_all(preorder.as_bytes())?;
    writer.flush()?;
    log::debug!("Saved preorder sequence to {}", outfile);

    println!("Tree built successfully.");
    println!("Preorder: {}", preorder);

    Ok(())
}
