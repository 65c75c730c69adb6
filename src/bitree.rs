extern crate clap;
use clap::*;
use std::io::Write;

mod cmd_bitree;

fn main() {
    let app = Command::new("bitree")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`bitree` - Binary trees from preorder sequences")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print debug messages to stderr"),
        )
        .subcommand(cmd_bitree::build::make_subcommand())
        .subcommand(cmd_bitree::height::make_subcommand())
        .subcommand(cmd_bitree::postorder::make_subcommand())
        .subcommand(cmd_bitree::path::make_subcommand())
        .subcommand(cmd_bitree::nodelevel::make_subcommand())
        .subcommand(cmd_bitree::free::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* Tree file:
    * build - Build a tree and save its preorder sequence
    * free  - Delete the tree file

* Queries:
    * height    - Height of the tree
    * postorder - Postorder traversal
    * path      - Path from the root to a node
    * nodelevel - Level of a node

Preorder sequences list node values root first, left subtree before
right, with `#` standing for an absent child, e.g. `AB#D##C##`.

"###,
        );

    // Usage problems go to stdout and exit with 1, like any other failure
    let matches = match app.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            print!("{}", err.render());
            std::io::stdout().flush().ok();
            std::process::exit(code);
        }
    };

    init_logger(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("build", sub_matches)) => cmd_bitree::build::execute(sub_matches),
        Some(("height", sub_matches)) => cmd_bitree::height::execute(sub_matches),
        Some(("postorder", sub_matches)) => cmd_bitree::postorder::execute(sub_matches),
        Some(("path", sub_matches)) => cmd_bitree::path::execute(sub_matches),
        Some(("nodelevel", sub_matches)) => cmd_bitree::nodelevel::execute(sub_matches),
        Some(("free", sub_matches)) => cmd_bitree::free::execute(sub_matches),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        println!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
