use bitree::libs::bitree::DEFAULT_TREE_FILE;
use clap::*;

pub fn arg_infile() -> Arg {
    Arg::new("infile")
        .required(true)
        .num_args(1)
        .index(1)
        .help("Tree file written by `build`. [stdin] for standard input")
}

pub fn arg_target() -> Arg {
    Arg::new("target")
        .required(true)
        .num_args(1)
        .index(2)
        .allow_hyphen_values(true)
        .help("Node value to look for; only the first character is used")
}

pub fn arg_outfile() -> Arg {
    Arg::new("outfile")
        .short('o')
        .long("outfile")
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}

pub fn arg_treefile() -> Arg {
    Arg::new("outfile")
        .short('o')
        .long("outfile")
        .num_args(1)
        .default_value(DEFAULT_TREE_FILE)
        .help("Tree file to write")
}

/// The node value to search for: first character of the `target` argument.
pub fn get_target(args: &ArgMatches) -> anyhow::Result<char> {
    let target = args.get_one::<String>("target").unwrap();
    let mut chars = target.chars();
    let value = chars
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing target"))?;
    if chars.next().is_some() {
        log::warn!("Target {:?} has several characters, using '{}'", target, value);
    }

    Ok(value)
}
