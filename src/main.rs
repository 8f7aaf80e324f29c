use clap::{Parser, ValueEnum};

mod classify;
mod filelist;
mod logging;
mod render;
mod spec;
mod tree;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "igvtree")]
#[command(
    about = "Classify filenames into a category tree and render it as XML",
    long_about = None
)]
struct Cli {
    /// Log level: OFF, ERROR, WARN, INFO, DEBUG or TRACE.
    #[arg(long, default_value = "INFO")]
    loglevel: String,

    /// Name of the root (Global) node.
    #[arg(long, default_value = "Base")]
    root_name: String,

    #[arg(long, value_enum, default_value_t = Format::Xml)]
    format: Format,

    /// Write the document here instead of stdout.
    #[arg(short = 'o', long)]
    out: Option<String>,

    /// Filenames to classify, one per line.
    file_list: String,

    /// Level name -> pattern rules (JSON).
    rules_json: String,

    /// Node name -> attribute tokens (JSON).
    node_attrs_json: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Xml,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = logging::parse_level(&cli.loglevel)?;
    logging::init(level);

    // 1) Read inputs; rules are validated before anything is classified.
    let filenames = filelist::parse_file_list(&cli.file_list)?;
    let rules = spec::RulesSpec::from_path(&cli.rules_json)?;
    let node_attrs = spec::NodeAttrs::from_path(&cli.node_attrs_json)?;
    let table = rules.validate_and_build()?;

    // 2) Classify every filename at every level.
    let classification = table.classify(&filenames);

    // 3) Assemble the tree.
    let tree = tree::CategoryTree::build(&cli.root_name, &classification, &filenames, &node_attrs)?;

    // 4) Render in full, then emit.
    let doc = match cli.format {
        Format::Xml => render::render_xml(&tree)?,
        Format::Text => render::render_text(&tree)?,
    };
    match &cli.out {
        Some(out) => {
            std::fs::write(out, &doc)?;
            log::info!("Wrote {}", out);
        }
        None => print!("{}", doc),
    }

    Ok(())
}
