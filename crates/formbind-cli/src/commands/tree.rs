use formbind::{Decoder, FormValues, KeyScheme};

use crate::util::read_input;

#[derive(clap::Args)]
pub struct Args {
    /// Urlencoded query string or form body (use - for stdin)
    pub query: String,
    /// How nesting is written: nested, brackets or dots
    #[arg(short, long, default_value = "brackets")]
    pub scheme: KeyScheme,
    /// Treat every key as a single segment
    #[arg(long, conflicts_with = "scheme")]
    pub flat: bool,
    /// Merge keys that differ only in case
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let query = read_input(&args.query)?;
    let query = query.strip_prefix('?').unwrap_or(&query);
    let values = FormValues::from_urlencoded(query.as_bytes());

    let mut decoder = Decoder::new().case_insensitive(args.case_insensitive);
    if !args.flat {
        decoder = decoder.recurse_scheme(args.scheme);
    }
    print!("{}", decoder.value_tree(&values));
    Ok(())
}
