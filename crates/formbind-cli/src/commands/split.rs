use formbind::KeyScheme;
use tracing::debug;

use crate::util::read_input;

#[derive(clap::Args)]
pub struct Args {
    /// Key to split (use - for stdin)
    pub key: String,
    /// How nesting is written: nested, brackets or dots
    #[arg(short, long, default_value = "brackets")]
    pub scheme: KeyScheme,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let key = read_input(&args.key)?;
    let scheme = args.scheme;
    let path = scheme.decode(&key);
    debug!(%scheme, segments = path.len(), "split key");
    for segment in path.segments() {
        println!("{segment}");
    }
    Ok(())
}
