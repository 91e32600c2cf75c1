use anyhow::bail;
use formbind::KeyScheme;

#[derive(clap::Args)]
pub struct Args {
    /// Segments in order, outermost first
    #[arg(required = true)]
    pub segments: Vec<String>,
    /// How nesting is written: nested, brackets or dots
    #[arg(short, long, default_value = "brackets")]
    pub scheme: KeyScheme,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let scheme = args.scheme;
    let key = scheme.encode(&args.segments);
    let path = scheme.decode(&key);
    if path.segments() != args.segments.as_slice() {
        bail!("segments cannot be written with the {scheme} scheme: {path}");
    }
    println!("{key}");
    Ok(())
}
