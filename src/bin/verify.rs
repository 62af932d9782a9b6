//! 生成済みファイルを読み戻し、元のファイルと一致するか確かめる。

use eyre::{ensure, WrapErr};
use structopt::StructOpt;

use asset_bundler as bundler;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(parse(from_os_str))]
    path_in: std::path::PathBuf,

    /// 変数名とファイルパスを交互に並べたもの
    #[structopt(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let Opt { path_in, args } = Opt::from_args();

    let pairs = bundler::AssetPair::from_args(args, true)?;

    let rdr = std::io::BufReader::new(
        std::fs::File::open(&path_in)
            .wrap_err_with(|| format!("cannot open {}", path_in.display()))?,
    );
    let doc = bundler::parse(rdr)?;

    ensure!(
        doc.entries.len() == pairs.len(),
        "entry count mismatch: document has {}, expected {}",
        doc.entries.len(),
        pairs.len()
    );

    for (entry, pair) in doc.entries.iter().zip(&pairs) {
        ensure!(
            entry.name == pair.name,
            "name mismatch: document has {}, expected {}",
            entry.name,
            pair.name
        );

        let buf = std::fs::read(&pair.path)
            .wrap_err_with(|| format!("cannot read {}", pair.path.display()))?;
        ensure!(
            entry.bytes == buf,
            "{}: contents differ from {}",
            entry.name,
            pair.path.display()
        );

        log::debug!("{}: ok ({} bytes)", entry.name, buf.len());
    }

    log::info!("{}: {} asset(s) ok", path_in.display(), pairs.len());

    Ok(())
}
