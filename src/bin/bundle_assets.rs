use structopt::StructOpt;

use asset_bundler as bundler;

/// バイナリファイルをバイト配列リテラルとして1つのソースファイルに埋め込む。
#[derive(Debug, StructOpt)]
struct Opt {
    /// 出力ファイル
    #[structopt(short, long, parse(from_os_str))]
    output: Option<std::path::PathBuf>,

    /// ヘッダ行のパッケージ名
    #[structopt(long)]
    package: Option<String>,

    /// 変数名の検証と、引数の個数が奇数の場合のエラーを有効にする
    #[structopt(long)]
    strict: bool,

    /// 変数名とファイルパスを交互に並べたもの
    #[structopt(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let opt = Opt::from_args();

    let pairs = bundler::AssetPair::from_args(opt.args, opt.strict)?;

    let mut config = bundler::BundleConfig {
        strict: opt.strict,
        ..bundler::BundleConfig::default()
    };
    if let Some(output) = opt.output {
        config.output = output;
    }
    if let Some(package) = opt.package {
        config.package = package;
    }
    bundler::bundle(&pairs, &config)?;

    Ok(())
}
