use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ident::is_identifier;
use crate::pair::AssetPair;
use crate::render::{write_declaration, write_header};

pub const DEFAULT_OUTPUT: &str = "assets/assets.odin";
pub const DEFAULT_PACKAGE: &str = "assets";

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("odd number of arguments ({count}): expected name/path pairs")]
    OddArgumentCount { count: usize },

    #[error("invalid identifier: {name:?}")]
    InvalidIdentifier { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BundleResult<T> = Result<T, BundleError>;

#[derive(Clone, Debug)]
pub struct BundleConfig {
    /// 出力ファイル。既存の内容は上書きされる。
    pub output: PathBuf,

    /// ヘッダ行 `package <package>` に使う名前。
    pub package: String,

    /// true なら変数名を検証する。
    pub strict: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            package: DEFAULT_PACKAGE.to_owned(),
            strict: false,
        }
    }
}

/// 全アセットを埋め込んだソースファイルを `config.output` に書き出す。
///
/// 途中でファイル読み込みに失敗した場合はそこで中断する。
/// 出力ファイルは書きかけの状態で残る。
pub fn bundle(pairs: &[AssetPair], config: &BundleConfig) -> BundleResult<()> {
    if config.strict {
        validate_names(&config.package, pairs)?;
    }

    if let Some(dir) = config.output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let file = std::fs::File::create(&config.output)?;
    let mut wtr = std::io::BufWriter::new(file);

    bundle_to_writer(&mut wtr, pairs, &config.package)?;
    wtr.flush()?;

    log::info!("wrote {} asset(s) to {}", pairs.len(), config.output.display());

    Ok(())
}

/// `bundle` の本体。出力先を任意の `Write` にしたもの。名前の検証は行わない。
pub fn bundle_to_writer<W: Write>(
    mut wtr: W,
    pairs: &[AssetPair],
    package: &str,
) -> BundleResult<()> {
    write_header(&mut wtr, package)?;

    for pair in pairs {
        let bytes = read_asset(&pair.path)?;
        log::debug!(
            "{} <- {} ({} bytes)",
            pair.name,
            pair.path.display(),
            bytes.len()
        );
        write_declaration(&mut wtr, &pair.name, &bytes)?;
    }

    Ok(())
}

fn read_asset(path: &Path) -> BundleResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| BundleError::Read {
        path: path.to_owned(),
        source: e,
    })
}

fn validate_names(package: &str, pairs: &[AssetPair]) -> BundleResult<()> {
    let mut names =
        std::iter::once(package).chain(pairs.iter().map(|pair| pair.name.as_str()));

    match names.find(|name| !is_identifier(name)) {
        Some(name) => Err(BundleError::InvalidIdentifier {
            name: name.to_owned(),
        }),
        None => Ok(()),
    }
}
